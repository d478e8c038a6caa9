use crate::hooks::PopupHandle;
use crate::models::{CloseReason, PopupId};
use dioxus::prelude::*;
use serde::Deserialize;
use tracing::debug;

const LISTENER_REGISTRY: &str = "window.__universalPopupKeydown";

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub(crate) struct KeyPress {
    pub key: String,
}

impl KeyPress {
    pub fn is_escape(&self) -> bool {
        self.key == "Escape"
    }
}

/// Listens for Escape anywhere in the document and dismisses `handle` with it.
///
/// The listener is tied to the calling component: it is removed from the
/// document when that component unmounts.
pub fn use_escape_listener(handle: PopupHandle) {
    use_future(move || async move { forward_key_presses(handle).await });
    use_drop(move || {
        let _ = document::eval(&remove_listener_script(handle.id()));
    });
}

async fn forward_key_presses(handle: PopupHandle) {
    let mut eval = document::eval(&install_listener_script(handle.id()));
    loop {
        match eval.recv::<KeyPress>().await {
            Ok(press) if press.is_escape() => handle.dismiss(CloseReason::Escape),
            Ok(_) => {}
            Err(err) => {
                debug!(popup = %handle.id(), ?err, "keydown bridge closed");
                break;
            }
        }
    }
}

fn listener_key(id: PopupId) -> String {
    serde_json::Value::from(id.to_string()).to_string()
}

pub(crate) fn install_listener_script(id: PopupId) -> String {
    format!(
        r#"
        const key = {key};
        const registry = {LISTENER_REGISTRY} || ({LISTENER_REGISTRY} = {{}});
        if (registry[key]) {{
            document.removeEventListener("keydown", registry[key]);
        }}
        registry[key] = (event) => dioxus.send({{ key: event.key }});
        document.addEventListener("keydown", registry[key]);
        "#,
        key = listener_key(id),
    )
}

pub(crate) fn remove_listener_script(id: PopupId) -> String {
    format!(
        r#"
        const key = {key};
        const registry = {LISTENER_REGISTRY};
        if (registry && registry[key]) {{
            document.removeEventListener("keydown", registry[key]);
            delete registry[key];
        }}
        "#,
        key = listener_key(id),
    )
}
