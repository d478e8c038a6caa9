use crate::error::PopupError;
use crate::models::{CloseReason, PopupConfig, PopupId};
use crate::state::PopupHost;
use dioxus::prelude::*;
use tracing::{debug, warn};

/// Control handle returned when a popup is constructed.
///
/// The handle holds no popup state of its own; it addresses the entry in the
/// provider's registry, so copies of it all drive the same popup.
#[derive(Clone, Copy, PartialEq)]
pub struct PopupHandle {
    host: PopupHost,
    id: PopupId,
}

impl PopupHandle {
    pub(crate) fn new(host: PopupHost, id: PopupId) -> Self {
        Self { host, id }
    }

    pub fn id(&self) -> PopupId {
        self.id
    }

    pub fn is_visible(&self) -> bool {
        self.host
            .registry
            .read()
            .get(self.id)
            .is_some_and(|e| e.state.is_visible())
    }

    /// Makes the popup visible. Ignored, with a warning, after `destroy`.
    pub fn show(&self) {
        if let Err(err) = self.try_show() {
            warn!(popup = %self.id, %err, "show ignored");
        }
    }

    pub fn try_show(&self) -> Result<(), PopupError> {
        let mut registry = self.host.registry;
        if registry.write().show(self.id)? {
            debug!(popup = %self.id, "popup shown");
        }
        Ok(())
    }

    /// Hides the popup and fires `on_close`, on every call.
    pub fn hide(&self) {
        if let Err(err) = self.try_hide() {
            warn!(popup = %self.id, %err, "hide ignored");
        }
    }

    pub fn try_hide(&self) -> Result<(), PopupError> {
        self.close_with(CloseReason::Programmatic).map(|_| ())
    }

    /// Removes the popup from its provider. Its markup and document listener go with it.
    pub fn destroy(&self) {
        let mut registry = self.host.registry;
        match registry.try_write() {
            Ok(mut registry) => {
                if registry.remove(self.id).is_some() {
                    debug!(popup = %self.id, "popup destroyed");
                }
            }
            // The provider unmounted first and took the registry with it.
            Err(_) => debug!(popup = %self.id, "provider already gone"),
        };
    }

    /// Close triggered from the popup's own controls or the keyboard.
    pub(crate) fn dismiss(&self, reason: CloseReason) {
        if let Err(err) = self.close_with(reason) {
            debug!(popup = %self.id, ?reason, %err, "dismiss ignored");
        }
    }

    fn close_with(&self, reason: CloseReason) -> Result<bool, PopupError> {
        let mut registry = self.host.registry;
        if !registry.write().close(self.id, reason)? {
            return Ok(false);
        }
        debug!(popup = %self.id, ?reason, "popup closed");

        let on_close = registry.peek().on_close(self.id);
        if let Some(handler) = on_close {
            handler.call(reason);
        }
        Ok(true)
    }
}

pub fn use_popup_host() -> PopupHost {
    use_context::<PopupHost>()
}

pub fn try_use_popup_host() -> Result<PopupHost, PopupError> {
    try_use_context::<PopupHost>().ok_or(PopupError::MissingProvider)
}

/// Constructs a popup on the first render and destroys it when the calling
/// component unmounts. Later renders return the same handle and ignore `config`.
pub fn use_popup(config: PopupConfig) -> PopupHandle {
    let host = use_popup_host();
    let handle = use_hook(move || host.create(config));
    use_drop(move || handle.destroy());
    handle
}
