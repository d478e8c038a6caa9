use crate::components::CloseButton;
use crate::hooks::{use_escape_listener, PopupHandle};
use crate::models::{CloseReason, PopupContent, PopupId};
use crate::state::{PopupEntry, PopupHost};
use crate::theme;
use dioxus::prelude::*;

/// Renders every popup registered with `host`, in construction order.
#[component]
pub fn PopupLayer(host: PopupHost) -> Element {
    let ids = host.popup_ids();
    rsx! {
        for id in ids {
            PopupView { key: "{id}", host, id }
        }
    }
}

#[component]
pub fn PopupView(host: PopupHost, id: PopupId) -> Element {
    let handle = PopupHandle::new(host, id);
    use_escape_listener(handle);

    let Some(PopupEntry { config, state, .. }) = host.entry(id) else {
        return rsx! {};
    };
    let container_class = theme::container_class(state.visibility());
    let title = config.title.clone();

    rsx! {
        div {
            id: "{id}",
            class: "{container_class}",
            // Clicks inside the card stop propagating, so only the backdrop lands here.
            onclick: move |_| handle.dismiss(CloseReason::Backdrop),
            div {
                class: theme::CARD,
                onclick: move |e| e.stop_propagation(),
                div { class: theme::HEADER,
                    h2 { class: theme::TITLE, "{title}" }
                    CloseButton { onclick: move |_| handle.dismiss(CloseReason::CloseButton) }
                }
                {popup_body(&config.content)}
            }
        }
    }
}

fn popup_body(content: &PopupContent) -> Element {
    match content {
        PopupContent::Text(markup) => rsx! {
            div { class: theme::BODY, dangerous_inner_html: "{markup}" }
        },
        PopupContent::Node(node) => rsx! {
            div { class: theme::BODY, {node.clone()} }
        },
        PopupContent::Empty => rsx! {
            div { class: theme::BODY }
        },
    }
}
