use crate::icons::CloseGlyph;
use crate::theme;
use dioxus::prelude::*;

#[component]
pub fn CloseButton(onclick: EventHandler<MouseEvent>) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: theme::CLOSE_BUTTON,
            onclick: move |e| onclick.call(e),
            CloseGlyph {}
        }
    }
}
