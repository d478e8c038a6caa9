use crate::theme;
use dioxus::prelude::*;

#[component]
fn IconBase(
    #[props(default)] class: Option<String>,
    #[props(default = 2.0)] stroke_width: f32,
    children: Element,
) -> Element {
    let class = class.unwrap_or_default();
    rsx! {
        svg {
            "xmlns": "http://www.w3.org/2000/svg",
            fill: "none",
            view_box: "0 0 24 24",
            stroke_width: "{stroke_width}",
            stroke: "currentColor",
            class,
            {children}
        }
    }
}

/// The "x" drawn inside the popup's close button.
#[component]
pub fn CloseGlyph() -> Element {
    rsx! {
        IconBase { class: Some(theme::CLOSE_GLYPH.to_string()), stroke_width: 1.5,
            path {
                stroke_linecap: "round",
                stroke_linejoin: "round",
                d: "M6 18L18 6M6 6l12 12",
            }
        }
    }
}
