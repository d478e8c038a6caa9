#![allow(non_snake_case)]

use dioxus::prelude::*;
use tracing::info;
use universal_popup::{use_popup, CloseReason, PopupConfig, PopupProvider};

fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/popup.css") }
        PopupProvider { Page {} }
    }
}

fn Page() -> Element {
    let mut closed = use_signal(|| 0usize);
    let on_close = use_callback(move |reason: CloseReason| {
        info!(?reason, "demo popup closed");
        closed += 1;
    });
    let popup = use_popup(
        PopupConfig::new("Hi")
            .content("<p>Body</p>")
            .on_close(on_close),
    );

    rsx! {
        main { class: "page",
            button { class: "open", onclick: move |_| popup.show(), "Open popup" }
            p { "Closed {closed} times" }
        }
    }
}

fn main() {
    tracing_subscriber::fmt::init();
    LaunchBuilder::new().launch(App);
}
