#![allow(non_snake_case)]
//! A reusable modal popup for Dioxus apps.
//!
//! Wrap the app in [`PopupProvider`], then construct popups with
//! [`use_popup`] or [`PopupHost::create`]. Each popup renders hidden and is
//! driven through its [`PopupHandle`]. Users can dismiss it with the close
//! button, a click on the backdrop, or Escape.

pub mod components;
pub mod error;
pub mod hooks;
pub mod icons;
pub mod models;
pub mod state;
pub mod theme;

pub use error::PopupError;
pub use hooks::{try_use_popup_host, use_popup, use_popup_host, PopupHandle};
pub use models::{CloseReason, PopupConfig, PopupContent, PopupId, PopupState, Visibility};
pub use state::{PopupHost, PopupProvider, PopupRegistry};
