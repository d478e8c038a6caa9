pub mod use_escape;
pub mod use_popup;


pub use use_escape::use_escape_listener;
pub use use_popup::{try_use_popup_host, use_popup, use_popup_host, PopupHandle};
