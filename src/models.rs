use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one popup inside a [`PopupProvider`](crate::state::PopupProvider).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PopupId(pub(crate) u64);

impl fmt::Display for PopupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "popup-{}", self.0)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

impl Visibility {
    pub fn is_visible(&self) -> bool {
        matches!(self, Visibility::Visible)
    }
}

/// What closed the popup. Passed to the `on_close` handler.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum CloseReason {
    /// `PopupHandle::hide` was called.
    Programmatic,
    CloseButton,
    /// A click that landed on the backdrop rather than inside the card.
    Backdrop,
    Escape,
}

impl CloseReason {
    pub fn is_user_initiated(&self) -> bool {
        !matches!(self, CloseReason::Programmatic)
    }
}

/// Body of the popup.
///
/// `Text` is inserted as raw markup, so `"<p>Body</p>"` renders a paragraph.
#[derive(Clone, Default)]
pub enum PopupContent {
    #[default]
    Empty,
    Text(String),
    Node(Element),
}

impl PopupContent {
    pub fn is_empty(&self) -> bool {
        match self {
            PopupContent::Empty => true,
            PopupContent::Text(text) => text.is_empty(),
            PopupContent::Node(_) => false,
        }
    }
}

impl fmt::Debug for PopupContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PopupContent::Empty => f.write_str("Empty"),
            PopupContent::Text(text) => f.debug_tuple("Text").field(text).finish(),
            PopupContent::Node(_) => f.write_str("Node(..)"),
        }
    }
}

impl From<&str> for PopupContent {
    fn from(text: &str) -> Self {
        PopupContent::Text(text.to_string())
    }
}

impl From<String> for PopupContent {
    fn from(text: String) -> Self {
        PopupContent::Text(text)
    }
}

impl From<Element> for PopupContent {
    fn from(node: Element) -> Self {
        PopupContent::Node(node)
    }
}

pub const DEFAULT_TITLE: &str = "Popup";

#[derive(Clone)]
pub struct PopupConfig {
    pub title: String,
    pub content: PopupContent,
    pub on_close: Option<EventHandler<CloseReason>>,
}

impl fmt::Debug for PopupConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PopupConfig")
            .field("title", &self.title)
            .field("content", &self.content)
            .field("on_close", &self.on_close.is_some())
            .finish()
    }
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            content: PopupContent::Empty,
            on_close: None,
        }
    }
}

impl PopupConfig {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn content(mut self, content: impl Into<PopupContent>) -> Self {
        self.content = content.into();
        self
    }

    pub fn on_close(mut self, handler: EventHandler<CloseReason>) -> Self {
        self.on_close = Some(handler);
        self
    }
}

/// Visible/hidden state machine of a single popup.
///
/// `show` and `close` report whether anything observable happened so the
/// caller knows when to re-render and when to fire `on_close`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct PopupState {
    visibility: Visibility,
}

impl PopupState {
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_visible(&self) -> bool {
        self.visibility.is_visible()
    }

    /// Returns `true` when the popup went from hidden to visible.
    pub fn show(&mut self) -> bool {
        let changed = !self.is_visible();
        self.visibility = Visibility::Visible;
        changed
    }

    /// Hides the popup and returns whether `on_close` must fire.
    ///
    /// A programmatic close always fires, even on a hidden popup. Every other
    /// reason only acts on a visible popup.
    pub fn close(&mut self, reason: CloseReason) -> bool {
        if reason.is_user_initiated() && !self.is_visible() {
            return false;
        }
        self.visibility = Visibility::Hidden;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        let state = PopupState::default();
        assert_eq!(state.visibility(), Visibility::Hidden);
        assert!(!state.is_visible());
    }

    #[test]
    fn show_then_hide() {
        let mut state = PopupState::default();
        assert!(state.show());
        assert!(state.is_visible());
        assert!(!state.show(), "second show is not a transition");

        assert!(state.close(CloseReason::Programmatic));
        assert!(!state.is_visible());
    }

    #[test]
    fn programmatic_hide_fires_every_call() {
        let mut state = PopupState::default();
        assert!(state.close(CloseReason::Programmatic));
        assert!(state.close(CloseReason::Programmatic));
        assert!(!state.is_visible());
    }

    #[test]
    fn escape_only_acts_on_visible_popup() {
        let mut state = PopupState::default();
        assert!(!state.close(CloseReason::Escape));

        state.show();
        assert!(state.close(CloseReason::Escape));
        assert!(!state.is_visible());
        assert!(!state.close(CloseReason::Escape));
    }

    #[test]
    fn user_dismissals_ignore_hidden_popup() {
        for reason in [CloseReason::CloseButton, CloseReason::Backdrop] {
            let mut state = PopupState::default();
            assert!(!state.close(reason), "{reason:?} on hidden popup");
            state.show();
            assert!(state.close(reason), "{reason:?} on visible popup");
        }
    }

    #[test]
    fn config_defaults() {
        let config = PopupConfig::default();
        assert_eq!(config.title, "Popup");
        assert!(config.content.is_empty());
        assert!(config.on_close.is_none());
    }

    #[test]
    fn content_conversions() {
        let config = PopupConfig::new("Hi").content("<p>Body</p>");
        assert_eq!(config.title, "Hi");
        match config.content {
            PopupContent::Text(ref html) => assert_eq!(html, "<p>Body</p>"),
            other => panic!("expected text content, got {other:?}"),
        }

        let owned: PopupContent = String::new().into();
        assert!(owned.is_empty());
    }

    #[test]
    fn popup_id_display() {
        assert_eq!(PopupId(7).to_string(), "popup-7");
    }
}
