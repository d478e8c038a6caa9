//! Class names applied to the popup markup.
//!
//! These are part of the public markup contract: stylesheets target them
//! directly, so changing a value here is a breaking change for callers.

use crate::models::Visibility;

pub const CONTAINER: &str =
    "fixed inset-0 bg-background/80 backdrop-blur-sm z-50 flex items-center justify-center";
pub const CARD: &str = "w-full max-w-lg mx-auto p-4 bg-white rounded-lg shadow-md";
pub const HEADER: &str = "flex items-center justify-between pb-4";
pub const TITLE: &str = "text-2xl font-bold";
pub const CLOSE_BUTTON: &str =
    "p-1 rounded-full hover:bg-gray-100 focus:outline-none focus:ring-2 focus:ring-gray-200";
pub const BODY: &str = "py-4";
pub const CLOSE_GLYPH: &str = "w-6 h-6";

/// Marks a popup as not displayed.
pub const HIDDEN: &str = "hidden";

pub fn container_class(visibility: Visibility) -> String {
    match visibility {
        Visibility::Visible => CONTAINER.to_string(),
        Visibility::Hidden => format!("{CONTAINER} {HIDDEN}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_indicator_follows_visibility() {
        let hidden = container_class(Visibility::Hidden);
        assert!(hidden.split_whitespace().any(|c| c == HIDDEN));

        let visible = container_class(Visibility::Visible);
        assert!(!visible.split_whitespace().any(|c| c == HIDDEN));
        assert_eq!(visible, CONTAINER);
    }
}
