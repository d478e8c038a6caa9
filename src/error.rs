use crate::models::PopupId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PopupError {
    #[error("No PopupProvider found above this component")]
    MissingProvider,

    #[error("Popup {0} has been destroyed")]
    Destroyed(PopupId),
}

impl PopupError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            PopupError::MissingProvider => {
                "Popups are unavailable: wrap the app in a PopupProvider.".to_string()
            }
            PopupError::Destroyed(_) => "This dialog is no longer available.".to_string(),
        }
    }
}
