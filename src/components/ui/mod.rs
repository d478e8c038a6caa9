pub mod button;
pub mod popup;

pub use button::*;
pub use popup::*;
