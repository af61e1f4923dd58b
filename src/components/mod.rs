pub mod action_button;
pub mod card;
pub mod status_badge;

pub use action_button::{action_button, ButtonTone};
pub use card::{card_style, error_banner_style, inset_style};
pub use status_badge::status_badge;
