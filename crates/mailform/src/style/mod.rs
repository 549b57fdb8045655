//! Styling for the composer window.

mod buttons;
mod containers;
mod inputs;
pub mod palette;

pub use buttons::{chip_remove_button_style, primary_button_style, secondary_button_style};
pub use containers::{banner_style, card_style, chip_style, page_style};
pub use inputs::{editor_style, field_input_style};

/// Rounded corner radii.
pub mod radius {
    pub const SMALL: f32 = 4.0;
    pub const MEDIUM: f32 = 6.0;
    pub const LARGE: f32 = 8.0;
    pub const PILL: f32 = 9999.0;
}
