//! Color palette.

use iced::Color;

/// Colors used across the composer.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub primary: Color,
    pub primary_light: Color,
    pub primary_dark: Color,

    pub surface: Color,
    pub surface_sunken: Color,
    pub background: Color,

    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_on_primary: Color,

    pub accent_green: Color,
    pub accent_red: Color,

    pub hover: Color,
    pub selected: Color,

    pub border_subtle: Color,
    pub border_medium: Color,
}

impl Palette {
    /// Light palette.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::from_rgb(0.0, 0.48, 0.95),
            primary_light: Color::from_rgb(0.35, 0.65, 1.0),
            primary_dark: Color::from_rgb(0.0, 0.38, 0.80),

            surface: Color::WHITE,
            surface_sunken: Color::from_rgb(0.97, 0.975, 0.99),
            background: Color::from_rgb(0.96, 0.965, 0.98),

            text_primary: Color::from_rgb(0.08, 0.10, 0.14),
            text_secondary: Color::from_rgb(0.42, 0.46, 0.54),
            text_muted: Color::from_rgb(0.60, 0.64, 0.70),
            text_on_primary: Color::WHITE,

            accent_green: Color::from_rgb(0.2, 0.75, 0.45),
            accent_red: Color::from_rgb(0.98, 0.28, 0.35),

            hover: Color::from_rgb(0.97, 0.98, 0.99),
            selected: Color::from_rgb(0.94, 0.97, 1.0),

            border_subtle: Color::from_rgb(0.92, 0.93, 0.95),
            border_medium: Color::from_rgb(0.86, 0.88, 0.91),
        }
    }
}

/// Gets the active palette.
#[must_use]
pub const fn current() -> Palette {
    Palette::light()
}
