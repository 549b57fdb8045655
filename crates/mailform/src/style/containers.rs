//! Container style functions.

use iced::widget::container;
use iced::{Background, Border};

use super::palette;
use super::radius;

/// Window background.
pub fn page_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.background)),
        ..Default::default()
    }
}

/// Compose card.
pub fn card_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::LARGE.into(),
        },
        ..Default::default()
    }
}

/// Attachment chip.
pub fn chip_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface_sunken)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::MEDIUM.into(),
        },
        ..Default::default()
    }
}

/// Notification banner, red for errors and green otherwise.
pub fn banner_style(is_error: bool) -> impl Fn(&iced::Theme) -> container::Style {
    move |_theme| {
        let p = palette::current();
        let accent = if is_error { p.accent_red } else { p.accent_green };

        container::Style {
            background: Some(Background::Color(p.surface)),
            text_color: Some(p.text_primary),
            border: Border {
                color: accent,
                width: 1.0,
                radius: radius::MEDIUM.into(),
            },
            ..Default::default()
        }
    }
}
