//! Text input style functions.

use iced::widget::{text_editor, text_input};
use iced::{Background, Border};

use super::palette;
use super::radius;

/// Single-line field, outlined in red while it has an error.
pub fn field_input_style(
    has_error: bool,
) -> impl Fn(&iced::Theme, text_input::Status) -> text_input::Style {
    move |_theme, status| {
        let p = palette::current();
        let idle_border = if has_error { p.accent_red } else { p.border_medium };

        let base = text_input::Style {
            background: Background::Color(p.surface),
            border: Border {
                color: idle_border,
                width: 1.0,
                radius: radius::SMALL.into(),
            },
            icon: p.text_muted,
            placeholder: p.text_muted,
            value: p.text_primary,
            selection: p.selected,
        };

        match status {
            text_input::Status::Active | text_input::Status::Hovered => base,
            text_input::Status::Focused { .. } => text_input::Style {
                border: Border {
                    color: if has_error { p.accent_red } else { p.primary },
                    ..base.border
                },
                ..base
            },
            text_input::Status::Disabled => text_input::Style {
                background: Background::Color(p.surface_sunken),
                value: p.text_muted,
                ..base
            },
        }
    }
}

/// Multi-line message editor, outlined the same way as [`field_input_style`].
pub fn editor_style(
    has_error: bool,
) -> impl Fn(&iced::Theme, text_editor::Status) -> text_editor::Style {
    move |theme, status| {
        let p = palette::current();
        let mut style = text_editor::default(theme, status);

        style.background = Background::Color(p.surface);
        style.placeholder = p.text_muted;
        style.value = p.text_primary;
        style.selection = p.selected;
        style.border = Border {
            color: match status {
                _ if has_error => p.accent_red,
                text_editor::Status::Focused { .. } => p.primary,
                _ => p.border_medium,
            },
            width: 1.0,
            radius: radius::SMALL.into(),
        };

        if matches!(status, text_editor::Status::Disabled) {
            style.background = Background::Color(p.surface_sunken);
            style.value = p.text_muted;
        }

        style
    }
}
