//! Notification banners.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Length};

use crate::message::Message;
use crate::model::Banner;
use crate::style::{self, palette};

/// Stack of dismissible banners, newest last.
pub fn view_banners(banners: &[Banner]) -> Element<'_, Message> {
    let p = palette::current();

    banners
        .iter()
        .enumerate()
        .fold(column![].spacing(8), |stack, (index, banner)| {
            let title_color = if banner.is_error {
                p.accent_red
            } else {
                p.accent_green
            };

            let body = row![
                column![
                    text(banner.title.clone()).size(14).color(title_color),
                    text(banner.description.clone())
                        .size(13)
                        .color(p.text_secondary),
                ]
                .spacing(2),
                Space::new().width(Length::Fill),
                button(text("×").size(14))
                    .on_press(Message::DismissBanner(index))
                    .padding([2, 8])
                    .style(style::chip_remove_button_style),
            ]
            .align_y(Alignment::Center);

            stack.push(
                container(body)
                    .padding([10, 14])
                    .width(Length::Fill)
                    .style(style::banner_style(banner.is_error)),
            )
        })
        .into()
}
