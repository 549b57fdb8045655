//! Attachment chips and the attach control.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Length};

use mailform_core::{ComposeForm, size_limit_hint};

use crate::message::{ComposeMessage, Message};
use crate::style::{self, palette};

/// Chips for every attachment, in insertion order.
pub fn view_attachment_list(form: &ComposeForm) -> Element<'_, Message> {
    let p = palette::current();

    let chips = form
        .attachments()
        .iter()
        .enumerate()
        .fold(column![].spacing(8), |list, (index, attachment)| {
            let chip = row![
                text(attachment.name.clone())
                    .size(14)
                    .color(p.text_primary)
                    .width(Length::Shrink),
                text(format!("({})", attachment.display_size()))
                    .size(12)
                    .color(p.text_muted),
                Space::new().width(Length::Fill),
                button(text("×").size(14))
                    .on_press(Message::Compose(ComposeMessage::RemoveAttachment(index)))
                    .padding([2, 8])
                    .style(style::chip_remove_button_style),
            ]
            .spacing(8)
            .align_y(Alignment::Center);

            list.push(container(chip).padding([6, 10]).style(style::chip_style))
        });

    column![
        text("Attachments").size(14).color(p.text_secondary),
        chips
    ]
    .spacing(8)
    .into()
}

/// "Attach Files (n/max)" button with the size hint under it.
pub fn view_attach_control(form: &ComposeForm) -> Element<'_, Message> {
    let p = palette::current();
    let limits = form.limits();

    let label = row![
        text("Attach Files").size(14),
        text(format!(
            "({}/{})",
            form.attachments().len(),
            limits.max_attachments
        ))
        .size(12)
        .color(p.text_muted),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let attach_btn = button(label)
        .on_press_maybe(
            form.can_attach()
                .then_some(Message::Compose(ComposeMessage::AttachFiles)),
        )
        .padding([8, 14])
        .style(style::secondary_button_style);

    column![
        attach_btn,
        text(size_limit_hint(limits)).size(12).color(p.text_muted),
    ]
    .spacing(4)
    .into()
}
