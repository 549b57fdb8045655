//! Compose email view.

use iced::widget::{
    Space, button, column, container, row, scrollable, text, text_editor, text_input,
};
use iced::{Alignment, Element, Length};

use mailform_core::{ComposeForm, FieldError};

use super::attachments::{view_attach_control, view_attachment_list};
use crate::message::{ComposeMessage, Message};
use crate::style::{self, palette};

/// Renders the compose card.
///
/// `editor` holds the message body being edited; the form keeps its text.
pub fn view_compose<'a>(
    form: &'a ComposeForm,
    editor: &'a text_editor::Content,
) -> Element<'a, Message> {
    let p = palette::current();
    let errors = form.errors();

    let header = column![
        text("Compose Email").size(24).color(p.text_primary),
        text("Send an email message with optional attachments")
            .size(14)
            .color(p.text_secondary),
    ]
    .spacing(4);

    let address_field = create_field(
        "Recipient Email",
        form.address(),
        "recipient@example.com",
        errors.address,
        |s| Message::Compose(ComposeMessage::AddressChanged(s)),
    );

    let message_field = create_editor_field("Message", editor, errors.message);

    let mut content = column![header, address_field, message_field].spacing(16);

    if !form.attachments().is_empty() {
        content = content.push(view_attachment_list(form));
    }

    content = content.push(view_attach_control(form));
    content = content.push(view_footer(form.is_submitting()));

    let card = container(content.padding(24))
        .max_width(640.0)
        .style(style::card_style);

    container(scrollable(card).height(Length::Shrink))
        .center_x(Length::Fill)
        .into()
}

/// Labeled input with its error line.
fn create_field<'a>(
    label: &'a str,
    value: &'a str,
    placeholder: &'a str,
    error: Option<FieldError>,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    let input = text_input(placeholder, value)
        .on_input(on_change)
        .padding(10)
        .size(14)
        .width(Length::Fill)
        .style(style::field_input_style(error.is_some()));

    with_label(label, input.into(), error)
}

/// Labeled multi-line editor with its error line.
fn create_editor_field<'a>(
    label: &'a str,
    content: &'a text_editor::Content,
    error: Option<FieldError>,
) -> Element<'a, Message> {
    let editor = text_editor(content)
        .placeholder("Write your message here...")
        .on_action(|action| Message::Compose(ComposeMessage::MessageEdited(action)))
        .padding(10)
        .size(14)
        .height(Length::Fixed(180.0))
        .style(style::editor_style(error.is_some()));

    with_label(label, editor.into(), error)
}

fn with_label<'a>(
    label: &'a str,
    input: Element<'a, Message>,
    error: Option<FieldError>,
) -> Element<'a, Message> {
    let p = palette::current();
    let label_color = if error.is_some() {
        p.accent_red
    } else {
        p.text_secondary
    };

    let mut field = column![text(label).size(14).color(label_color), input].spacing(6);

    if let Some(error) = error {
        field = field.push(text(error.message()).size(13).color(p.accent_red));
    }

    field.into()
}

/// Clear and Send buttons.
fn view_footer(is_submitting: bool) -> Element<'static, Message> {
    let clear_btn = button(text("Clear").size(14))
        .on_press_maybe((!is_submitting).then_some(Message::Compose(ComposeMessage::Clear)))
        .padding([10, 20])
        .style(style::secondary_button_style);

    let send_btn = button(
        text(if is_submitting {
            "Sending..."
        } else {
            "Send Email"
        })
        .size(14),
    )
    .on_press_maybe((!is_submitting).then_some(Message::Compose(ComposeMessage::Send)))
    .padding([10, 20])
    .style(style::primary_button_style);

    row![clear_btn, Space::new().width(Length::Fill), send_btn]
        .align_y(Alignment::Center)
        .into()
}
