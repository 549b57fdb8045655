//! Application messages (Elm architecture).

use iced::widget::text_editor;

use mailform_core::{Attachment, ComposeConfig, SendError, SendOutcome};

/// Top-level application messages.
#[derive(Debug, Clone)]
pub enum Message {
    /// Compose form messages.
    Compose(ComposeMessage),
    /// Configuration file was read.
    ConfigLoaded(Result<ComposeConfig, String>),
    /// File dialog closed with these readable files.
    FilesPicked(Vec<Attachment>),
    /// The send operation resolved.
    EmailSent(Result<SendOutcome, SendError>),
    /// Close the notification at this index.
    DismissBanner(usize),
    /// Keyboard shortcut.
    KeyPressed(KeyboardAction),
    /// Event with nothing to do.
    Ignored,
}

/// Messages for the compose form.
#[derive(Debug, Clone)]
pub enum ComposeMessage {
    /// Recipient field changed.
    AddressChanged(String),
    /// Message editor changed or moved its cursor.
    MessageEdited(text_editor::Action),
    /// Open the file dialog.
    AttachFiles,
    /// Remove the attachment at this index.
    RemoveAttachment(usize),
    /// Validate and send.
    Send,
    /// Clear all fields.
    Clear,
}

/// Keyboard shortcut actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardAction {
    /// Send the message (Ctrl+Enter).
    Send,
    /// Dismiss notifications (Escape).
    DismissAll,
}
