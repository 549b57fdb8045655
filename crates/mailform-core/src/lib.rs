//! # mailform-core
//!
//! Core logic for the `MailForm` email composer.
//!
//! This crate provides:
//! - Recipient address and message validation
//! - Attachment set management with count and size limits
//! - Compose form state and submission sequencing
//! - The send operation boundary, a simulated sender and a timeout adapter
//! - Configuration loading

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod attachment;
pub mod config;
mod error;
pub mod form;
pub mod service;
pub mod validation;

pub use attachment::{
    Attachment, AttachmentLimits, AttachmentSet, MAX_ATTACHMENTS, MAX_FILE_SIZE, Rejection,
    format_size, size_limit_hint,
};
pub use config::{ComposeConfig, SenderConfig};
pub use error::{Error, Result};
pub use form::{ComposeForm, Notice, SubmitError, UNEXPECTED_ERROR};
pub use service::{
    OutgoingEmail, SendError, SendOutcome, Sender, SimulatedSender, Timeout,
};
pub use validation::{FieldError, FieldErrors, is_valid_address};
