//! Compose form state and submission sequencing.
//!
//! Submission is split in two so a host that runs futures on its own
//! executor can hold the form between the halves:
//!
//! 1. [`ComposeForm::begin_submit`] validates and takes a snapshot.
//! 2. The host awaits [`Sender::send`] with that snapshot.
//! 3. [`ComposeForm::finish_submit`] applies the result.
//!
//! [`ComposeForm::submit`] chains all three for callers that can borrow the
//! form across the await.

use tracing::{debug, info, warn};

use crate::attachment::{Attachment, AttachmentLimits, AttachmentSet, Rejection};
use crate::service::{OutgoingEmail, SendError, SendOutcome, Sender};
use crate::validation::{FieldErrors, validate_fields};

/// Description shown when a sender faults.
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred";

/// Why a submission did not start.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// A previous submission has not resolved yet.
    #[error("A message is already being sent")]
    InFlight,

    /// One or both fields failed validation.
    #[error("Form has invalid fields")]
    Invalid(FieldErrors),
}

/// User-facing result of a finished submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The sender reported success. The form was cleared.
    Sent(String),
    /// The sender reported an explicit failure. The form was kept.
    Failed(String),
    /// The sender faulted. The form was kept.
    Fault,
}

impl Notice {
    /// Short headline for a notification.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Sent(_) => "Success!",
            Self::Failed(_) => "Failed to send email",
            Self::Fault => "Error",
        }
    }

    /// Body text for a notification.
    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            Self::Sent(message) | Self::Failed(message) => message,
            Self::Fault => UNEXPECTED_ERROR,
        }
    }

    /// Returns true for failures and faults.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        !matches!(self, Self::Sent(_))
    }
}

/// State for the compose form.
#[derive(Debug, Clone, Default)]
pub struct ComposeForm {
    address: String,
    message: String,
    attachments: AttachmentSet,
    submitting: bool,
    errors: FieldErrors,
    limits: AttachmentLimits,
}

impl ComposeForm {
    /// Creates an empty form with the default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty form with custom attachment limits.
    #[must_use]
    pub fn with_limits(limits: AttachmentLimits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    /// Recipient address as typed.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Message body as typed.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Current attachments.
    #[must_use]
    pub const fn attachments(&self) -> &AttachmentSet {
        &self.attachments
    }

    /// Field errors from the last validation pass.
    #[must_use]
    pub const fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Attachment limits in effect.
    #[must_use]
    pub const fn limits(&self) -> &AttachmentLimits {
        &self.limits
    }

    /// Returns true while a send is in flight.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Whether the attach control should be enabled.
    #[must_use]
    pub fn can_attach(&self) -> bool {
        !self.submitting && !self.attachments.is_full(&self.limits)
    }

    /// Sets the recipient. Errors are only recomputed by [`Self::validate`].
    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = address.into();
    }

    /// Sets the message body. Errors are only recomputed by [`Self::validate`].
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    /// Adds a batch of selected files and returns what was turned away.
    pub fn add_attachments(
        &mut self,
        incoming: impl IntoIterator<Item = Attachment>,
    ) -> Vec<Rejection> {
        let (attachments, rejections) = self.attachments.with_candidates(incoming, &self.limits);
        self.attachments = attachments;

        for rejection in &rejections {
            warn!(%rejection, "Attachment rejected");
        }
        debug!(count = self.attachments.len(), "Attachments updated");

        rejections
    }

    /// Removes the attachment at `index`. Out-of-range indices are ignored.
    pub fn remove_attachment(&mut self, index: usize) {
        self.attachments = self.attachments.without(index);
    }

    /// Validates both fields and updates the error slots.
    ///
    /// Returns true if the form can be sent.
    pub fn validate(&mut self) -> bool {
        self.errors = validate_fields(&self.address, &self.message);
        self.errors.is_empty()
    }

    /// Validates and, if the form is valid, marks it as submitting.
    ///
    /// Returns the snapshot to hand to the sender.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::InFlight`] without touching any state if a
    /// send is already pending, or [`SubmitError::Invalid`] if validation
    /// fails.
    pub fn begin_submit(&mut self) -> Result<OutgoingEmail, SubmitError> {
        if self.submitting {
            debug!("Submit ignored, send already in flight");
            return Err(SubmitError::InFlight);
        }

        if !self.validate() {
            debug!(errors = ?self.errors, "Submit blocked by validation");
            return Err(SubmitError::Invalid(self.errors));
        }

        self.submitting = true;
        info!(
            to = %self.address,
            attachments = self.attachments.len(),
            "Submitting email"
        );

        Ok(OutgoingEmail::new(
            self.address.clone(),
            self.message.clone(),
            self.attachments.clone(),
        ))
    }

    /// Applies the sender's result and ends the submission.
    ///
    /// Success clears the content; failures and faults keep it for a retry.
    pub fn finish_submit(&mut self, result: Result<SendOutcome, SendError>) -> Notice {
        self.submitting = false;

        match result {
            Ok(outcome) if outcome.success => {
                info!("Email sent");
                self.address.clear();
                self.message.clear();
                self.attachments = AttachmentSet::new();
                Notice::Sent(outcome.message)
            }
            Ok(outcome) => {
                warn!(message = %outcome.message, "Email not sent");
                Notice::Failed(outcome.message)
            }
            Err(e) => {
                warn!(error = %e, "Sender faulted");
                Notice::Fault
            }
        }
    }

    /// Validates, sends through `sender`, and applies the result.
    ///
    /// # Errors
    ///
    /// Returns a [`SubmitError`] if the submission could not start. The send
    /// itself never yields an error here; its result becomes a [`Notice`].
    pub async fn submit<S: Sender>(&mut self, sender: &S) -> Result<Notice, SubmitError> {
        let email = self.begin_submit()?;
        let result = sender.send(email).await;
        Ok(self.finish_submit(result))
    }

    /// Clears all content and error slots.
    pub fn reset(&mut self) {
        self.address.clear();
        self.message.clear();
        self.attachments = AttachmentSet::new();
        self.errors = FieldErrors::default();
    }
}
