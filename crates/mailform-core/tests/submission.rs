//! Integration tests for compose form submission.
//!
//! These tests drive the form with scripted senders that record what they
//! were asked to deliver.

#![allow(clippy::unwrap_used)]

use std::sync::Mutex;
use std::time::Duration;

use tokio_test::{assert_err, assert_ok};

use mailform_core::{
    Attachment, ComposeForm, FieldError, Notice, OutgoingEmail, SendError, SendOutcome, Sender,
    SimulatedSender, SubmitError, Timeout,
};

/// Sender that replays a fixed result and records every email.
struct ScriptedSender {
    result: Result<SendOutcome, SendError>,
    sent: Mutex<Vec<OutgoingEmail>>,
}

impl ScriptedSender {
    fn new(result: Result<SendOutcome, SendError>) -> Self {
        Self {
            result,
            sent: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    fn last(&self) -> Option<OutgoingEmail> {
        self.sent.lock().unwrap().last().cloned()
    }
}

impl Sender for ScriptedSender {
    async fn send(&self, email: OutgoingEmail) -> Result<SendOutcome, SendError> {
        self.sent.lock().unwrap().push(email);
        self.result.clone()
    }
}

/// Sender that never resolves.
struct Stalled;

impl Sender for Stalled {
    async fn send(&self, _email: OutgoingEmail) -> Result<SendOutcome, SendError> {
        std::future::pending().await
    }
}

fn form_with(address: &str, message: &str) -> ComposeForm {
    let mut form = ComposeForm::new();
    form.set_address(address);
    form.set_message(message);
    form
}

#[tokio::test]
async fn invalid_form_never_reaches_sender() {
    let sender = ScriptedSender::new(Ok(SendOutcome::sent("ok")));
    let mut form = form_with("x", "");

    let err = assert_err!(form.submit(&sender).await);

    let SubmitError::Invalid(errors) = err else {
        panic!("expected validation failure, got {err:?}");
    };
    assert_eq!(errors.address, Some(FieldError::InvalidAddress));
    assert_eq!(errors.message, Some(FieldError::EmptyMessage));
    assert_eq!(
        form.errors().address.map(|e| e.message()),
        Some("Please enter a valid email address")
    );
    assert_eq!(
        form.errors().message.map(|e| e.message()),
        Some("Message cannot be empty")
    );
    assert_eq!(sender.calls(), 0);
    assert!(!form.is_submitting());
}

#[tokio::test]
async fn successful_send_resets_form() {
    let sender = ScriptedSender::new(Ok(SendOutcome::sent("ok")));
    let mut form = form_with("a@b.com", "hi");
    assert!(form.add_attachments([Attachment::new("report.pdf", 1024)]).is_empty());

    assert!(!form.is_submitting());
    let email = assert_ok!(form.begin_submit());
    assert!(form.is_submitting());

    let result = sender.send(email).await;
    let notice = form.finish_submit(result);

    assert!(!form.is_submitting());
    assert_eq!(notice, Notice::Sent("ok".into()));
    assert!(form.address().is_empty());
    assert!(form.message().is_empty());
    assert!(form.attachments().is_empty());

    let delivered = sender.last().unwrap();
    assert_eq!(delivered.to, "a@b.com");
    assert_eq!(delivered.message, "hi");
    assert_eq!(delivered.attachment_names(), "report.pdf");
}

#[tokio::test]
async fn failed_send_keeps_fields() {
    let sender = ScriptedSender::new(Ok(SendOutcome::failed("bounced")));
    let mut form = form_with("a@b.com", "hi");
    form.add_attachments([Attachment::new("a.txt", 1)]);

    let notice = assert_ok!(form.submit(&sender).await);

    assert_eq!(notice, Notice::Failed("bounced".into()));
    assert_eq!(notice.description(), "bounced");
    assert_eq!(form.address(), "a@b.com");
    assert_eq!(form.message(), "hi");
    assert_eq!(form.attachments().len(), 1);
    assert!(!form.is_submitting());
}

#[tokio::test]
async fn fault_reports_generic_error() {
    let sender = ScriptedSender::new(Err(SendError::Transport("connection reset".into())));
    let mut form = form_with("a@b.com", "hi");

    let notice = assert_ok!(form.submit(&sender).await);

    assert_eq!(notice, Notice::Fault);
    assert_eq!(notice.title(), "Error");
    assert_eq!(notice.description(), "An unexpected error occurred");
    assert_eq!(form.address(), "a@b.com");
    assert!(!form.is_submitting());
}

#[tokio::test]
async fn retry_after_failure_succeeds() {
    let failing = ScriptedSender::new(Ok(SendOutcome::failed("bounced")));
    let working = ScriptedSender::new(Ok(SendOutcome::sent("ok")));
    let mut form = form_with("a@b.com", "hi");

    assert_ok!(form.submit(&failing).await);
    let notice = assert_ok!(form.submit(&working).await);

    assert_eq!(notice, Notice::Sent("ok".into()));
    assert_eq!(working.last().unwrap().to, "a@b.com");
}

#[tokio::test(start_paused = true)]
async fn timed_out_send_releases_form() {
    let sender = Timeout::new(Stalled, Duration::from_secs(30));
    let mut form = form_with("a@b.com", "hi");

    let notice = assert_ok!(form.submit(&sender).await);

    assert_eq!(notice, Notice::Fault);
    assert!(!form.is_submitting());
    assert_eq!(form.message(), "hi");
}

#[tokio::test(start_paused = true)]
async fn simulated_sender_end_to_end() {
    let mut form = form_with("a@b.com", "hello there");

    let notice = assert_ok!(form.submit(&SimulatedSender::default()).await);

    assert!(!notice.is_error());
    assert_eq!(notice.description(), "Email sent successfully! (This is a simulation)");
    assert!(form.address().is_empty());
}
