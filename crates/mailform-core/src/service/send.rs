//! Send operation boundary.
//!
//! The form hands an owned [`OutgoingEmail`] to a [`Sender`] and waits for a
//! two-field [`SendOutcome`]. Ordinary delivery failures are reported as an
//! outcome with `success == false`; [`SendError`] is reserved for faults the
//! sender did not expect.

use std::future::Future;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::attachment::AttachmentSet;

/// Errors that a sender raises instead of returning an outcome.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SendError {
    /// The underlying transport failed unexpectedly.
    #[error("Transport failed: {0}")]
    Transport(String),

    /// The send did not resolve in time.
    #[error("Send timed out after {0:?}")]
    TimedOut(Duration),
}

/// Snapshot of the form content handed to a sender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    /// Recipient address.
    pub to: String,
    /// Message body.
    pub message: String,
    /// Attachments in the order they were added.
    pub attachments: AttachmentSet,
}

impl OutgoingEmail {
    /// Creates a new outgoing email.
    #[must_use]
    pub fn new(
        to: impl Into<String>,
        message: impl Into<String>,
        attachments: AttachmentSet,
    ) -> Self {
        Self {
            to: to.into(),
            message: message.into(),
            attachments,
        }
    }

    /// Attachment names, comma separated.
    #[must_use]
    pub fn attachment_names(&self) -> String {
        self.attachments
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Result reported by a sender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendOutcome {
    /// Whether the message was delivered.
    pub success: bool,
    /// Human-readable description for the user.
    pub message: String,
}

impl SendOutcome {
    /// A successful delivery.
    #[must_use]
    pub fn sent(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// An explicit delivery failure.
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Something that can deliver an [`OutgoingEmail`].
///
/// Implementations must not return `Err` for ordinary delivery failures;
/// those are a [`SendOutcome`] with `success == false`.
pub trait Sender: Send + Sync {
    /// Delivers the email.
    fn send(
        &self,
        email: OutgoingEmail,
    ) -> impl Future<Output = Result<SendOutcome, SendError>> + Send;
}

/// Default latency of the simulated sender.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1500);

/// Message reported by the simulated sender.
pub const SIMULATED_CONFIRMATION: &str = "Email sent successfully! (This is a simulation)";

/// Sender that waits a fixed latency and always reports success.
///
/// Nothing is delivered.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedSender {
    latency: Duration,
}

impl Default for SimulatedSender {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY)
    }
}

impl SimulatedSender {
    /// Creates a simulated sender with the given latency.
    #[must_use]
    pub const fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// Returns the configured latency.
    #[must_use]
    pub const fn latency(&self) -> Duration {
        self.latency
    }
}

impl Sender for SimulatedSender {
    async fn send(&self, email: OutgoingEmail) -> Result<SendOutcome, SendError> {
        info!(to = %email.to, "Sending email (simulated)");
        debug!(bytes = email.message.len(), "Message body");
        if !email.attachments.is_empty() {
            debug!(attachments = %email.attachment_names(), "Attachments");
        }

        tokio::time::sleep(self.latency).await;

        Ok(SendOutcome::sent(SIMULATED_CONFIRMATION))
    }
}

/// Wraps a sender with an optional deadline.
///
/// A send that outlives the deadline resolves to [`SendError::TimedOut`].
/// Without a deadline the inner sender is awaited for as long as it takes.
#[derive(Debug, Clone)]
pub struct Timeout<S> {
    inner: S,
    limit: Option<Duration>,
}

impl<S: Sender> Timeout<S> {
    /// Wraps `inner` with a deadline.
    #[must_use]
    pub const fn new(inner: S, limit: Duration) -> Self {
        Self {
            inner,
            limit: Some(limit),
        }
    }

    /// Wraps `inner` with a deadline only if one is given.
    #[must_use]
    pub const fn optional(inner: S, limit: Option<Duration>) -> Self {
        Self { inner, limit }
    }

    /// Returns the wrapped sender.
    #[must_use]
    pub const fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: Sender> Sender for Timeout<S> {
    async fn send(&self, email: OutgoingEmail) -> Result<SendOutcome, SendError> {
        let Some(limit) = self.limit else {
            return self.inner.send(email).await;
        };

        match tokio::time::timeout(limit, self.inner.send(email)).await {
            Ok(result) => result,
            Err(_) => {
                warn!(?limit, "Send timed out");
                Err(SendError::TimedOut(limit))
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::attachment::Attachment;

    /// Sender that never resolves.
    struct Stalled;

    impl Sender for Stalled {
        async fn send(&self, _email: OutgoingEmail) -> Result<SendOutcome, SendError> {
            std::future::pending().await
        }
    }

    fn email() -> OutgoingEmail {
        OutgoingEmail::new("a@b.com", "hi", AttachmentSet::new())
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_sender_waits_and_succeeds() {
        let sender = SimulatedSender::default();
        let start = tokio::time::Instant::now();

        let outcome = sender.send(email()).await.unwrap();

        assert!(outcome.success);
        assert_eq!(outcome.message, SIMULATED_CONFIRMATION);
        assert!(start.elapsed() >= DEFAULT_LATENCY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_fires() {
        let sender = Timeout::new(Stalled, Duration::from_secs(10));
        let result = sender.send(email()).await;
        assert_eq!(result, Err(SendError::TimedOut(Duration::from_secs(10))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_passes_through_fast_sender() {
        let sender = Timeout::new(SimulatedSender::default(), Duration::from_secs(10));
        let outcome = sender.send(email()).await.unwrap();
        assert!(outcome.success);
        assert_eq!(sender.inner().latency(), DEFAULT_LATENCY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_limit_awaits_inner() {
        let sender = Timeout::optional(SimulatedSender::new(Duration::from_secs(600)), None);
        assert!(sender.send(email()).await.unwrap().success);
    }

    #[test]
    fn test_attachment_names() {
        let attachments = [Attachment::new("a.txt", 1), Attachment::new("b.png", 2)]
            .into_iter()
            .collect();
        let email = OutgoingEmail::new("a@b.com", "hi", attachments);
        assert_eq!(email.attachment_names(), "a.txt, b.png");
    }

    #[test]
    fn test_outcome_constructors() {
        assert!(SendOutcome::sent("ok").success);
        let failed = SendOutcome::failed("bounced");
        assert!(!failed.success);
        assert_eq!(failed.message, "bounced");
    }
}
