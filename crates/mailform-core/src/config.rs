//! Composer configuration.
//!
//! Every field has a default, so an empty or partial JSON document is valid.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::attachment::AttachmentLimits;
use crate::service::{SimulatedSender, Timeout};

/// Settings for the send operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SenderConfig {
    /// Simulated latency in milliseconds.
    pub latency_ms: u64,
    /// Deadline for a send in milliseconds. `None` waits indefinitely.
    pub timeout_ms: Option<u64>,
}

impl Default for SenderConfig {
    fn default() -> Self {
        Self {
            latency_ms: 1500,
            timeout_ms: None,
        }
    }
}

impl SenderConfig {
    /// Simulated latency.
    #[must_use]
    pub const fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    /// Send deadline, if any.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    /// Builds the sender these settings describe.
    #[must_use]
    pub fn build(&self) -> Timeout<SimulatedSender> {
        Timeout::optional(SimulatedSender::new(self.latency()), self.timeout())
    }
}

/// Top-level composer configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposeConfig {
    /// Attachment limits.
    pub limits: AttachmentLimits,
    /// Send operation settings.
    pub sender: SenderConfig,
}

impl ComposeConfig {
    /// Parses a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the limits are unusable.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    /// Loads a configuration file, falling back to defaults if it is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn load(path: impl AsRef<Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        if !tokio::fs::try_exists(path).await? {
            debug!(?path, "No config file, using defaults");
            return Ok(Self::default());
        }

        let contents = tokio::fs::read_to_string(path).await?;
        debug!(?path, "Loaded config");
        Self::from_json(&contents)
    }

    fn check(&self) -> crate::Result<()> {
        if self.limits.max_attachments == 0 {
            return Err(crate::Error::Config(
                "max_attachments must be at least 1".into(),
            ));
        }
        if self.sender.timeout_ms == Some(0) {
            return Err(crate::Error::Config("timeout_ms must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::attachment::{MAX_ATTACHMENTS, MAX_FILE_SIZE};

    #[test]
    fn test_empty_json_is_default() {
        let config = ComposeConfig::from_json("{}").unwrap();
        assert_eq!(config, ComposeConfig::default());
        assert_eq!(config.limits.max_attachments, MAX_ATTACHMENTS);
        assert_eq!(config.limits.max_file_size, MAX_FILE_SIZE);
        assert_eq!(config.sender.latency(), Duration::from_millis(1500));
        assert_eq!(config.sender.timeout(), None);
    }

    #[test]
    fn test_partial_override() {
        let config =
            ComposeConfig::from_json(r#"{"limits": {"max_attachments": 5}, "sender": {"timeout_ms": 3000}}"#)
                .unwrap();
        assert_eq!(config.limits.max_attachments, 5);
        assert_eq!(config.limits.max_file_size, MAX_FILE_SIZE);
        assert_eq!(config.sender.latency_ms, 1500);
        assert_eq!(config.sender.timeout(), Some(Duration::from_secs(3)));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            ComposeConfig::from_json(r#"{"limits": {"max_attachments": 0}}"#),
            Err(crate::Error::Config(_))
        ));
        assert!(matches!(
            ComposeConfig::from_json(r#"{"sender": {"timeout_ms": 0}}"#),
            Err(crate::Error::Config(_))
        ));
        assert!(matches!(
            ComposeConfig::from_json("not json"),
            Err(crate::Error::Serde(_))
        ));
    }

    #[tokio::test]
    async fn test_load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = ComposeConfig::load(dir.path().join("config.json")).await.unwrap();
        assert_eq!(config, ComposeConfig::default());
    }

    #[tokio::test]
    async fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        tokio::fs::write(&path, r#"{"sender": {"latency_ms": 10}}"#)
            .await
            .unwrap();

        let config = ComposeConfig::load(&path).await.unwrap();
        assert_eq!(config.sender.latency(), Duration::from_millis(10));
        assert_eq!(config.sender.build().inner().latency(), Duration::from_millis(10));
    }
}
