//! Attachment model and the add/remove policy for the compose form.
//!
//! The set is immutable from the outside: adding candidates or removing an
//! entry produces a new set, so the form can decide when to commit it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default maximum number of attachments per message.
pub const MAX_ATTACHMENTS: usize = 3;

/// Default maximum size of a single attachment (5 MiB).
pub const MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

/// A user-selected file. Opaque to the form: never read, only passed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// File name shown to the user.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// Location of the selected file, if it came from disk.
    pub path: Option<PathBuf>,
}

impl Attachment {
    /// Creates an attachment that is not backed by a path.
    #[must_use]
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            path: None,
        }
    }

    /// Builds an attachment from a file on disk using its metadata size.
    ///
    /// # Errors
    ///
    /// Returns an error if the path has no file name or its metadata cannot
    /// be read.
    pub async fn from_path(path: impl AsRef<Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| crate::Error::Config(format!("Not a file: {}", path.display())))?;
        let size = tokio::fs::metadata(path).await?.len();

        Ok(Self {
            name,
            size,
            path: Some(path.to_path_buf()),
        })
    }

    /// Size formatted for display, e.g. `"1.5 KB"`.
    #[must_use]
    pub fn display_size(&self) -> String {
        format_size(self.size)
    }
}

/// Count and size limits applied when attachments are added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttachmentLimits {
    /// Maximum number of attachments in the set.
    pub max_attachments: usize,
    /// Maximum size of one attachment in bytes.
    pub max_file_size: u64,
}

impl Default for AttachmentLimits {
    fn default() -> Self {
        Self {
            max_attachments: MAX_ATTACHMENTS,
            max_file_size: MAX_FILE_SIZE,
        }
    }
}

/// Why a candidate attachment (or a whole batch) was not added.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    /// The batch would push the set over the count limit.
    #[error("You can only attach up to {limit} files")]
    TooManyAttachments {
        /// The configured count limit.
        limit: usize,
    },

    /// A single file is over the size limit.
    #[error("{name} exceeds the {} limit", compact_size(*.limit))]
    FileTooLarge {
        /// Name of the rejected file.
        name: String,
        /// The configured size limit in bytes.
        limit: u64,
    },
}

impl Rejection {
    /// Short headline for a notification.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::TooManyAttachments { .. } => "Too many attachments",
            Self::FileTooLarge { .. } => "File too large",
        }
    }
}

/// Ordered list of attachments. Duplicate names are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttachmentSet {
    items: Vec<Attachment>,
}

impl AttachmentSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Number of attachments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there are no attachments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the attachment at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Attachment> {
        self.items.get(index)
    }

    /// Iterates in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Attachment> {
        self.items.iter()
    }

    /// Returns the attachments as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Attachment] {
        &self.items
    }

    /// Returns true once the count limit is reached.
    #[must_use]
    pub fn is_full(&self, limits: &AttachmentLimits) -> bool {
        self.items.len() >= limits.max_attachments
    }

    /// Returns a set extended with the acceptable candidates.
    ///
    /// If the batch would exceed the count limit it is rejected as a whole
    /// and the set is returned unchanged. Otherwise every oversized
    /// candidate is dropped with its own rejection and the rest are appended
    /// in order.
    #[must_use]
    pub fn with_candidates(
        &self,
        incoming: impl IntoIterator<Item = Attachment>,
        limits: &AttachmentLimits,
    ) -> (Self, Vec<Rejection>) {
        let incoming: Vec<Attachment> = incoming.into_iter().collect();

        if self.items.len() + incoming.len() > limits.max_attachments {
            debug!(
                current = self.items.len(),
                incoming = incoming.len(),
                "Attachment batch over the count limit"
            );
            return (
                self.clone(),
                vec![Rejection::TooManyAttachments {
                    limit: limits.max_attachments,
                }],
            );
        }

        let mut items = self.items.clone();
        let mut rejections = Vec::new();

        for candidate in incoming {
            if candidate.size > limits.max_file_size {
                debug!(name = %candidate.name, size = candidate.size, "Attachment too large");
                rejections.push(Rejection::FileTooLarge {
                    name: candidate.name,
                    limit: limits.max_file_size,
                });
            } else {
                items.push(candidate);
            }
        }

        (Self { items }, rejections)
    }

    /// Returns a set without the attachment at `index`.
    ///
    /// An out-of-range index leaves the set unchanged.
    #[must_use]
    pub fn without(&self, index: usize) -> Self {
        let items = self
            .items
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, a)| a.clone())
            .collect();
        Self { items }
    }
}

impl<'a> IntoIterator for &'a AttachmentSet {
    type Item = &'a Attachment;
    type IntoIter = std::slice::Iter<'a, Attachment>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl FromIterator<Attachment> for AttachmentSet {
    fn from_iter<T: IntoIterator<Item = Attachment>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

/// Human-readable size with binary units, e.g. `"0 Bytes"`, `"1.5 KB"`, `"5 MB"`.
///
/// Values keep at most two decimals and drop trailing zeros.
#[must_use]
#[allow(clippy::cast_precision_loss)] // Display only
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut divisor = 1u64;
    while unit < UNITS.len() - 1 && bytes >= divisor * 1024 {
        divisor *= 1024;
        unit += 1;
    }

    let value = format!("{:.2}", bytes as f64 / divisor as f64);
    let value = value.trim_end_matches('0').trim_end_matches('.');
    format!("{value} {}", UNITS[unit])
}

/// Size without the separating space, as used in limit hints ("5MB").
fn compact_size(bytes: u64) -> String {
    format_size(bytes).replace(' ', "")
}

/// Hint text describing the size limit, e.g. `"Max file size: 5MB"`.
#[must_use]
pub fn size_limit_hint(limits: &AttachmentLimits) -> String {
    format!("Max file size: {}", compact_size(limits.max_file_size))
}
