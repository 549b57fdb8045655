//! Notification banners shown above the form.

use mailform_core::{Notice, Rejection};

/// A dismissible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    /// Headline.
    pub title: String,
    /// Body text.
    pub description: String,
    /// Rendered in the destructive style.
    pub is_error: bool,
}

impl From<&Notice> for Banner {
    fn from(notice: &Notice) -> Self {
        Self {
            title: notice.title().to_string(),
            description: notice.description().to_string(),
            is_error: notice.is_error(),
        }
    }
}

impl From<&Rejection> for Banner {
    fn from(rejection: &Rejection) -> Self {
        Self {
            title: rejection.title().to_string(),
            description: rejection.to_string(),
            is_error: true,
        }
    }
}
