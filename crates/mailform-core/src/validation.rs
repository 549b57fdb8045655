//! Recipient and message validation.

/// Validation error for a single compose field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Recipient address is empty.
    EmptyAddress,
    /// Recipient address format is invalid.
    InvalidAddress,
    /// Message body is empty.
    EmptyMessage,
}

impl FieldError {
    /// Get human-readable error message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::EmptyAddress => "Email is required",
            Self::InvalidAddress => "Please enter a valid email address",
            Self::EmptyMessage => "Message cannot be empty",
        }
    }

    /// Get the field name this error relates to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::EmptyAddress | Self::InvalidAddress => "email",
            Self::EmptyMessage => "message",
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for FieldError {}

/// Per-field error slots, recomputed on every validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldErrors {
    /// Error for the recipient field.
    pub address: Option<FieldError>,
    /// Error for the message field.
    pub message: Option<FieldError>,
}

impl FieldErrors {
    /// Returns true if neither field has an error.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.address.is_none() && self.message.is_none()
    }

    /// Iterates over the populated slots, recipient first.
    pub fn iter(&self) -> impl Iterator<Item = FieldError> + '_ {
        self.address.into_iter().chain(self.message)
    }
}

/// Validate both fields. Both slots are always evaluated.
#[must_use]
pub fn validate_fields(address: &str, message: &str) -> FieldErrors {
    FieldErrors {
        address: validate_address(address),
        message: validate_message(message),
    }
}

/// Compute the recipient field's error, if any.
#[must_use]
pub fn validate_address(address: &str) -> Option<FieldError> {
    if is_blank(address) {
        Some(FieldError::EmptyAddress)
    } else if !is_valid_address(address) {
        Some(FieldError::InvalidAddress)
    } else {
        None
    }
}

/// Compute the message field's error, if any.
#[must_use]
pub fn validate_message(message: &str) -> Option<FieldError> {
    if is_blank(message) {
        Some(FieldError::EmptyMessage)
    } else {
        None
    }
}

/// Check that `address` has the shape `local@domain.tld`.
///
/// Neither side of the `@` may contain whitespace or another `@`, and the
/// domain needs a `.` with at least one character on each side of it. The
/// input is not trimmed, so leading or trailing whitespace fails the check.
#[must_use]
pub fn is_valid_address(address: &str) -> bool {
    let Some((local, domain)) = address.split_once('@') else {
        return false;
    };

    if !is_segment(local) || !is_segment(domain) {
        return false;
    }

    // Any interior dot will do: "b.c." still splits as "b" + "." + "c."
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Non-empty run of characters that are neither whitespace nor `@`.
fn is_segment(s: &str) -> bool {
    !s.is_empty() && !s.chars().any(|c| c == '@' || is_space(c))
}

/// True when `s` holds nothing but whitespace.
fn is_blank(s: &str) -> bool {
    s.trim_matches(is_space).is_empty()
}

/// Whitespace as browsers see it in `\s` and `String.prototype.trim`.
///
/// This differs from [`char::is_whitespace`]: U+FEFF (byte order mark)
/// counts, U+0085 (next line) does not.
const fn is_space(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'..='\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_valid_address() {
        assert!(is_valid_address("a@b.c"));
        assert!(is_valid_address("user@example.com"));
        assert!(is_valid_address("user.name+tag@sub.example.co.uk"));
        assert!(is_valid_address("user@b.c."));
    }

    #[test]
    fn test_invalid_address() {
        assert!(!is_valid_address(""));
        assert!(!is_valid_address("x"));
        assert!(!is_valid_address("@example.com"));
        assert!(!is_valid_address("user@"));
        assert!(!is_valid_address("user@example"));
        assert!(!is_valid_address("user@@example.com"));
        assert!(!is_valid_address("user@.com"));
        assert!(!is_valid_address("user@example."));
        assert!(!is_valid_address("us er@example.com"));
        assert!(!is_valid_address(" user@example.com"));
        assert!(!is_valid_address("user@example.com\n"));
    }

    #[test]
    fn test_address_errors() {
        assert_eq!(validate_address(""), Some(FieldError::EmptyAddress));
        assert_eq!(validate_address("   "), Some(FieldError::EmptyAddress));
        assert_eq!(validate_address("x"), Some(FieldError::InvalidAddress));
        assert_eq!(validate_address("a@b.com"), None);
    }

    #[test]
    fn test_message_errors() {
        assert_eq!(validate_message(""), Some(FieldError::EmptyMessage));
        assert_eq!(validate_message(" \n\t"), Some(FieldError::EmptyMessage));
        assert_eq!(validate_message("hi"), None);
    }

    #[test]
    fn test_byte_order_mark_is_whitespace() {
        assert!(!is_valid_address("a\u{FEFF}b@c.d"));
        assert!(!is_valid_address("a@b\u{FEFF}.com"));
        assert_eq!(validate_address("\u{FEFF}"), Some(FieldError::EmptyAddress));
        assert_eq!(
            validate_address(" \u{FEFF}\u{3000}"),
            Some(FieldError::EmptyAddress)
        );
        assert_eq!(
            validate_message("\u{FEFF}\u{00A0}\n"),
            Some(FieldError::EmptyMessage)
        );
    }

    #[test]
    fn test_next_line_is_not_whitespace() {
        assert!(is_valid_address("a\u{85}b@c.d"));
        assert_eq!(validate_address("\u{85}"), Some(FieldError::InvalidAddress));
        assert_eq!(validate_message("\u{85}"), None);
    }

    #[test]
    fn test_validate_fields_evaluates_both() {
        let errors = validate_fields("x", "");
        assert_eq!(errors.address, Some(FieldError::InvalidAddress));
        assert_eq!(errors.message, Some(FieldError::EmptyMessage));
        assert_eq!(errors.iter().count(), 2);

        assert!(validate_fields("a@b.com", "hi").is_empty());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(FieldError::EmptyAddress.to_string(), "Email is required");
        assert_eq!(
            FieldError::InvalidAddress.to_string(),
            "Please enter a valid email address"
        );
        assert_eq!(FieldError::EmptyMessage.to_string(), "Message cannot be empty");
        assert_eq!(FieldError::InvalidAddress.field(), "email");
        assert_eq!(FieldError::EmptyMessage.field(), "message");
    }

    proptest! {
        #[test]
        fn rejects_without_at(s in "[^@]*") {
            prop_assert!(!is_valid_address(&s));
        }

        #[test]
        fn rejects_inner_whitespace(
            local in "[a-z]{1,8}",
            ws in "[ \t\n]",
            domain in "[a-z]{1,8}\\.[a-z]{2,4}",
        ) {
            let candidate = format!("{local}{ws}x@{domain}");
            prop_assert!(!is_valid_address(&candidate));
        }

        #[test]
        fn rejects_domain_without_dot(local in "[a-z0-9]{1,8}", domain in "[a-z0-9]{1,12}") {
            let candidate = format!("{local}@{domain}");
            prop_assert!(!is_valid_address(&candidate));
        }

        #[test]
        fn accepts_plain_addresses(
            local in "[a-z0-9._+-]{1,12}",
            host in "[a-z0-9-]{1,12}",
            tld in "[a-z]{2,6}",
        ) {
            let candidate = format!("{local}@{host}.{tld}");
            prop_assert!(is_valid_address(&candidate));
        }
    }
}
