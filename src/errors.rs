use std::borrow::Cow;

use thiserror::Error;

/// Top-level error type returned by plateful operations.
///
/// Every failure is reported as a value; the presentation layer decides how
/// to surface the message. Corrupt persisted snapshots never appear here:
/// the repository recovers them locally by falling back to the seed dataset.
#[derive(Debug, Error)]
pub enum AppError {
    /// Entity or invite-code lookup missed.
    #[error("not found: {what}")]
    NotFound { what: Cow<'static, str> },

    /// Registration attempted with an email that already has an account.
    #[error("email already registered: {email}")]
    DuplicateEmail { email: String },

    /// The operation targets the acting user itself (own invite code, self-follow).
    #[error("operation targets the acting user itself")]
    SelfReference,

    /// Invite-code link requested between users who are already friends.
    #[error("users are already friends")]
    AlreadyFriends,

    /// Malformed or disallowed input (e.g. writing the legacy `public` visibility).
    #[error("invalid operation: {message}")]
    InvalidOperation { message: Cow<'static, str> },

    /// Validation failed for one or more fields.
    #[error("validation failed")]
    Validation(#[from] ValidationError),

    /// Underlying key-value store failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl AppError {
    pub fn not_found(what: impl Into<Cow<'static, str>>) -> Self {
        Self::NotFound { what: what.into() }
    }

    pub fn invalid(message: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidOperation {
            message: message.into(),
        }
    }
}

/// Error raised by [`crate::store::Store`] implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing medium failed.
    #[error("store i/o failed: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding a blob for storage failed.
    #[error("store encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Collection of validation issues encountered while checking form input.
#[derive(Debug, Error)]
#[error("validation errors: {issues:?}")]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationError {
    pub fn new<I>(issues: I) -> Self
    where
        I: IntoIterator<Item = ValidationIssue>,
    {
        Self {
            issues: issues.into_iter().collect(),
        }
    }

    /// Convenience helper for constructing a single-field validation error.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new([ValidationIssue::new(field, message)])
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Validation failure for a single field.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Alias used by validation helpers.
pub type ValidationResult<T> = Result<T, ValidationError>;
