//! Structured error types for store operations.

use serde::Serialize;
use std::fmt;

/// Error codes for programmatic error handling.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation errors (4xx-like)
    DateFormat,
    InvalidPriority,
    MissingField,

    // Not found errors
    ContributorNotFound,
    TaskNotFound,

    // Conflict errors
    AlreadyExists,

    // Internal errors
    DatabaseError,
    InternalError,
}

impl ErrorCode {
    /// Whether this code describes bad input rather than a server fault.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ErrorCode::DatabaseError | ErrorCode::InternalError)
    }
}

/// Structured error carried through store operations.
#[derive(Debug, Serialize)]
pub struct StoreError {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl StoreError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            field: None,
        }
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    // Convenience constructors

    pub fn date_format(value: &str) -> Self {
        Self::new(
            ErrorCode::DateFormat,
            format!("Dates must be YYYY-MM-DD, got '{}'", value),
        )
    }

    pub fn due_not_after_start(start: &str) -> Self {
        Self::new(
            ErrorCode::DateFormat,
            format!("Due date must be after {}", start),
        )
        .with_field("due")
    }

    pub fn invalid_priority(value: &str) -> Self {
        Self::new(
            ErrorCode::InvalidPriority,
            format!("Priority must be High, Medium, or Low, got '{}'", value),
        )
        .with_field("priority")
    }

    pub fn missing_field(reason: &str) -> Self {
        Self::new(ErrorCode::MissingField, reason)
    }

    pub fn contributor_not_found(name: &str) -> Self {
        Self::new(
            ErrorCode::ContributorNotFound,
            format!("Contributor not found: {}", name),
        )
    }

    pub fn task_not_found(num: &str) -> Self {
        Self::new(ErrorCode::TaskNotFound, format!("Task not found: {}", num))
    }

    pub fn already_exists(name: &str) -> Self {
        Self::new(
            ErrorCode::AlreadyExists,
            format!("Contributor '{}' already exists", name),
        )
    }

    pub fn database(err: impl fmt::Display) -> Self {
        Self::new(ErrorCode::DatabaseError, err.to_string())
    }

    pub fn internal(err: impl fmt::Display) -> Self {
        Self::new(ErrorCode::InternalError, err.to_string())
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for StoreError {}

// Allow using ? with anyhow errors by converting them
impl From<anyhow::Error> for StoreError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<StoreError>() {
            Ok(store_err) => store_err,
            Err(err) => match err.downcast::<rusqlite::Error>() {
                Ok(db_err) => StoreError::database(db_err),
                Err(err) => StoreError::internal(err),
            },
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
