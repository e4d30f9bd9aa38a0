//! Error types for a3s-cron-expr

use crate::types::TimeField;
use thiserror::Error;

/// Errors that can occur while building, parsing, or describing an expression
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CronError {
    /// Value outside the numeric domain of a field
    #[error("{field} value {value} is out of range ({min}-{max})")]
    OutOfRange {
        field: TimeField,
        value: u64,
        min: u32,
        max: u32,
    },

    /// Range whose lower bound is greater than its upper bound
    #[error("{field} range {min}-{max} is inverted")]
    InvertedRange { field: TimeField, min: u32, max: u32 },

    /// Token that cannot be read as a value, range, list, or step
    #[error("Invalid {field} token '{token}'")]
    InvalidToken { field: TimeField, token: String },

    /// Expression declared with an unsupported number of fields
    #[error("This expression only has {count} parts. An expression must have 5, 6, or 7 parts.")]
    InvalidFieldCount { count: usize },
}

impl CronError {
    /// Whether the error rejects a value against a field's domain
    pub fn is_range_error(&self) -> bool {
        matches!(
            self,
            CronError::OutOfRange { .. } | CronError::InvertedRange { .. }
        )
    }

    /// Whether the error rejects the overall shape of the expression
    pub fn is_format_error(&self) -> bool {
        matches!(self, CronError::InvalidFieldCount { .. })
    }
}

/// Result type alias for cron expression operations
pub type Result<T> = std::result::Result<T, CronError>;
