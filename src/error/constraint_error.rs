//! The closed family of constraint failures.

use std::fmt::{self, Display};

use serde_json::Value;

use crate::value_type::ValueType;

/// Machine-readable discriminator for a [`ConstraintError`].
///
/// Each constraint type exposes its kind as an associated constant, so a
/// caller can match on errors without a separate lookup table:
///
/// ```rust
/// use assay::{greater_than, Constraint, ErrorKind, GreaterThan};
/// use serde_json::json;
///
/// let result = greater_than(5).validate(&json!(3));
/// assert_eq!(result.with_kind(GreaterThan::KIND).len(), 1);
/// assert_eq!(GreaterThan::KIND, ErrorKind::GreaterThan);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    OneOf,
    GreaterThan,
    GreaterOrEqual,
    LessThan,
    LessOrEqual,
    Equals,
    MaxLength,
    MinLength,
    ExactLength,
    Pattern,
    UnknownKey,
    Required,
    TypeMismatch,
}

impl ErrorKind {
    /// Returns the stable snake_case code for this kind.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::OneOf => "one_of",
            ErrorKind::GreaterThan => "greater_than",
            ErrorKind::GreaterOrEqual => "greater_or_equal",
            ErrorKind::LessThan => "less_than",
            ErrorKind::LessOrEqual => "less_or_equal",
            ErrorKind::Equals => "equals",
            ErrorKind::MaxLength => "max_length",
            ErrorKind::MinLength => "min_length",
            ErrorKind::ExactLength => "exact_length",
            ErrorKind::Pattern => "pattern",
            ErrorKind::UnknownKey => "unknown_key",
            ErrorKind::Required => "required",
            ErrorKind::TypeMismatch => "type_mismatch",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A single constraint violation.
///
/// Errors are plain data: the `Display` output is the human-readable message
/// and the fields hold the parameters of the failed check. The location of the
/// failure lives in the enclosing [`PathResult`](crate::PathResult), not here.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConstraintError {
    #[error("value ({value}) is not among expected options")]
    OneOf { options: Vec<Value>, value: Value },

    #[error("expected value ({value}) to be strictly greater than min ({min})")]
    GreaterThan { min: Value, value: Value },

    #[error("expected value ({value}) to be greater than or equal to min ({min})")]
    GreaterOrEqual { min: Value, value: Value },

    #[error("expected value ({value}) to be strictly less than max ({max})")]
    LessThan { max: Value, value: Value },

    #[error("expected value ({value}) to be less than or equal to max ({max})")]
    LessOrEqual { max: Value, value: Value },

    #[error("value ({value}) must be equal to expected ({expected})")]
    Equals { expected: Value, value: Value },

    /// `value_length` is `None` when the value has no length at all.
    #[error("expected value ({value}) to have maximum length of {max_len}")]
    MaxLength {
        max_len: usize,
        value: Value,
        value_length: Option<usize>,
    },

    #[error("expected value ({value}) to have minimum length of {min_len}")]
    MinLength {
        min_len: usize,
        value: Value,
        value_length: Option<usize>,
    },

    #[error("expected value ({value}) to have length of exactly {len}")]
    ExactLength {
        len: usize,
        value: Value,
        value_length: Option<usize>,
    },

    #[error("value ({value}) does not match pattern {pattern}")]
    Pattern { pattern: String, value: Value },

    #[error("unknown key '{key}'")]
    UnknownKey { key: String },

    #[error("value is required")]
    Required,

    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        expected: ValueType,
        actual: ValueType,
    },
}

impl ConstraintError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConstraintError::OneOf { .. } => ErrorKind::OneOf,
            ConstraintError::GreaterThan { .. } => ErrorKind::GreaterThan,
            ConstraintError::GreaterOrEqual { .. } => ErrorKind::GreaterOrEqual,
            ConstraintError::LessThan { .. } => ErrorKind::LessThan,
            ConstraintError::LessOrEqual { .. } => ErrorKind::LessOrEqual,
            ConstraintError::Equals { .. } => ErrorKind::Equals,
            ConstraintError::MaxLength { .. } => ErrorKind::MaxLength,
            ConstraintError::MinLength { .. } => ErrorKind::MinLength,
            ConstraintError::ExactLength { .. } => ErrorKind::ExactLength,
            ConstraintError::Pattern { .. } => ErrorKind::Pattern,
            ConstraintError::UnknownKey { .. } => ErrorKind::UnknownKey,
            ConstraintError::Required => ErrorKind::Required,
            ConstraintError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
        }
    }

    /// Returns the human-readable message.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

// Reports are shared across threads by batch validation.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ConstraintError>();
    assert_sync::<ConstraintError>();
};
