//! Length constraints for strings, arrays and objects.
//!
//! A string's length is its character count, not its byte count. Values with
//! no length (numbers, booleans) always fail and record `value_length: None`;
//! compose with [`type_of`](super::type_of) to report them as type errors.

use serde_json::Value;

use crate::error::{ConstraintError, ErrorKind};
use crate::path::ValuePath;
use crate::result::ConstraintResult;

use super::{present_value, Constraint};

pub(crate) fn length_of(value: &Value) -> Option<usize> {
    match value {
        Value::String(s) => Some(s.chars().count()),
        Value::Array(items) => Some(items.len()),
        Value::Object(map) => Some(map.len()),
        _ => None,
    }
}

/// Passes when the value's length is at most `max_len`.
#[derive(Debug, Clone, Copy)]
pub struct MaxLength {
    max_len: usize,
}

impl MaxLength {
    pub const KIND: ErrorKind = ErrorKind::MaxLength;

    pub fn new(max_len: usize) -> Self {
        Self { max_len }
    }
}

impl Constraint for MaxLength {
    fn check(&self, value: Option<&Value>, path: &ValuePath) -> ConstraintResult {
        let Some(value) = present_value(value) else {
            return ConstraintResult::ok();
        };
        let value_length = length_of(value);
        match value_length {
            Some(len) if len <= self.max_len => ConstraintResult::ok(),
            _ => ConstraintResult::error_at(
                path.clone(),
                ConstraintError::MaxLength {
                    max_len: self.max_len,
                    value: value.clone(),
                    value_length,
                },
            ),
        }
    }
}

/// Passes when the value's length is at least `min_len`.
#[derive(Debug, Clone, Copy)]
pub struct MinLength {
    min_len: usize,
}

impl MinLength {
    pub const KIND: ErrorKind = ErrorKind::MinLength;

    pub fn new(min_len: usize) -> Self {
        Self { min_len }
    }
}

impl Constraint for MinLength {
    fn check(&self, value: Option<&Value>, path: &ValuePath) -> ConstraintResult {
        let Some(value) = present_value(value) else {
            return ConstraintResult::ok();
        };
        let value_length = length_of(value);
        match value_length {
            Some(len) if len >= self.min_len => ConstraintResult::ok(),
            _ => ConstraintResult::error_at(
                path.clone(),
                ConstraintError::MinLength {
                    min_len: self.min_len,
                    value: value.clone(),
                    value_length,
                },
            ),
        }
    }
}

/// Passes when the value's length is exactly `len`.
#[derive(Debug, Clone, Copy)]
pub struct ExactLength {
    len: usize,
}

impl ExactLength {
    pub const KIND: ErrorKind = ErrorKind::ExactLength;

    pub fn new(len: usize) -> Self {
        Self { len }
    }
}

impl Constraint for ExactLength {
    fn check(&self, value: Option<&Value>, path: &ValuePath) -> ConstraintResult {
        let Some(value) = present_value(value) else {
            return ConstraintResult::ok();
        };
        let value_length = length_of(value);
        if value_length == Some(self.len) {
            return ConstraintResult::ok();
        }
        ConstraintResult::error_at(
            path.clone(),
            ConstraintError::ExactLength {
                len: self.len,
                value: value.clone(),
                value_length,
            },
        )
    }
}

/// Requires a length of at most `max_len`.
pub fn max_length(max_len: usize) -> MaxLength {
    MaxLength::new(max_len)
}

/// Requires a length of at least `min_len`.
///
/// ```rust
/// use assay::{min_length, Constraint};
/// use serde_json::json;
///
/// assert!(min_length(1).validate(&json!("x")).is_ok());
/// assert!(min_length(1).validate(&json!("")).is_err());
/// assert!(min_length(1).validate(&json!([])).is_err());
/// ```
pub fn min_length(min_len: usize) -> MinLength {
    MinLength::new(min_len)
}

/// Requires a length of exactly `len`.
pub fn exact_length(len: usize) -> ExactLength {
    ExactLength::new(len)
}
