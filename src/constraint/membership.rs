//! Equality-based constraints: membership in a set of options and equality
//! with a single expected value.

use serde_json::Value;

use crate::error::{ConstraintError, ErrorKind};
use crate::path::ValuePath;
use crate::result::ConstraintResult;

use super::ordering::same_value;
use super::{present_value, Constraint};

/// Passes when the value equals one of the listed options.
#[derive(Debug, Clone)]
pub struct OneOf {
    options: Vec<Value>,
}

impl OneOf {
    pub const KIND: ErrorKind = ErrorKind::OneOf;

    /// Builds the option list from anything convertible to JSON values.
    pub fn new<I, V>(options: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    /// The accepted options in declaration order.
    pub fn options(&self) -> &[Value] {
        &self.options
    }

    /// Whether `value` equals one of the options. Numbers compare by value.
    pub fn contains(&self, value: &Value) -> bool {
        self.options.iter().any(|option| same_value(option, value))
    }
}

impl Constraint for OneOf {
    fn check(&self, value: Option<&Value>, path: &ValuePath) -> ConstraintResult {
        match present_value(value) {
            Some(value) if !self.contains(value) => ConstraintResult::error_at(
                path.clone(),
                ConstraintError::OneOf {
                    options: self.options.clone(),
                    value: value.clone(),
                },
            ),
            _ => ConstraintResult::ok(),
        }
    }
}

/// Passes when the value equals `expected`.
#[derive(Debug, Clone)]
pub struct Equals {
    expected: Value,
}

impl Equals {
    pub const KIND: ErrorKind = ErrorKind::Equals;

    /// Compares against `expected`.
    pub fn new(expected: impl Into<Value>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl Constraint for Equals {
    fn check(&self, value: Option<&Value>, path: &ValuePath) -> ConstraintResult {
        match present_value(value) {
            Some(value) if !same_value(value, &self.expected) => ConstraintResult::error_at(
                path.clone(),
                ConstraintError::Equals {
                    expected: self.expected.clone(),
                    value: value.clone(),
                },
            ),
            _ => ConstraintResult::ok(),
        }
    }
}

/// Requires the value to be one of `options`.
///
/// ```rust
/// use assay::{one_of, Constraint};
/// use serde_json::json;
///
/// let status = one_of(["draft", "published"]);
/// assert!(status.validate(&json!("draft")).is_ok());
/// assert!(status.validate(&json!("archived")).is_err());
/// ```
pub fn one_of<I, V>(options: I) -> OneOf
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    OneOf::new(options)
}

/// Requires the value to equal `expected`.
pub fn equals(expected: impl Into<Value>) -> Equals {
    Equals::new(expected)
}
