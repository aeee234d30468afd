//! The presence gate.
//!
//! Every other constraint treats a null or absent value as passing, so
//! presence is only enforced where a [`Required`] wrapper is placed.

use serde_json::Value;

use crate::error::{ConstraintError, ErrorKind};
use crate::path::ValuePath;
use crate::result::ConstraintResult;

use super::{BoxedConstraint, Constraint};

/// Fails on null or absent values; otherwise runs the optional child.
pub struct Required {
    child: Option<BoxedConstraint>,
}

impl Required {
    pub const KIND: ErrorKind = ErrorKind::Required;

    /// A presence check with nothing further to verify.
    pub fn new() -> Self {
        Self { child: None }
    }

    /// A presence check that delegates present values to `child`.
    pub fn with<C: Constraint + 'static>(child: C) -> Self {
        Self {
            child: Some(child.boxed()),
        }
    }
}

impl Default for Required {
    fn default() -> Self {
        Self::new()
    }
}

impl Constraint for Required {
    fn check(&self, value: Option<&Value>, path: &ValuePath) -> ConstraintResult {
        match value {
            None | Some(Value::Null) => {
                ConstraintResult::error_at(path.clone(), ConstraintError::Required)
            }
            Some(value) => match &self.child {
                Some(child) => child.check(Some(value), path),
                None => ConstraintResult::ok(),
            },
        }
    }
}

/// Requires the value to be present and to satisfy `child`.
///
/// ```rust
/// use assay::{all, min_length, required, type_of, Constraint, ValueType};
/// use serde_json::{json, Value};
///
/// let title = required(all![type_of(ValueType::String), min_length(1)]);
///
/// assert!(title.validate(&json!("Bowling inc.")).is_ok());
/// assert!(title.validate(&Value::Null).is_err());
/// assert!(title.validate(&json!("")).is_err());
/// ```
pub fn required<C: Constraint + 'static>(child: C) -> Required {
    Required::with(child)
}

/// Requires the value to be present, with no further checks.
pub fn present() -> Required {
    Required::new()
}
