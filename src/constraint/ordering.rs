//! Ordering constraints: `>`, `>=`, `<`, `<=` against a fixed bound.
//!
//! Two numbers compare numerically and two strings compare lexicographically.
//! Any other pairing has no order, so the check fails.

use std::cmp::Ordering;

use serde_json::{Number, Value};

use crate::error::{ConstraintError, ErrorKind};
use crate::path::ValuePath;
use crate::result::ConstraintResult;

use super::{present_value, Constraint};

/// Orders two values, or returns `None` when they are not comparable.
///
/// Integers compare exactly across the whole `i64` and `u64` range; if either
/// side is a float both are compared as `f64`.
pub(crate) fn compare(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => match (integer(a), integer(b)) {
            (Some(a), Some(b)) => Some(a.cmp(&b)),
            _ => a.as_f64()?.partial_cmp(&b.as_f64()?),
        },
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

fn integer(n: &Number) -> Option<i128> {
    n.as_i64()
        .map(i128::from)
        .or_else(|| n.as_u64().map(i128::from))
}

/// Strict equality as used by `equals` and `one_of`.
///
/// Numbers are equal when they are numerically equal, whatever their
/// representation (`1` and `1.0`, `-0.0` and `0`). Everything else uses
/// `Value` equality.
pub(crate) fn same_value(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(_), Value::Number(_)) => compare(left, right) == Some(Ordering::Equal),
        _ => left == right,
    }
}

fn holds(value: &Value, bound: &Value, accept: fn(Ordering) -> bool) -> bool {
    compare(value, bound).is_some_and(accept)
}

/// Passes when the value is strictly greater than `min`.
#[derive(Debug, Clone)]
pub struct GreaterThan {
    min: Value,
}

impl GreaterThan {
    pub const KIND: ErrorKind = ErrorKind::GreaterThan;

    pub fn new(min: impl Into<Value>) -> Self {
        Self { min: min.into() }
    }
}

impl Constraint for GreaterThan {
    fn check(&self, value: Option<&Value>, path: &ValuePath) -> ConstraintResult {
        match present_value(value) {
            Some(value) if !holds(value, &self.min, Ordering::is_gt) => {
                ConstraintResult::error_at(
                    path.clone(),
                    ConstraintError::GreaterThan {
                        min: self.min.clone(),
                        value: value.clone(),
                    },
                )
            }
            _ => ConstraintResult::ok(),
        }
    }
}

/// Passes when the value is greater than or equal to `min`.
#[derive(Debug, Clone)]
pub struct GreaterOrEqual {
    min: Value,
}

impl GreaterOrEqual {
    pub const KIND: ErrorKind = ErrorKind::GreaterOrEqual;

    pub fn new(min: impl Into<Value>) -> Self {
        Self { min: min.into() }
    }
}

impl Constraint for GreaterOrEqual {
    fn check(&self, value: Option<&Value>, path: &ValuePath) -> ConstraintResult {
        match present_value(value) {
            Some(value) if !holds(value, &self.min, Ordering::is_ge) => {
                ConstraintResult::error_at(
                    path.clone(),
                    ConstraintError::GreaterOrEqual {
                        min: self.min.clone(),
                        value: value.clone(),
                    },
                )
            }
            _ => ConstraintResult::ok(),
        }
    }
}

/// Passes when the value is strictly less than `max`.
#[derive(Debug, Clone)]
pub struct LessThan {
    max: Value,
}

impl LessThan {
    pub const KIND: ErrorKind = ErrorKind::LessThan;

    pub fn new(max: impl Into<Value>) -> Self {
        Self { max: max.into() }
    }
}

impl Constraint for LessThan {
    fn check(&self, value: Option<&Value>, path: &ValuePath) -> ConstraintResult {
        match present_value(value) {
            Some(value) if !holds(value, &self.max, Ordering::is_lt) => {
                ConstraintResult::error_at(
                    path.clone(),
                    ConstraintError::LessThan {
                        max: self.max.clone(),
                        value: value.clone(),
                    },
                )
            }
            _ => ConstraintResult::ok(),
        }
    }
}

/// Passes when the value is less than or equal to `max`.
#[derive(Debug, Clone)]
pub struct LessOrEqual {
    max: Value,
}

impl LessOrEqual {
    pub const KIND: ErrorKind = ErrorKind::LessOrEqual;

    pub fn new(max: impl Into<Value>) -> Self {
        Self { max: max.into() }
    }
}

impl Constraint for LessOrEqual {
    fn check(&self, value: Option<&Value>, path: &ValuePath) -> ConstraintResult {
        match present_value(value) {
            Some(value) if !holds(value, &self.max, Ordering::is_le) => {
                ConstraintResult::error_at(
                    path.clone(),
                    ConstraintError::LessOrEqual {
                        max: self.max.clone(),
                        value: value.clone(),
                    },
                )
            }
            _ => ConstraintResult::ok(),
        }
    }
}

/// Requires `value > min`.
///
/// ```rust
/// use assay::{greater_than, Constraint};
/// use serde_json::json;
///
/// assert!(greater_than(5).validate(&json!(6)).is_ok());
/// assert!(greater_than(5).validate(&json!(5)).is_err());
/// assert!(greater_than("b").validate(&json!("c")).is_ok());
/// ```
pub fn greater_than(min: impl Into<Value>) -> GreaterThan {
    GreaterThan::new(min)
}

/// Requires `value >= min`.
pub fn greater_or_equal(min: impl Into<Value>) -> GreaterOrEqual {
    GreaterOrEqual::new(min)
}

/// Requires `value < max`.
pub fn less_than(max: impl Into<Value>) -> LessThan {
    LessThan::new(max)
}

/// Requires `value <= max`.
pub fn less_or_equal(max: impl Into<Value>) -> LessOrEqual {
    LessOrEqual::new(max)
}
