//! Object shapes: per-key constraint lists checked in declaration order.

use indexmap::IndexMap;
use serde_json::Value;
use tracing::trace;

use crate::error::{ConstraintError, ErrorKind};
use crate::path::ValuePath;
use crate::result::ConstraintResult;

use super::{BoxedConstraint, Constraint};

/// How an [`ObjectShape`] treats input keys it does not declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownKeys {
    /// Undeclared keys are not looked at.
    #[default]
    Ignore,
    /// Each undeclared key is reported as an `UnknownKey` error.
    Reject,
}

/// Describes an object by the constraints that apply to each of its keys.
///
/// Keys are checked in the order they were declared, and that order is the
/// order of the resulting errors. A key missing from the input is checked as
/// an absent value, so only a [`required`](super::required) constraint will
/// complain about it.
///
/// # Example
///
/// ```rust
/// use assay::{present, type_of, Constraint, ObjectShape, ValueType};
/// use serde_json::json;
///
/// let person = type_of(
///     ObjectShape::new()
///         .field("name", present())
///         .field("age", type_of(ValueType::Number)),
/// );
///
/// assert!(person.validate(&json!({"name": "Dude", "age": 42})).is_ok());
///
/// let result = person.validate(&json!({"age": 42}));
/// assert_eq!(result.errors()[0].path().to_string(), "name");
/// ```
#[derive(Default)]
pub struct ObjectShape {
    fields: IndexMap<String, Vec<BoxedConstraint>>,
    unknown_keys: UnknownKeys,
}

impl ObjectShape {
    /// Kind of the errors reported for undeclared keys under
    /// [`UnknownKeys::Reject`].
    pub const UNKNOWN_KEY_KIND: ErrorKind = ErrorKind::UnknownKey;

    /// An object shape with no declared keys.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a constraint for `key`.
    ///
    /// Calling this again with the same key appends to that key's list
    /// without changing its position.
    pub fn field<C>(mut self, key: impl Into<String>, constraint: C) -> Self
    where
        C: Constraint + 'static,
    {
        self.fields
            .entry(key.into())
            .or_default()
            .push(constraint.boxed());
        self
    }

    /// Declares a list of constraints for `key`, checked in order.
    pub fn fields(mut self, key: impl Into<String>, constraints: Vec<BoxedConstraint>) -> Self {
        self.fields
            .entry(key.into())
            .or_default()
            .extend(constraints);
        self
    }

    /// Sets the policy for input keys that are not declared.
    pub fn unknown_keys(mut self, policy: UnknownKeys) -> Self {
        self.unknown_keys = policy;
        self
    }

    /// The declared keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub(crate) fn check_value(&self, value: &Value, path: &ValuePath) -> ConstraintResult {
        trace!(path = %path, keys = self.fields.len(), "checking object shape");

        let mut result = ConstraintResult::ok();
        for (key, constraints) in &self.fields {
            let key_path = path.key(key.as_str());
            let key_value = value.get(key.as_str());
            for constraint in constraints {
                result = result.merge(constraint.check(key_value, &key_path));
            }
        }

        if self.unknown_keys == UnknownKeys::Reject {
            if let Some(map) = value.as_object() {
                for key in map.keys().filter(|k| !self.fields.contains_key(k.as_str())) {
                    result = result.merge(ConstraintResult::error_at(
                        path.key(key.as_str()),
                        ConstraintError::UnknownKey { key: key.clone() },
                    ));
                }
            }
        }

        result
    }
}
