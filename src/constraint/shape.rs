//! The type/shape matcher.
//!
//! [`type_of`] checks a value against a [`Shape`]: an object shape, an array
//! shape, or a plain runtime type. The caller picks the variant explicitly;
//! nothing is inferred from what the descriptor happens to look like.

use serde_json::Value;
use tracing::trace;

use crate::error::{ConstraintError, ErrorKind};
use crate::path::ValuePath;
use crate::result::ConstraintResult;
use crate::value_type::ValueType;

use super::{present_value, ArrayShape, Constraint, ObjectShape};

/// A shape descriptor for [`type_of`].
pub enum Shape {
    /// Check each declared key of an object.
    Object(ObjectShape),
    /// Check every item of an array.
    Array(ArrayShape),
    /// Check the value's runtime type.
    Type(ValueType),
}

impl Shape {
    /// Starts an object shape.
    pub fn object() -> ObjectShape {
        ObjectShape::new()
    }

    /// Starts an array shape.
    pub fn array() -> ArrayShape {
        ArrayShape::new()
    }
}

impl From<ObjectShape> for Shape {
    fn from(shape: ObjectShape) -> Self {
        Shape::Object(shape)
    }
}

impl From<ArrayShape> for Shape {
    fn from(shape: ArrayShape) -> Self {
        Shape::Array(shape)
    }
}

impl From<ValueType> for Shape {
    fn from(value_type: ValueType) -> Self {
        Shape::Type(value_type)
    }
}

/// Checks a value against a [`Shape`].
///
/// Null and absent values always pass; use [`required`](super::required) to
/// demand presence.
pub struct TypeConstraint {
    shape: Shape,
}

impl TypeConstraint {
    pub const KIND: ErrorKind = ErrorKind::TypeMismatch;

    /// Checks values against `shape`.
    pub fn new(shape: impl Into<Shape>) -> Self {
        Self {
            shape: shape.into(),
        }
    }

    /// The descriptor values are checked against.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }
}

impl Constraint for TypeConstraint {
    fn check(&self, value: Option<&Value>, path: &ValuePath) -> ConstraintResult {
        let Some(value) = present_value(value) else {
            return ConstraintResult::ok();
        };

        match &self.shape {
            Shape::Object(shape) => shape.check_value(value, path),
            Shape::Array(shape) => shape.check_value(value, path),
            Shape::Type(expected) => {
                let actual = ValueType::of(value);
                if actual == *expected {
                    return ConstraintResult::ok();
                }
                trace!(path = %path, %expected, %actual, "type mismatch");
                ConstraintResult::error_at(
                    path.clone(),
                    ConstraintError::TypeMismatch {
                        expected: *expected,
                        actual,
                    },
                )
            }
        }
    }
}

/// Builds a type/shape constraint.
///
/// ```rust
/// use assay::{required, type_of, Constraint, ObjectShape, ValueType};
/// use serde_json::json;
///
/// let user = type_of(
///     ObjectShape::new()
///         .field("name", required(type_of(ValueType::String)))
///         .field("age", type_of(ValueType::Number)),
/// );
///
/// let result = user.validate(&json!({"name": 404, "age": "old"}));
/// assert_eq!(result.len(), 2);
/// assert!(type_of(ValueType::String).validate(&json!(200)).is_err());
/// ```
pub fn type_of(shape: impl Into<Shape>) -> TypeConstraint {
    TypeConstraint::new(shape)
}
