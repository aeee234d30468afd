//! Array shapes: item constraints applied to every element.

use serde_json::Value;
use tracing::trace;

use crate::error::ConstraintError;
use crate::path::ValuePath;
use crate::result::ConstraintResult;
use crate::value_type::ValueType;

use super::{BoxedConstraint, Constraint};

/// Describes an array by constraints that every item must satisfy.
///
/// Each item is checked against every constraint, so two constraints here
/// mean "each item satisfies both". To let items vary, put an
/// [`any`](super::any) combinator in the list.
///
/// # Example
///
/// ```rust
/// use assay::{any, type_of, ArrayShape, Constraint, ValueType};
/// use serde_json::json;
///
/// let mixed = type_of(ArrayShape::new().item(any![
///     type_of(ValueType::String),
///     type_of(ValueType::Number),
/// ]));
///
/// assert!(mixed.validate(&json!(["string", 42])).is_ok());
/// assert!(mixed.validate(&json!(["string", true])).is_err());
/// ```
#[derive(Default)]
pub struct ArrayShape {
    items: Vec<BoxedConstraint>,
}

impl ArrayShape {
    /// An empty shape, which accepts any array.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a constraint every item must satisfy.
    pub fn item<C: Constraint + 'static>(mut self, constraint: C) -> Self {
        self.items.push(constraint.boxed());
        self
    }

    /// Adds several item constraints, checked in order.
    pub fn items(mut self, constraints: Vec<BoxedConstraint>) -> Self {
        self.items.extend(constraints);
        self
    }

    /// Number of item constraints.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when the shape has no item constraints.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn check_value(&self, value: &Value, path: &ValuePath) -> ConstraintResult {
        if self.items.is_empty() {
            return ConstraintResult::ok();
        }

        let Some(elements) = value.as_array() else {
            return ConstraintResult::error_at(
                path.clone(),
                ConstraintError::TypeMismatch {
                    expected: ValueType::Array,
                    actual: ValueType::of(value),
                },
            );
        };

        trace!(path = %path, items = elements.len(), "checking array shape");

        let mut result = ConstraintResult::ok();
        for (index, element) in elements.iter().enumerate() {
            let item_path = path.index(index);
            for constraint in &self.items {
                result = result.merge(constraint.check(Some(element), &item_path));
            }
        }
        result
    }
}
