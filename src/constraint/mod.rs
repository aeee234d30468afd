//! Constraints and the factories that build them.
//!
//! A constraint is a pure function from `(value, path)` to a
//! [`ConstraintResult`]. Leaf constraints perform a single check; the shape
//! matcher and the `all`/`any` combinators hold child constraints and merge
//! their results in declaration order.
//!
//! Values are passed as `Option<&Value>`: `None` is an absent value (a key
//! missing from an object) and `Some(&Value::Null)` is an explicit null. Only
//! [`required`] fails on either; every other constraint lets them through.
//!
//! # Example
//!
//! ```rust
//! use assay::{all, greater_than, less_than, Constraint};
//! use serde_json::json;
//!
//! let between = all![greater_than(5), less_than(10)];
//!
//! assert!(between.validate(&json!(7)).is_ok());
//!
//! let result = between.validate(&json!(20));
//! assert_eq!(result.len(), 1);
//! ```

mod array;
mod combinators;
mod length;
mod membership;
mod object;
mod ordering;
mod pattern;
mod required;
mod shape;

use std::sync::Arc;

use serde_json::Value;

use crate::path::ValuePath;
use crate::result::ConstraintResult;

pub use array::ArrayShape;
pub use combinators::{all, any, All, Any};
pub use length::{exact_length, max_length, min_length, ExactLength, MaxLength, MinLength};
pub use membership::{equals, one_of, Equals, OneOf};
pub use object::{ObjectShape, UnknownKeys};
pub use ordering::{
    greater_or_equal, greater_than, less_or_equal, less_than, GreaterOrEqual, GreaterThan,
    LessOrEqual, LessThan,
};
pub use pattern::{pattern, Pattern};
pub use required::{present, required, Required};
pub use shape::{type_of, Shape, TypeConstraint};

/// A reusable, thread-safe check over a value at a path.
///
/// Constraints are built once and invoked any number of times, possibly from
/// several threads at once. Implementations must not keep state between calls.
pub trait Constraint: Send + Sync {
    /// Checks `value` located at `path`.
    ///
    /// `None` means the value is absent.
    fn check(&self, value: Option<&Value>, path: &ValuePath) -> ConstraintResult;

    /// Checks a present value at the root path.
    fn validate(&self, value: &Value) -> ConstraintResult {
        self.check(Some(value), &ValuePath::root())
    }

    /// Checks a present value at `path`.
    fn validate_at(&self, value: &Value, path: &ValuePath) -> ConstraintResult {
        self.check(Some(value), path)
    }

    /// Erases the constraint's type so it can sit in a list with others.
    fn boxed(self) -> BoxedConstraint
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

/// A type-erased constraint, as held by combinators and shapes.
pub type BoxedConstraint = Box<dyn Constraint>;

impl<C: Constraint + ?Sized> Constraint for Box<C> {
    fn check(&self, value: Option<&Value>, path: &ValuePath) -> ConstraintResult {
        (**self).check(value, path)
    }
}

impl<C: Constraint + ?Sized> Constraint for Arc<C> {
    fn check(&self, value: Option<&Value>, path: &ValuePath) -> ConstraintResult {
        (**self).check(value, path)
    }
}

impl<C: Constraint + ?Sized> Constraint for &C {
    fn check(&self, value: Option<&Value>, path: &ValuePath) -> ConstraintResult {
        (**self).check(value, path)
    }
}

/// A constraint backed by a plain function or closure.
///
/// Built with [`from_fn`].
pub struct FromFn<F>(F);

impl<F> Constraint for FromFn<F>
where
    F: Fn(Option<&Value>, &ValuePath) -> ConstraintResult + Send + Sync,
{
    fn check(&self, value: Option<&Value>, path: &ValuePath) -> ConstraintResult {
        (self.0)(value, path)
    }
}

/// Turns a closure into a constraint.
///
/// ```rust
/// use assay::{from_fn, Constraint, ConstraintError, ConstraintResult};
/// use serde_json::json;
///
/// let even = from_fn(|value, path| match value.and_then(|v| v.as_i64()) {
///     Some(n) if n % 2 != 0 => ConstraintResult::error_at(
///         path.clone(),
///         ConstraintError::Equals { expected: json!(n + 1), value: json!(n) },
///     ),
///     _ => ConstraintResult::ok(),
/// });
///
/// assert!(even.validate(&json!(4)).is_ok());
/// assert!(even.validate(&json!(3)).is_err());
/// ```
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: Fn(Option<&Value>, &ValuePath) -> ConstraintResult + Send + Sync,
{
    FromFn(f)
}

/// Returns the value when it is present and not null.
pub(crate) fn present_value(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}
