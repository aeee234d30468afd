//! Logical combinators over lists of constraints.
//!
//! - [`All`]: every child must pass; the report holds every failing child's errors.
//! - [`Any`]: one passing child is enough; if none pass, the report holds
//!   every child's errors.
//!
//! Both evaluate every child, in order, against the same value and path.
//! The [`all!`](crate::all!) and [`any!`](crate::any!) macros box their
//! arguments so differently typed constraints can be listed together.

use serde_json::Value;
use tracing::trace;

use crate::path::ValuePath;
use crate::result::ConstraintResult;

use super::{BoxedConstraint, Constraint};

/// Logical AND of child constraints.
pub struct All {
    constraints: Vec<BoxedConstraint>,
}

impl All {
    /// Combines `constraints`, evaluated in order.
    pub fn new(constraints: Vec<BoxedConstraint>) -> Self {
        Self { constraints }
    }

    /// Number of child constraints.
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    /// Returns `true` when there are no children; the combinator then passes.
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }
}

impl Constraint for All {
    fn check(&self, value: Option<&Value>, path: &ValuePath) -> ConstraintResult {
        let result: ConstraintResult = self
            .constraints
            .iter()
            .map(|constraint| constraint.check(value, path))
            .collect();

        if result.is_err() {
            trace!(path = %path, failures = result.len(), "all: children failed");
        }
        result
    }
}

/// Logical OR of child constraints.
pub struct Any {
    constraints: Vec<BoxedConstraint>,
}

impl Any {
    /// Combines `constraints`, evaluated in order.
    pub fn new(constraints: Vec<BoxedConstraint>) -> Self {
        Self { constraints }
    }

    /// Number of child constraints.
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    /// Returns `true` when there are no children; the combinator then passes.
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }
}

impl Constraint for Any {
    fn check(&self, value: Option<&Value>, path: &ValuePath) -> ConstraintResult {
        let results: Vec<ConstraintResult> = self
            .constraints
            .iter()
            .map(|constraint| constraint.check(value, path))
            .collect();

        // A passing child yields the canonical ok, not that child's result.
        if results.is_empty() || results.iter().any(ConstraintResult::is_ok) {
            return ConstraintResult::ok();
        }

        trace!(path = %path, alternatives = results.len(), "any: no alternative matched");
        results.into_iter().collect()
    }
}

/// Requires every constraint to pass.
///
/// An empty list passes.
pub fn all(constraints: Vec<BoxedConstraint>) -> All {
    All::new(constraints)
}

/// Requires at least one constraint to pass.
///
/// An empty list passes.
pub fn any(constraints: Vec<BoxedConstraint>) -> Any {
    Any::new(constraints)
}

/// Builds an [`All`] from constraints of any type.
///
/// ```rust
/// use assay::{all, greater_or_equal, less_or_equal, Constraint};
/// use serde_json::json;
///
/// let ten = all![greater_or_equal(10), less_or_equal(10)];
/// assert!(ten.validate(&json!(10)).is_ok());
///
/// let nothing = all![];
/// assert!(nothing.validate(&json!(10)).is_ok());
/// ```
#[macro_export]
macro_rules! all {
    ($($constraint:expr),* $(,)?) => {
        $crate::All::new(vec![$($crate::Constraint::boxed($constraint)),*])
    };
}

/// Builds an [`Any`] from constraints of any type.
///
/// ```rust
/// use assay::{any, exact_length, Constraint};
/// use serde_json::json;
///
/// let five_or_six = any![exact_length(5), exact_length(6)];
/// assert!(five_or_six.validate(&json!("Donny")).is_ok());
/// assert_eq!(five_or_six.validate(&json!("Dude")).len(), 2);
/// ```
#[macro_export]
macro_rules! any {
    ($($constraint:expr),* $(,)?) => {
        $crate::Any::new(vec![$($crate::Constraint::boxed($constraint)),*])
    };
}
