//! Parallel validation of independent inputs.
//!
//! Constraints hold no mutable state, so one constraint can check many values
//! at once. Results come back in input order.

use rayon::prelude::*;
use serde_json::Value;
use tracing::debug;

use crate::constraint::Constraint;
use crate::result::ConstraintResult;

/// Validates each value against `constraint` in parallel.
///
/// The returned results line up index-for-index with `values`.
///
/// # Example
///
/// ```rust
/// use assay::{validate_batch, type_of, ValueType};
/// use serde_json::json;
///
/// let values = vec![json!("a"), json!(1), json!("b")];
/// let results = validate_batch(&type_of(ValueType::String), &values);
///
/// let ok: Vec<bool> = results.iter().map(|r| r.is_ok()).collect();
/// assert_eq!(ok, vec![true, false, true]);
/// ```
pub fn validate_batch<C>(constraint: &C, values: &[Value]) -> Vec<ConstraintResult>
where
    C: Constraint + ?Sized,
{
    let results: Vec<ConstraintResult> = values
        .par_iter()
        .map(|value| constraint.validate(value))
        .collect();

    debug!(
        inputs = values.len(),
        failed = results.iter().filter(|r| r.is_err()).count(),
        "batch validation finished"
    );
    results
}
