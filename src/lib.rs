//! # Assay
//!
//! Composable constraints that check arbitrary JSON values and report every
//! violation, each bound to the path where it occurred.
//!
//! ## Overview
//!
//! A constraint is a pure function from `(value, path)` to a
//! [`ConstraintResult`]. Small primitives perform one check each (ordering,
//! equality, membership, length, pattern). [`required`] gates presence,
//! [`type_of`] matches object shapes, array shapes and runtime types, and
//! [`all!`]/[`any!`] combine constraints with AND/OR semantics. Nothing
//! short-circuits: one invocation surfaces the complete set of problems.
//!
//! ## Core Types
//!
//! - [`Constraint`]: the trait every check implements
//! - [`ConstraintResult`] / [`PathResult`]: the report and its per-path records
//! - [`ConstraintError`] / [`ErrorKind`]: what went wrong, as data
//! - [`ValuePath`]: where it went wrong (e.g. `branches[0].address`)
//! - [`Shape`]: object, array or type descriptors for [`type_of`]
//!
//! ## Example
//!
//! ```rust
//! use assay::{
//!     all, max_length, min_length, required, type_of, Constraint, ErrorKind, ObjectShape,
//!     ValuePath, ValueType,
//! };
//! use serde_json::json;
//!
//! let company = type_of(ObjectShape::new().field(
//!     "title",
//!     required(all![type_of(ValueType::String), min_length(1), max_length(20)]),
//! ));
//!
//! assert!(company.validate(&json!({"title": "Bowling inc."})).is_ok());
//!
//! let result = company.validate(&json!({}));
//! assert_eq!(result.len(), 1);
//! assert_eq!(result.errors()[0].path(), &ValuePath::root().key("title"));
//! assert_eq!(result.errors()[0].first().kind(), ErrorKind::Required);
//! ```

pub mod batch;
pub mod constraint;
pub mod error;
pub mod path;
pub mod result;
pub mod value_type;

pub use batch::validate_batch;
pub use constraint::{
    all, any, equals, exact_length, from_fn, greater_or_equal, greater_than, less_or_equal,
    less_than, max_length, min_length, one_of, pattern, present, required, type_of, All, Any,
    ArrayShape, BoxedConstraint, Constraint, Equals, ExactLength, FromFn, GreaterOrEqual,
    GreaterThan, LessOrEqual, LessThan, MaxLength, MinLength, ObjectShape, OneOf, Pattern,
    Required, Shape, TypeConstraint, UnknownKeys,
};
pub use error::{ConstraintError, ErrorKind};
pub use path::{PathSegment, ValuePath};
pub use result::{ConstraintResult, PathResult};
pub use value_type::ValueType;
