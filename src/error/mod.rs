//! Error records produced by failed constraints.
//!
//! Every primitive constraint has exactly one [`ErrorKind`], and each failure
//! is recorded as a [`ConstraintError`] variant carrying the parameters of the
//! check that failed.

mod constraint_error;

pub use constraint_error::{ConstraintError, ErrorKind};
