//! The result algebra every constraint returns.
//!
//! A [`ConstraintResult`] is either ok (no errors) or a list of
//! [`PathResult`]s, each binding one or more [`ConstraintError`]s to the
//! location where they occurred. Results from independent checks are combined
//! with [`ConstraintResult::merge`], which is associative and has
//! [`ConstraintResult::ok`] as its identity, so any grouping of merges yields
//! the same report.
//!
//! # Example
//!
//! ```rust
//! use assay::{ConstraintError, ConstraintResult, ValuePath};
//!
//! let name = ConstraintResult::error_at(ValuePath::root().key("name"), ConstraintError::Required);
//! let email = ConstraintResult::error_at(ValuePath::root().key("email"), ConstraintError::Required);
//!
//! let report = ConstraintResult::ok().merge(name).merge(email);
//! assert!(!report.is_ok());
//! assert_eq!(report.len(), 2);
//! assert_eq!(report.errors()[0].path().to_string(), "name");
//! ```

use std::fmt::{self, Display};

use stillwater::prelude::*;
use stillwater::Validation;

use crate::error::{ConstraintError, ErrorKind};
use crate::path::ValuePath;

/// Failures recorded at a single location.
///
/// A `PathResult` always describes a failure: it holds at least one error.
/// Success is the absence of a `PathResult`, never an empty one.
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    path: ValuePath,
    errors: NonEmptyVec<ConstraintError>,
}

impl PathResult {
    /// Binds `errors` to `path`.
    pub fn new(path: ValuePath, errors: NonEmptyVec<ConstraintError>) -> Self {
        Self { path, errors }
    }

    /// A failure with exactly one error.
    pub fn single(path: ValuePath, error: ConstraintError) -> Self {
        Self::new(path, NonEmptyVec::singleton(error))
    }

    /// Builds a failure from any number of errors, or `None` when there are none.
    pub fn from_errors(
        path: ValuePath,
        errors: impl IntoIterator<Item = ConstraintError>,
    ) -> Option<Self> {
        non_empty(errors).map(|errors| Self::new(path, errors))
    }

    /// Where the errors occurred.
    pub fn path(&self) -> &ValuePath {
        &self.path
    }

    /// The errors recorded at this path, in evaluation order.
    pub fn errors(&self) -> &NonEmptyVec<ConstraintError> {
        &self.errors
    }

    /// Iterates over the errors at this path.
    pub fn iter(&self) -> impl Iterator<Item = &ConstraintError> {
        self.errors.iter()
    }

    /// The first error recorded at this path.
    pub fn first(&self) -> &ConstraintError {
        self.errors.head()
    }

    /// Number of errors at this path, always at least one.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns `false`: a `PathResult` holds at least one error.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Display for PathResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let at = location(&self.path);
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", at, error)?;
        }
        Ok(())
    }
}

/// The aggregate pass/fail report of a constraint invocation.
///
/// The result is ok exactly when it holds no [`PathResult`]s. Results are
/// never mutated; merging produces the combined report.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConstraintResult {
    errors: Vec<PathResult>,
}

impl ConstraintResult {
    /// The successful result.
    pub fn ok() -> Self {
        Self::default()
    }

    /// Builds a result from failure records.
    ///
    /// Passing no records yields an ok result.
    pub fn error(errors: impl IntoIterator<Item = PathResult>) -> Self {
        Self {
            errors: errors.into_iter().collect(),
        }
    }

    /// A failed result with one error at `path`.
    pub fn error_at(path: ValuePath, error: ConstraintError) -> Self {
        Self::error([PathResult::single(path, error)])
    }

    /// A failed result with several errors bound to the same `path`.
    pub fn errors_at(path: ValuePath, errors: NonEmptyVec<ConstraintError>) -> Self {
        Self::error([PathResult::new(path, errors)])
    }

    /// Returns `true` when no constraint failed.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns `true` when at least one constraint failed.
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// The failure records in evaluation order.
    pub fn errors(&self) -> &[PathResult] {
        &self.errors
    }

    /// Number of failure records (not individual errors).
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Same as [`is_ok`](Self::is_ok).
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterates over the failure records in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = &PathResult> {
        self.errors.iter()
    }

    /// Combines two results, keeping `self`'s records before `other`'s.
    ///
    /// When `other` is ok, `self` is returned unchanged.
    pub fn merge(self, other: ConstraintResult) -> Self {
        if other.is_ok() {
            return self;
        }
        let mut errors = self.errors;
        errors.extend(other.errors);
        Self { errors }
    }

    /// Returns the failure records at exactly `path`.
    pub fn at_path(&self, path: &ValuePath) -> Vec<&PathResult> {
        self.errors.iter().filter(|r| r.path() == path).collect()
    }

    /// Returns every individual error of the given kind, in report order.
    pub fn with_kind(&self, kind: ErrorKind) -> Vec<&ConstraintError> {
        self.errors
            .iter()
            .flat_map(PathResult::iter)
            .filter(|e| e.kind() == kind)
            .collect()
    }

    /// Converts the report into a stillwater `Validation`.
    pub fn into_validation(self) -> Validation<(), NonEmptyVec<PathResult>> {
        match non_empty(self.errors) {
            Some(errors) => Validation::Failure(errors),
            None => Validation::Success(()),
        }
    }
}

impl Semigroup for ConstraintResult {
    fn combine(self, other: Self) -> Self {
        self.merge(other)
    }
}

/// Merges results left to right.
impl FromIterator<ConstraintResult> for ConstraintResult {
    fn from_iter<I: IntoIterator<Item = ConstraintResult>>(iter: I) -> Self {
        iter.into_iter().fold(Self::ok(), Self::merge)
    }
}

impl Display for ConstraintResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ok() {
            return writeln!(f, "Validation passed");
        }
        let total: usize = self.errors.iter().map(PathResult::len).sum();
        writeln!(f, "Validation failed with {} error(s):", total)?;
        let lines = self.errors.iter().flat_map(|result| {
            result.iter().map(move |error| (result.path(), error))
        });
        for (i, (path, error)) in lines.enumerate() {
            writeln!(f, "  {}. {}: {}", i + 1, location(path), error)?;
        }
        Ok(())
    }
}

impl IntoIterator for ConstraintResult {
    type Item = PathResult;
    type IntoIter = std::vec::IntoIter<PathResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

/// Renders a path for reports, with the root shown as `(root)`.
fn location(path: &ValuePath) -> String {
    if path.is_root() {
        "(root)".to_string()
    } else {
        path.to_string()
    }
}

fn non_empty<T>(items: impl IntoIterator<Item = T>) -> Option<NonEmptyVec<T>> {
    let mut items = items.into_iter();
    let head = items.next()?;
    Some(items.fold(NonEmptyVec::singleton(head), |acc, item| {
        acc.combine(NonEmptyVec::singleton(item))
    }))
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ConstraintResult>();
    assert_sync::<ConstraintResult>();
};
