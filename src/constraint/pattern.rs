//! Regular-expression constraint for string values.

use regex::Regex;
use serde_json::Value;

use crate::error::{ConstraintError, ErrorKind};
use crate::path::ValuePath;
use crate::result::ConstraintResult;

use super::{present_value, Constraint};

/// Passes when a string value matches the regex.
///
/// Non-string values never match.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    pub const KIND: ErrorKind = ErrorKind::Pattern;

    /// Compiles `pattern`, failing if it is not a valid regex.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    /// The regex source.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl Constraint for Pattern {
    fn check(&self, value: Option<&Value>, path: &ValuePath) -> ConstraintResult {
        let Some(value) = present_value(value) else {
            return ConstraintResult::ok();
        };
        if value.as_str().is_some_and(|s| self.regex.is_match(s)) {
            return ConstraintResult::ok();
        }
        ConstraintResult::error_at(
            path.clone(),
            ConstraintError::Pattern {
                pattern: self.regex.as_str().to_string(),
                value: value.clone(),
            },
        )
    }
}

/// Requires a string matching `pattern`.
///
/// ```rust
/// use assay::{pattern, Constraint};
/// use serde_json::json;
///
/// let email = pattern(r"^[^@\s]+@[^@\s]+$").unwrap();
/// assert!(email.validate(&json!("dude@bowling.com")).is_ok());
/// assert!(email.validate(&json!("dude")).is_err());
/// ```
pub fn pattern(pattern: &str) -> Result<Pattern, regex::Error> {
    Pattern::new(pattern)
}
