//! Nominal runtime types of input values.

use std::fmt::{self, Display};

use serde_json::Value;

/// The runtime type identity of a JSON value.
///
/// Type checks compare these exactly: a value matches only the single
/// `ValueType` it was built as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl ValueType {
    /// Returns the runtime type of `value`.
    ///
    /// ```rust
    /// use assay::ValueType;
    /// use serde_json::json;
    ///
    /// assert_eq!(ValueType::of(&json!(200)), ValueType::Number);
    /// assert_eq!(ValueType::of(&json!("Dude")), ValueType::String);
    /// ```
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueType::Null,
            Value::Bool(_) => ValueType::Boolean,
            Value::Number(_) => ValueType::Number,
            Value::String(_) => ValueType::String,
            Value::Array(_) => ValueType::Array,
            Value::Object(_) => ValueType::Object,
        }
    }

    /// Returns the lowercase name used in messages.
    pub fn name(self) -> &'static str {
        match self {
            ValueType::Null => "null",
            ValueType::Boolean => "boolean",
            ValueType::Number => "number",
            ValueType::String => "string",
            ValueType::Array => "array",
            ValueType::Object => "object",
        }
    }

    pub fn matches(self, value: &Value) -> bool {
        Self::of(value) == self
    }
}

impl Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
