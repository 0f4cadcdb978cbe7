//! Single reported errors.
//!
//! This module provides [`Error`], a value describing one failure with a
//! machine-readable code, an optional human-readable message, optional
//! structured data, and positional values for message templating.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single reported error.
///
/// `Error` captures everything a consumer needs to render or classify one
/// failure:
/// - **code**: machine-readable identifier (e.g. `[required]`, `[invalid]`)
/// - **message**: human-readable description (optional)
/// - **data**: structured payload accompanying the error (optional)
/// - **values**: positional arguments for message templating
///
/// The `values` field is local-only: it is skipped during serialization and
/// exists so a consumer can format the `message` template itself. It still
/// participates in equality, in order.
///
/// # Example
///
/// ```rust
/// use errata::Error;
/// use serde_json::json;
///
/// let error = Error::new("[invalid]", "username is not allowed")
///     .with_data("attempts", json!(3))
///     .with_value(json!("bob"));
///
/// assert_eq!(error.code, "[invalid]");
/// assert_eq!(error.values.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Error {
    /// Machine-readable error code. The sole key used for prefix search.
    pub code: String,
    /// Human-readable error message.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub message: Option<String>,
    /// Structured payload accompanying the error.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub data: Option<Map<String, Value>>,
    /// Positional arguments for message templating. Never serialized.
    #[serde(skip)]
    pub values: Vec<Value>,
}

impl Error {
    /// Creates a new error with the given code and message.
    ///
    /// Arguments are stored verbatim; no validation is performed. Use the
    /// `with_*` methods to attach data or templating values.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: Some(message.into()),
            data: None,
            values: Vec::new(),
        }
    }

    /// Creates a new error carrying only a code, with no message.
    pub fn from_code(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: None,
            data: None,
            values: Vec::new(),
        }
    }

    /// Inserts one entry into the structured data payload and returns self
    /// for chaining. The payload map is created on first use.
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    /// Appends one templating value and returns self for chaining.
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.values.push(value.into());
        self
    }

    /// Replaces the templating values and returns self for chaining.
    pub fn with_values(mut self, values: impl IntoIterator<Item = Value>) -> Self {
        self.values = values.into_iter().collect();
        self
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{} {}", self.code, message),
            None => write!(f, "{}", self.code),
        }
    }
}

impl std::error::Error for Error {}

// Error is Send + Sync since all fields are owned types
// (String, serde_json::Map, Vec<Value>). These assertions keep that true
// if the fields change.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Error>();
    assert_sync::<Error>();
};
