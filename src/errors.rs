//! Error aggregation.
//!
//! This module provides [`Errors`], a collection of [`Error`] values grouped
//! into field errors (keyed by field name) and general errors tied to no
//! field at all.

use std::fmt::{self, Display};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use stillwater::prelude::*;

use crate::error::Error;

/// A collection of errors for one logical unit of work.
///
/// `Errors` holds two buckets: **field errors**, keyed by field name with
/// insertion order preserved for both keys and per-field lists, and
/// **general errors**, an ordered list not tied to any field. An instance is
/// typically created empty per operation (e.g. one request), filled through
/// [`add_field_error`](Errors::add_field_error) /
/// [`add_general_error`](Errors::add_general_error) / [`add`](Errors::add),
/// and then handed to a response layer as a read-only result.
///
/// Not internally synchronized: one owner mutates an instance at a time.
/// Workers producing sub-results each build their own `Errors` and a single
/// thread merges them with sequential [`add`](Errors::add) calls.
///
/// # Merging
///
/// [`add`](Errors::add) is asymmetric on purpose: per-field lists from the
/// other collection *replace* the receiver's list for that field, while
/// general errors are *appended*. See the method docs before relying on
/// multi-stage merges.
///
/// # Example
///
/// ```rust
/// use errata::{Error, Errors};
///
/// let mut errors = Errors::new();
/// errors
///     .add_field_error("username", Error::new("[required]", "username is required"))
///     .add_general_error(Error::new("[blocked]", "account is blocked"));
///
/// assert_eq!(errors.len(), 2);
/// assert!(errors.contains_error("[req"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Errors {
    #[serde(skip_serializing_if = "IndexMap::is_empty", default)]
    field_errors: IndexMap<String, Vec<Error>>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    general_errors: Vec<Error>,
}

impl Errors {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a collection holding a single general error.
    pub fn general(error: Error) -> Self {
        let mut errors = Self::new();
        errors.add_general_error(error);
        errors
    }

    /// Creates a collection holding a single field error.
    pub fn field(field: impl Into<String>, error: Error) -> Self {
        let mut errors = Self::new();
        errors.add_field_error(field, error);
        errors
    }

    /// Appends `error` to the list for `field`, creating the list on first
    /// add. A field name never maps to an empty list through this API.
    pub fn add_field_error(&mut self, field: impl Into<String>, error: Error) -> &mut Self {
        self.field_errors.entry(field.into()).or_default().push(error);
        self
    }

    /// Appends `error` to the general error list.
    pub fn add_general_error(&mut self, error: Error) -> &mut Self {
        self.general_errors.push(error);
        self
    }

    /// Merges `other` into this collection.
    ///
    /// For every field name in `other`, the entire list here is **replaced**
    /// by the other collection's list, so the last merge wins for that field. A
    /// replaced field keeps its original position; new fields are appended.
    /// General errors are **appended** in order. This replace-vs-append
    /// asymmetry is the contract, not an accident: a later stage's errors for
    /// a field supersede earlier ones, while general errors accumulate.
    ///
    /// Passing `None` leaves the collection unchanged.
    pub fn add(&mut self, other: impl Into<Option<Errors>>) -> &mut Self {
        if let Some(other) = other.into() {
            for (field, errors) in other.field_errors {
                self.field_errors.insert(field, errors);
            }
            self.general_errors.extend(other.general_errors);
        }
        self
    }

    /// Returns true if any error's code starts with `code_prefix`.
    ///
    /// The match is a plain case-sensitive prefix test, so an empty prefix
    /// matches whenever any error exists. General errors are scanned first,
    /// then field buckets in stored order, stopping at the first match.
    pub fn contains_error(&self, code_prefix: &str) -> bool {
        self.iter().any(|error| error.code.starts_with(code_prefix))
    }

    /// Returns the first error for `field` whose code equals `code` exactly,
    /// or `None` when the field has no errors or none with that code.
    pub fn field_error(&self, field: &str, code: &str) -> Option<&Error> {
        self.field_errors.get(field)?.iter().find(|error| error.code == code)
    }

    /// Returns the field error map, keyed by field name in insertion order.
    pub fn field_errors(&self) -> &IndexMap<String, Vec<Error>> {
        &self.field_errors
    }

    /// Returns the general errors in insertion order.
    pub fn general_errors(&self) -> &[Error] {
        &self.general_errors
    }

    /// Returns true if no errors have been recorded.
    pub fn is_empty(&self) -> bool {
        self.general_errors.is_empty() && self.field_errors.is_empty()
    }

    /// Returns the total count of all errors, field and general.
    pub fn len(&self) -> usize {
        self.general_errors.len() + self.field_errors.values().map(Vec::len).sum::<usize>()
    }

    /// Returns an iterator over every error: general errors first, then
    /// field buckets in stored order.
    pub fn iter(&self) -> impl Iterator<Item = &Error> {
        self.general_errors
            .iter()
            .chain(self.field_errors.values().flatten())
    }
}

/// Combining two collections follows [`Errors::add`]: field lists from the
/// right operand replace, general errors append. Both parts are associative,
/// so accumulating through `Validation` is order-stable.
impl Semigroup for Errors {
    fn combine(mut self, other: Self) -> Self {
        self.add(other);
        self
    }
}

impl Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} error(s):", self.len())?;
        for error in &self.general_errors {
            writeln!(f, "  {}", error)?;
        }
        for (field, errors) in &self.field_errors {
            for error in errors {
                writeln!(f, "  {}: {}", field, error)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for Errors {}

impl IntoIterator for Errors {
    type Item = Error;
    type IntoIter = std::vec::IntoIter<Error>;

    fn into_iter(self) -> Self::IntoIter {
        let mut all = self.general_errors;
        for (_, errors) in self.field_errors {
            all.extend(errors);
        }
        all.into_iter()
    }
}

impl<'a> IntoIterator for &'a Errors {
    type Item = &'a Error;
    type IntoIter = Box<dyn Iterator<Item = &'a Error> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

// Errors is Send + Sync since it only contains Error, which is Send + Sync.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Errors>();
    assert_sync::<Errors>();
};
