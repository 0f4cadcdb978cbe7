//! # Errata
//!
//! An error reporting model that collects failures under two buckets: errors
//! tied to a named input field and general errors tied to no field at all.
//!
//! ## Overview
//!
//! Validation and business logic rarely fail one error at a time. Errata
//! gives that code a single aggregate to fill as it goes: field errors for
//! form-style input problems, general errors for everything else. The
//! finished collection is handed to a response layer to serialize. The model
//! is passive, built and inspected by calling code rather than thrown.
//!
//! ## Core Types
//!
//! - [`Error`]: a single error with a machine-readable code, an optional
//!   human-readable message, optional structured data, and positional values
//!   for message templating
//! - [`Errors`]: an aggregate of field errors and general errors with merge,
//!   prefix search, and lookup operations
//!
//! ## Example
//!
//! ```rust
//! use errata::{Error, Errors};
//!
//! let mut errors = Errors::new();
//! errors
//!     .add_field_error("username", Error::new("[required]", "username is required"))
//!     .add_general_error(Error::new("[blocked]", "account is blocked"));
//!
//! assert_eq!(errors.len(), 2);
//! assert!(errors.contains_error("[req"));
//!
//! // Field lists from a merged collection replace, general errors append.
//! let mut later = Errors::new();
//! later.add_field_error("username", Error::new("[taken]", "username is taken"));
//! errors.add(later);
//!
//! assert_eq!(errors.field_errors()["username"][0].code, "[taken]");
//! ```

pub mod error;
pub mod errors;

pub use error::Error;
pub use errors::Errors;

/// Type alias for validation results that accumulate failures into [`Errors`]
pub type ValidationResult<T> = stillwater::Validation<T, Errors>;
