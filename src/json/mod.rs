//! # JSON Conversion
//!
//! The `graphql_static_validation::json` module renders validation errors in the shape that the
//! GraphQL specification prescribes for errors in a response, so that an executor may return
//! them to a client as they are:
//!
//! ```json
//! { "message": "...", "locations": [{ "line": 1, "column": 3 }], "path": ["query", "user"] }
//! ```
//!
//! [`ValidationError`](crate::validate::ValidationError) implements `serde::Serialize` in this
//! shape. The [ValueFromError] trait converts errors to `serde_json` values directly using a
//! `to_json` method, and [errors_to_value] converts a whole list of errors at once.
//! [Reference](https://spec.graphql.org/October2021/#sec-Errors.Error-Result-Format)

#[cfg(feature = "json")]
extern crate serde_json;

#[cfg(feature = "json")]
extern crate serde;

mod conversion;

pub use conversion::*;
