//! # Error and Result for this crate
//!
//! This crate defines a common [Error] structure that's used when a validation run can't produce
//! a list of findings, or when callers prefer a single pass/fail [Result] over the list of
//! [`ValidationError`](crate::validate::ValidationError) entries.

use std::{fmt, result};

/// This crate's result type using the [Error] structure.
pub type Result<T> = result::Result<T, Error>;

/// This crate's error structure which internal errors are converted into.
///
/// The error is split into a general message and a context string. For validation the context
/// is populated with the list of collected validation errors, one per line.
///
/// The Error implements both the [`fmt::Display`] and [`fmt::Debug`] traits and, via
/// `thiserror`, [`std::error::Error`] so that it can be used with existing patterns for error
/// handling.
#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
#[error("{error_type} Error: {message}{}", print_context(.context))]
pub struct Error {
    pub(crate) message: String,
    pub(crate) location: Option<Location>,
    pub(crate) context: Option<String>,
    pub(crate) error_type: ErrorType,
}

/// Distinguishes findings about the document from defects in the inputs handed to validation.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorType {
    /// The document doesn't conform to the schema.
    GraphQL,
    /// The document or schema breaks an invariant that the parser or schema builder upholds.
    Internal,
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorType::GraphQL => f.write_str("GraphQL"),
            ErrorType::Internal => f.write_str("Internal"),
        }
    }
}

fn print_context(context: &Option<String>) -> String {
    match context {
        Some(context) => format!("\n{}", context),
        None => String::new(),
    }
}

impl Error {
    /// Create a new Error with only a main message from an input string.
    pub fn new<S: Into<String>>(message: S, error_type: Option<ErrorType>) -> Self {
        Self {
            message: message.into(),
            location: None,
            context: None,
            error_type: error_type.unwrap_or(ErrorType::GraphQL),
        }
    }

    /// Create a new Error with a main message and a context string from two input strings.
    pub fn new_with_context<S: Into<String>>(
        message: S,
        location: Option<Location>,
        context: S,
        error_type: Option<ErrorType>,
    ) -> Self {
        Self {
            message: message.into(),
            location,
            context: Some(context.into()),
            error_type: error_type.unwrap_or(ErrorType::GraphQL),
        }
    }

    /// Returns the message of the current error. The context is discarded.
    pub fn message(&self) -> &str {
        self.message.as_ref()
    }

    /// Returns the location of the current error.
    pub fn location(&self) -> &Option<Location> {
        &self.location
    }

    /// Returns the context of the current error, if any.
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    /// Returns whether this error is a validation failure or an internal inconsistency.
    pub fn error_type(&self) -> ErrorType {
        self.error_type
    }
}

/// A position in the source text of a document. Lines and columns start at `1`.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    #[inline]
    pub fn new(line: usize, column: usize) -> Self {
        Location { line, column }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
