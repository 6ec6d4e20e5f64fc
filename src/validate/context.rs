use bumpalo::collections::Vec;
use bumpalo::Bump;
use std::fmt;
use tracing::{trace, warn};

use crate::ast::{ASTContext, Document, NodeRef};
use crate::error::{Error, ErrorType, Location, Result};
use crate::schema::{OutputType, Schema, SchemaReference};

/// A single finding of a validation run.
///
/// Errors carry a message, the location of the node that they were reported on, and the path of
/// that node from the document root. Path segments name the operation or fragment (e.g.
/// `"query Name"`, `"fragment Name"`), fields by their alias or name, directives prefixed with
/// `@`, and arguments by their name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationError<'a> {
    pub message: &'a str,
    pub location: Option<Location>,
    pub path: &'a [&'a str],
}

impl<'a> fmt::Display for ValidationError<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.location {
            Some(location) => write!(f, "{} ({})", self.message, location),
            None => f.write_str(self.message),
        }
    }
}

/// The `ValidationContext` carrying a reference to the AST Context's arena, the schema and
/// document that are being validated, and a list of errors.
///
/// New errors are added to the list as validation continues to issue error messages if validation
/// has failed on a document. Errors are kept in the order they were added and are never removed.
/// The context also tracks where the traversal currently is, which is used to attach a path to
/// errors and to give rules access to the type that the current selection set is operating on.
pub struct ValidationContext<'a> {
    pub arena: &'a Bump,
    schema: &'a Schema<'a>,
    document: &'a Document<'a>,
    errors: Vec<'a, ValidationError<'a>>,
    pub(crate) path: std::vec::Vec<&'a str>,
    pub(crate) types: SchemaReference<'a>,
    failure: Option<Error>,
}

impl<'a> ValidationContext<'a> {
    /// Create a new `ValidationContext` given an AST Context, a document, and the schema it's
    /// validated against.
    pub fn new(ctx: &'a ASTContext, document: &'a Document<'a>, schema: &'a Schema<'a>) -> Self {
        ValidationContext {
            arena: &ctx.arena,
            schema,
            document,
            errors: Vec::new_in(&ctx.arena),
            path: std::vec::Vec::with_capacity(16),
            types: SchemaReference::new(schema),
            failure: None,
        }
    }

    #[inline]
    pub fn schema(&self) -> &'a Schema<'a> {
        self.schema
    }

    #[inline]
    pub fn document(&self) -> &'a Document<'a> {
        self.document
    }

    /// Returns the type that the current selection set is operating on, if it's known.
    ///
    /// While a field is entered this is the type that the field is selected on, not the type the
    /// field returns.
    #[inline]
    pub fn parent_type(&self) -> Option<OutputType<'a>> {
        self.types.output_type()
    }

    /// Returns the path of the node that's currently being visited.
    #[inline]
    pub fn path(&self) -> &[&'a str] {
        &self.path
    }

    /// Returns all errors that have been added so far, in the order they were added.
    #[inline]
    pub fn errors(&self) -> &[ValidationError<'a>] {
        &self.errors
    }

    /// Add an error to the list of errors in the `ValidationContext`.
    ///
    /// This is called inside of validation rules to add an error about the given node, which is
    /// typically the node that the rule is inspecting. The error's location is taken from the
    /// node and its path from the current position of the traversal.
    pub fn add_error<S: AsRef<str>>(&mut self, message: S, node: NodeRef<'a>) {
        let path = self.arena.alloc_slice_copy(&self.path);
        self.push_error(message.as_ref(), node.location(), path);
    }

    /// Add an error with an explicit location and path to the list of errors.
    pub fn record_error<S: AsRef<str>>(
        &mut self,
        message: S,
        location: Option<Location>,
        path: &[&'a str],
    ) {
        let path = self.arena.alloc_slice_copy(path);
        self.push_error(message.as_ref(), location, path);
    }

    fn push_error(&mut self, message: &str, location: Option<Location>, path: &'a [&'a str]) {
        trace!(message, ?location, ?path, "validation error");
        self.errors.push(ValidationError {
            message: self.arena.alloc_str(message),
            location,
            path,
        });
    }

    /// Abort the validation run with an internal error.
    ///
    /// This is used when the document or schema turn out to be inconsistent in a way that the
    /// parser or schema builder should have prevented. Only the first error is kept.
    pub fn fail(&mut self, error: Error) {
        if self.failure.is_none() {
            warn!(%error, "validation aborted");
            self.failure = Some(error);
        }
    }

    /// Whether the validation run has been aborted.
    #[inline]
    pub fn has_failed(&self) -> bool {
        self.failure.is_some()
    }

    /// Convert the context into the list of errors it collected, or into the internal error that
    /// aborted the run.
    pub fn into_errors(self) -> Result<Vec<'a, ValidationError<'a>>> {
        match self.failure {
            Some(error) => Err(error),
            None => Ok(self.errors),
        }
    }

    /// Convert the context into a result which carries an error if validation has failed on the
    /// current document.
    ///
    /// All collected errors are folded into the context of a single [Error], one per line.
    pub fn to_result(self) -> Result<()> {
        let errors = self.into_errors()?;
        if errors.is_empty() {
            Ok(())
        } else {
            let mut context = String::new();
            let mut is_first = true;
            for error in errors.iter() {
                if is_first {
                    is_first = false;
                } else {
                    context.push('\n');
                }
                context.push_str("- ");
                context.push_str(&error.to_string());
            }
            Err(Error::new_with_context(
                String::from("Document failed validation"),
                errors[0].location,
                context,
                Some(ErrorType::GraphQL),
            ))
        }
    }
}
