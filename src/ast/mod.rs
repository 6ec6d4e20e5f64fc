//! # GraphQL Query Language AST
//!
//! The `graphql_static_validation::ast` module contains the GraphQL query language AST that
//! validation runs on. The AST is specialized to the client-side GraphQL query language that
//! clients use to make requests to a GraphQL service, and every node that can be pointed at in
//! an error carries its source [`Location`](crate::error::Location).
//! [Reference](https://spec.graphql.org/October2021/#sec-Language)
//!
//! It's easiest to use this module by importing all of it, however, its main parts are:
//! - [`ASTContext`], a context containing an arena that defines the lifetime for an AST
//! - the AST node structs, starting at the [`Document`] root node
//! - [`NodeRef`], a reference to any node that can be entered during traversal
//!
//! This crate doesn't parse source text. With the `graphql-parser` feature a document that the
//! `graphql-parser` crate produced is converted using `Document::from_parser`, otherwise the AST
//! is built directly:
//!
//! ```
//! use graphql_static_validation::{ast::*, error::Location};
//!
//! // Create an AST Context for a document
//! let ctx = ASTContext::new();
//!
//! // Build `{ user }`
//! let mut operation = OperationDefinition::new(&ctx, OperationKind::Query, None, Location::new(1, 1));
//! operation
//!     .selection_set
//!     .selections
//!     .push(Field::new_leaf(&ctx, "user", Location::new(1, 3)).into());
//!
//! let mut document = Document::default_in(&ctx.arena);
//! document.definitions.push(operation.into());
//! ```

#[allow(clippy::module_inception)]
mod ast;

mod ast_conversion;
mod ast_kind;
#[cfg(feature = "graphql-parser")]
mod from_parser;
mod node_ref;

pub use ast::*;
pub use ast_kind::ASTKind;
pub use node_ref::NodeRef;
