//! `graphql_static_validation`
//! =========
//!
//! _Checking GraphQL documents against a schema before they're executed._
//!
//! The **`graphql_static_validation`** library answers one question for a GraphQL service: does a
//! client's document make sense against the service's schema? It walks a document once and runs
//! a set of validation rules on its nodes, which collect every problem they find as a
//! [`ValidationError`](validate::ValidationError) with a message, a location, and a path. An
//! empty list of errors means that the document is safe to execute.
//!
//! Validation never modifies the document or the schema. A schema may therefore be shared by any
//! number of validation runs on different threads, while each run allocates its results on its
//! own [`ASTContext`](ast::ASTContext).
//!
//! The library is split into the following modules:
//!
//! - [ast], the GraphQL query language AST that validation runs on
//! - [schema], a read-only model of the schema that documents are checked against
//! - [visit], the depth-first traversal that validation is built on
//! - [validate], the validation rules and the entry points to run them
//! - [error], the error type for runs that can't complete
//! - `json` (feature `json`), conversion of validation errors to GraphQL response errors
//!
//! Parsing isn't part of this library. With the `graphql-parser` feature, which is enabled by
//! default, documents produced by the `graphql-parser` crate are converted to this library's AST.
//!
//! ```
//! use graphql_static_validation::{ast::*, schema::*, validate::*};
//!
//! let ctx = ASTContext::new();
//! let mut user = SchemaField::new("user", ctx.alloc(TypeRef::Type("String")));
//! user.add_argument(SchemaInputField::new("id", ctx.alloc(TypeRef::Type("ID"))));
//! let mut query = SchemaObject::new("Query");
//! query.add_field(&ctx, user);
//! let mut schema = Schema::new();
//! schema.set_root_type(&ctx, OperationKind::Query, ctx.alloc(query));
//! schema.add_type(&ctx, SchemaType::Scalar(ctx.alloc(SchemaScalar::new("String"))));
//! schema.add_type(&ctx, SchemaType::Scalar(ctx.alloc(SchemaScalar::new("ID"))));
//!
//! let parsed = graphql_parser::parse_query::<&str>("{ user(id: 1, name: \"x\") }").unwrap();
//! let document = ctx.alloc(Document::from_parser(&ctx, &parsed));
//!
//! let errors = validate(&ctx, document, &schema).unwrap();
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors[0].message, "Field 'user' doesn't accept argument 'name'");
//! assert_eq!(errors[0].path, ["query", "user", "name"]);
//! ```
//!
//! [A good place to start learning more about this crate is the `validate` module...](validate)

pub mod ast;
pub mod error;
pub mod schema;
pub mod validate;
pub mod visit;

pub use bumpalo;

#[cfg(feature = "json")]
pub mod json;

#[cfg(test)]
mod fixture;
