//! # Validating GraphQL Documents against a Schema
//!
//! This module contains logic to run validation rules on GraphQL Query Language documents before
//! they're executed, checking that they conform to a [`Schema`](crate::schema::Schema). Rules
//! only read the document and the schema. What they find is collected as [`ValidationError`]s on
//! a [`ValidationContext`], and an empty list of errors means the document is safe to execute.
//!
//! The rules this module already comes with, in the order [`ValidationRules::default`] runs
//! them, are:
//!
//! - [`rules::FieldsAreDefinedOnType`]: validates that selected fields exist on their types
//! - [`rules::DirectivesAreDefined`]: validates that used directives exist in the schema
//! - [`rules::ArgumentsAreDefined`]: validates that passed arguments are declared
//! - [`rules::RequiredArgumentsArePresent`]: checks that required arguments are passed
//! - [`rules::UniqueArgumentNames`]: checks for arguments that are used to not contain duplicates
//! - [`rules::UniqueOperationNames`]: checks that no operations share the same name
//! - [`rules::LoneAnonymousOperation`]: validates that a document only contains a single anonymous operation
//! - [`rules::KnownFragmentNames`]: validates that all spread fragments are defined
//!
//! The [visit](crate::visit) module is used to actually execute validation rules. All rules run
//! in a single depth-first traversal of the document, during which every node is resolved to its
//! definition in the schema and handed to the rules that implement [`ValidationRule`] and are
//! interested in its kind. A rule may prune a node's subtree, which then isn't visited by any rule.
//! Rules that only check arguments implement the narrower [`ArgumentsValidator`] trait instead.
//!
//! For example, this is one way to run the default rules:
//!
//! ```
//! use graphql_static_validation::{ast::*, schema::*, validate::*};
//!
//! let ctx = ASTContext::new();
//! let mut query = SchemaObject::new("Query");
//! query.add_field(&ctx, SchemaField::new("hello", ctx.alloc(TypeRef::Type("String"))));
//! let mut schema = Schema::new();
//! schema.set_root_type(&ctx, OperationKind::Query, ctx.alloc(query));
//! schema.add_type(&ctx, SchemaType::Scalar(ctx.alloc(SchemaScalar::new("String"))));
//!
//! let parsed = graphql_parser::parse_query::<&str>("{ hello(name: \"World\") }").unwrap();
//! let document = ctx.alloc(Document::from_parser(&ctx, &parsed));
//!
//! let errors = validate(&ctx, document, &schema).unwrap();
//! assert_eq!(errors[0].message, "Field 'hello' doesn't accept argument 'name'");
//! ```
//!
//! Another way is to utilize the [`ValidateNode`] trait instead to run validation starting from an
//! AST Node, which folds all errors into a single [`Error`](crate::error::Error):
//!
//! ```
//! # use graphql_static_validation::{ast::*, schema::*, validate::*};
//! # let ctx = ASTContext::new();
//! # let mut query = SchemaObject::new("Query");
//! # query.add_field(&ctx, SchemaField::new("hello", ctx.alloc(TypeRef::Type("String"))));
//! # let mut schema = Schema::new();
//! # schema.set_root_type(&ctx, OperationKind::Query, ctx.alloc(query));
//! # schema.add_type(&ctx, SchemaType::Scalar(ctx.alloc(SchemaScalar::new("String"))));
//! let parsed = graphql_parser::parse_query::<&str>("{ hello }").unwrap();
//! let document = ctx.alloc(Document::from_parser(&ctx, &parsed));
//!
//! document.validate(&ctx, &schema).unwrap();
//! ```

#[allow(clippy::module_inception)]
mod validate;

mod arguments_validator;
mod context;
mod rule_visitor;

pub mod rules;
pub use arguments_validator::*;
pub use context::{ValidationContext, ValidationError};
pub use validate::*;
