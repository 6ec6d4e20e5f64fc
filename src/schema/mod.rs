//! # Using Schema Definitions
//!
//! The `graphql_static_validation::schema` module contains a read-only model of a GraphQL schema:
//! its types, the fields on those types, the directives it supports, and the arguments that
//! fields and directives declare. Validation consults this model and never changes it.
//!
//! Loading a schema from SDL or introspection data is left to other libraries. A schema is put
//! together programmatically instead, with its definitions allocated on an
//! [`ASTContext`](crate::ast::ASTContext):
//!
//! ```
//! use graphql_static_validation::{ast::*, schema::*};
//!
//! let ctx = ASTContext::new();
//!
//! let mut user = SchemaField::new("user", ctx.alloc(TypeRef::Type("String")));
//! user.add_argument(SchemaInputField::new(
//!     "id",
//!     ctx.alloc(TypeRef::NonNullType(ctx.alloc(TypeRef::Type("ID")))),
//! ));
//! let mut query = SchemaObject::new("Query");
//! query.add_field(&ctx, user);
//!
//! let mut schema = Schema::new();
//! schema.set_root_type(&ctx, OperationKind::Query, ctx.alloc(query));
//! schema.add_type(&ctx, SchemaType::Scalar(ctx.alloc(SchemaScalar::new("String"))));
//! schema.add_type(&ctx, SchemaType::Scalar(ctx.alloc(SchemaScalar::new("ID"))));
//! schema.add_builtin_directives(&ctx);
//!
//! let query = schema.get_root_type(OperationKind::Query).unwrap();
//! let field = query.get_field("user").unwrap();
//! assert!(field.get_argument("id").unwrap().is_required());
//! ```
//!
//! [More information on the Schema struct.](Schema)

#[allow(clippy::module_inception)]
pub mod schema;
mod schema_reference;

pub use schema::*;
pub use schema_reference::*;
