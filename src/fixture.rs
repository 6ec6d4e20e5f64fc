//! A small schema and document helpers shared by this crate's tests.
//!
//! ```graphql
//! type Query {
//!   user(id: ID!): User
//!   users(first: Int = 10, filter: UserFilter): [User!]!
//!   search(term: String!): [SearchResult!]!
//!   node: Node
//! }
//!
//! type Mutation {
//!   rename(id: ID!, name: String!): User
//! }
//!
//! interface Node { id: ID! }
//!
//! type User implements Node {
//!   id: ID!
//!   name(format: NameFormat): String
//!   friends(first: Int): [User!]!
//! }
//!
//! union SearchResult = User
//! enum NameFormat { SHORT, FULL }
//! input UserFilter { name: String }
//! ```

use crate::ast::{ASTContext, Document, OperationKind};
use crate::schema::*;
use crate::validate::{ValidationRule, ValidationRules};

fn named<'a>(ctx: &'a ASTContext, name: &'a str) -> &'a TypeRef<'a> {
    ctx.alloc(TypeRef::Type(name))
}

fn non_null<'a>(ctx: &'a ASTContext, name: &'a str) -> &'a TypeRef<'a> {
    ctx.alloc(TypeRef::NonNullType(named(ctx, name)))
}

fn list_of_non_null<'a>(ctx: &'a ASTContext, name: &'a str) -> &'a TypeRef<'a> {
    ctx.alloc(TypeRef::NonNullType(
        ctx.alloc(TypeRef::ListType(non_null(ctx, name))),
    ))
}

pub(crate) fn build_schema(ctx: &ASTContext) -> Schema<'_> {
    let mut schema = Schema::new();

    let mut query = SchemaObject::new("Query");
    let mut user = SchemaField::new("user", named(ctx, "User"));
    user.add_argument(SchemaInputField::new("id", non_null(ctx, "ID")));
    query.add_field(ctx, user);
    let mut users = SchemaField::new("users", list_of_non_null(ctx, "User"));
    users.add_argument(SchemaInputField::new("first", named(ctx, "Int")).with_default("10"));
    users.add_argument(SchemaInputField::new("filter", named(ctx, "UserFilter")));
    query.add_field(ctx, users);
    let mut search = SchemaField::new("search", list_of_non_null(ctx, "SearchResult"));
    search.add_argument(SchemaInputField::new("term", non_null(ctx, "String")));
    query.add_field(ctx, search);
    query.add_field(ctx, SchemaField::new("node", named(ctx, "Node")));
    schema.set_root_type(ctx, OperationKind::Query, ctx.alloc(query));

    let mut mutation = SchemaObject::new("Mutation");
    let mut rename = SchemaField::new("rename", named(ctx, "User"));
    rename.add_argument(SchemaInputField::new("id", non_null(ctx, "ID")));
    rename.add_argument(SchemaInputField::new("name", non_null(ctx, "String")));
    mutation.add_field(ctx, rename);
    schema.set_root_type(ctx, OperationKind::Mutation, ctx.alloc(mutation));

    let mut node = SchemaInterface::new("Node");
    node.add_field(ctx, SchemaField::new("id", non_null(ctx, "ID")));
    schema.add_type(ctx, SchemaType::Interface(ctx.alloc(node)));

    let mut user = SchemaObject::new("User");
    user.add_field(ctx, SchemaField::new("id", non_null(ctx, "ID")));
    let mut name = SchemaField::new("name", named(ctx, "String"));
    name.add_argument(SchemaInputField::new("format", named(ctx, "NameFormat")));
    user.add_field(ctx, name);
    let mut friends = SchemaField::new("friends", list_of_non_null(ctx, "User"));
    friends.add_argument(SchemaInputField::new("first", named(ctx, "Int")));
    user.add_field(ctx, friends);
    schema.add_type(ctx, SchemaType::Object(ctx.alloc(user)));

    let search_result = SchemaUnion::new("SearchResult");
    schema.add_type(ctx, SchemaType::Union(ctx.alloc(search_result)));

    let mut name_format = SchemaEnum::new("NameFormat");
    name_format.add_value("SHORT");
    name_format.add_value("FULL");
    schema.add_type(ctx, SchemaType::Enum(ctx.alloc(name_format)));

    let mut user_filter = SchemaInputObject::new("UserFilter");
    user_filter.add_field(SchemaInputField::new("name", named(ctx, "String")));
    schema.add_type(ctx, SchemaType::InputObject(ctx.alloc(user_filter)));

    for scalar in ["ID", "Int", "String", "Boolean"] {
        schema.add_type(ctx, SchemaType::Scalar(ctx.alloc(SchemaScalar::new(scalar))));
    }
    schema.add_builtin_directives(ctx);
    schema
}

pub(crate) fn parse<'a>(ctx: &'a ASTContext, source: &str) -> &'a Document<'a> {
    let parsed = graphql_parser::parse_query::<&str>(source).unwrap();
    ctx.alloc(Document::from_parser(ctx, &parsed))
}

/// Runs a single rule on a document against the shared schema and returns the messages of all
/// errors it added.
pub(crate) fn messages<'a, R: ValidationRule<'a> + 'a>(
    ctx: &'a ASTContext,
    rule: R,
    source: &str,
) -> Vec<&'a str> {
    let schema = ctx.alloc(build_schema(ctx));
    let document = parse(ctx, source);
    ValidationRules::new()
        .with(rule)
        .validate(ctx, document, schema)
        .unwrap()
        .iter()
        .map(|error| error.message)
        .collect()
}
