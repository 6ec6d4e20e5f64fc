//! Conversion from the `graphql-parser` crate's query AST.
//!
//! `graphql-parser` only records positions on definitions, selections, variable definitions, and
//! directives. Arguments, object fields, and variables inside values take the position of the
//! field or directive that owns them.
//!
//! Object values are kept in a `BTreeMap` by `graphql-parser`, so their fields are converted
//! sorted by name, and of a name that's repeated only the last value remains.

use super::ast::*;
use crate::error::Location;
use bumpalo::collections::Vec;
use graphql_parser::query as gql;
use graphql_parser::Pos;

impl From<Pos> for Location {
    #[inline]
    fn from(pos: Pos) -> Self {
        Location::new(pos.line, pos.column)
    }
}

impl<'a> Document<'a> {
    /// Converts a document produced by [`graphql_parser::parse_query`] into an AST allocated on
    /// the passed AST Context.
    ///
    /// ```
    /// use graphql_static_validation::ast::*;
    ///
    /// let ctx = ASTContext::new();
    /// let parsed = graphql_parser::parse_query::<&str>("{ user(id: 1) { name } }").unwrap();
    /// let document = Document::from_parser(&ctx, &parsed);
    /// assert_eq!(document.definitions.len(), 1);
    /// ```
    pub fn from_parser<'b, T: gql::Text<'b>>(
        ctx: &'a ASTContext,
        document: &gql::Document<'b, T>,
    ) -> Self {
        let mut definitions = Vec::with_capacity_in(document.definitions.len(), &ctx.arena);
        for definition in document.definitions.iter() {
            definitions.push(match definition {
                gql::Definition::Operation(operation) => {
                    Definition::Operation(convert_operation(ctx, operation))
                }
                gql::Definition::Fragment(fragment) => {
                    Definition::Fragment(convert_fragment(ctx, fragment))
                }
            });
        }
        Document { definitions }
    }
}

#[inline]
fn text<'a, 'b, T: gql::Text<'b>>(ctx: &'a ASTContext, value: &T::Value) -> &'a str {
    ctx.alloc_str(value.as_ref())
}

fn convert_operation<'a, 'b, T: gql::Text<'b>>(
    ctx: &'a ASTContext,
    operation: &gql::OperationDefinition<'b, T>,
) -> OperationDefinition<'a> {
    let (kind, position, name, variable_definitions, directives, selection_set) = match operation
    {
        gql::OperationDefinition::SelectionSet(selection_set) => {
            let mut operation = OperationDefinition::new(
                ctx,
                OperationKind::Query,
                None,
                selection_set.span.0.into(),
            );
            operation.selection_set = convert_selection_set(ctx, selection_set);
            return operation;
        }
        gql::OperationDefinition::Query(query) => (
            OperationKind::Query,
            query.position,
            &query.name,
            &query.variable_definitions,
            &query.directives,
            &query.selection_set,
        ),
        gql::OperationDefinition::Mutation(mutation) => (
            OperationKind::Mutation,
            mutation.position,
            &mutation.name,
            &mutation.variable_definitions,
            &mutation.directives,
            &mutation.selection_set,
        ),
        gql::OperationDefinition::Subscription(subscription) => (
            OperationKind::Subscription,
            subscription.position,
            &subscription.name,
            &subscription.variable_definitions,
            &subscription.directives,
            &subscription.selection_set,
        ),
    };

    let mut children = Vec::with_capacity_in(variable_definitions.len(), &ctx.arena);
    for var_def in variable_definitions.iter() {
        children.push(convert_variable_definition(ctx, var_def));
    }

    OperationDefinition {
        operation: kind,
        name: name.as_ref().map(|name| NamedType {
            name: text::<T>(ctx, name),
        }),
        variable_definitions: VariableDefinitions { children },
        directives: convert_directives(ctx, directives),
        selection_set: convert_selection_set(ctx, selection_set),
        location: position.into(),
    }
}

fn convert_fragment<'a, 'b, T: gql::Text<'b>>(
    ctx: &'a ASTContext,
    fragment: &gql::FragmentDefinition<'b, T>,
) -> FragmentDefinition<'a> {
    let gql::TypeCondition::On(type_condition) = &fragment.type_condition;
    FragmentDefinition {
        name: NamedType {
            name: text::<T>(ctx, &fragment.name),
        },
        type_condition: NamedType {
            name: text::<T>(ctx, type_condition),
        },
        directives: convert_directives(ctx, &fragment.directives),
        selection_set: convert_selection_set(ctx, &fragment.selection_set),
        location: fragment.position.into(),
    }
}

fn convert_variable_definition<'a, 'b, T: gql::Text<'b>>(
    ctx: &'a ASTContext,
    var_def: &gql::VariableDefinition<'b, T>,
) -> VariableDefinition<'a> {
    let location: Location = var_def.position.into();
    VariableDefinition {
        variable: Variable {
            name: text::<T>(ctx, &var_def.name),
            location,
        },
        of_type: convert_type(ctx, &var_def.var_type),
        default_value: var_def
            .default_value
            .as_ref()
            .map_or(Value::Null, |value| convert_value(ctx, value, location)),
        directives: Directives::default_in(&ctx.arena),
        location,
    }
}

fn convert_type<'a, 'b, T: gql::Text<'b>>(
    ctx: &'a ASTContext,
    of_type: &gql::Type<'b, T>,
) -> Type<'a> {
    match of_type {
        gql::Type::NamedType(name) => Type::NamedType(NamedType {
            name: text::<T>(ctx, name),
        }),
        gql::Type::ListType(inner) => Type::ListType(ctx.alloc(convert_type(ctx, inner))),
        gql::Type::NonNullType(inner) => Type::NonNullType(ctx.alloc(convert_type(ctx, inner))),
    }
}

fn convert_selection_set<'a, 'b, T: gql::Text<'b>>(
    ctx: &'a ASTContext,
    selection_set: &gql::SelectionSet<'b, T>,
) -> SelectionSet<'a> {
    let mut selections = Vec::with_capacity_in(selection_set.items.len(), &ctx.arena);
    for selection in selection_set.items.iter() {
        selections.push(match selection {
            gql::Selection::Field(field) => Selection::Field(Field {
                alias: field.alias.as_ref().map(|alias| text::<T>(ctx, alias)),
                name: text::<T>(ctx, &field.name),
                arguments: convert_arguments(ctx, &field.arguments, field.position.into()),
                directives: convert_directives(ctx, &field.directives),
                selection_set: convert_selection_set(ctx, &field.selection_set),
                location: field.position.into(),
            }),
            gql::Selection::FragmentSpread(spread) => Selection::FragmentSpread(FragmentSpread {
                name: NamedType {
                    name: text::<T>(ctx, &spread.fragment_name),
                },
                directives: convert_directives(ctx, &spread.directives),
                location: spread.position.into(),
            }),
            gql::Selection::InlineFragment(fragment) => {
                Selection::InlineFragment(InlineFragment {
                    type_condition: fragment.type_condition.as_ref().map(
                        |gql::TypeCondition::On(name)| NamedType {
                            name: text::<T>(ctx, name),
                        },
                    ),
                    directives: convert_directives(ctx, &fragment.directives),
                    selection_set: convert_selection_set(ctx, &fragment.selection_set),
                    location: fragment.position.into(),
                })
            }
        });
    }
    SelectionSet { selections }
}

fn convert_directives<'a, 'b, T: gql::Text<'b>>(
    ctx: &'a ASTContext,
    directives: &[gql::Directive<'b, T>],
) -> Directives<'a> {
    let mut children = Vec::with_capacity_in(directives.len(), &ctx.arena);
    for directive in directives.iter() {
        children.push(Directive {
            name: text::<T>(ctx, &directive.name),
            arguments: convert_arguments(ctx, &directive.arguments, directive.position.into()),
            location: directive.position.into(),
        });
    }
    Directives { children }
}

fn convert_arguments<'a, 'b, T: gql::Text<'b>>(
    ctx: &'a ASTContext,
    arguments: &[(T::Value, gql::Value<'b, T>)],
    location: Location,
) -> Arguments<'a> {
    let mut children = Vec::with_capacity_in(arguments.len(), &ctx.arena);
    for (name, value) in arguments.iter() {
        children.push(Argument {
            name: text::<T>(ctx, name),
            value: convert_value(ctx, value, location),
            location,
        });
    }
    Arguments { children }
}

fn convert_value<'a, 'b, T: gql::Text<'b>>(
    ctx: &'a ASTContext,
    value: &gql::Value<'b, T>,
    location: Location,
) -> Value<'a> {
    match value {
        gql::Value::Variable(name) => Value::Variable(Variable {
            name: text::<T>(ctx, name),
            location,
        }),
        gql::Value::Int(number) => Value::Int(IntValue {
            value: ctx.alloc_string(number.as_i64().unwrap_or_default().to_string()),
        }),
        gql::Value::Float(float) => Value::Float(FloatValue {
            value: ctx.alloc_string(float.to_string()),
        }),
        gql::Value::String(string) => Value::String(StringValue::new(ctx, string)),
        gql::Value::Boolean(value) => Value::Boolean(BooleanValue { value: *value }),
        gql::Value::Null => Value::Null,
        gql::Value::Enum(name) => Value::Enum(EnumValue {
            value: text::<T>(ctx, name),
        }),
        gql::Value::List(items) => {
            let mut children = Vec::with_capacity_in(items.len(), &ctx.arena);
            for item in items.iter() {
                children.push(convert_value(ctx, item, location));
            }
            Value::List(ListValue { children })
        }
        gql::Value::Object(fields) => {
            let mut children = Vec::with_capacity_in(fields.len(), &ctx.arena);
            for (name, value) in fields.iter() {
                children.push(ObjectField {
                    name: text::<T>(ctx, name),
                    value: convert_value(ctx, value, location),
                    location,
                });
            }
            Value::Object(ObjectValue { children })
        }
    }
}
