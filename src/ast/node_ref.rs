use super::{ast::*, ASTKind};
use crate::error::Location;
use std::iter;

/// A reference to any AST node that a traversal enters.
///
/// `NodeRef` erases the concrete node type while keeping it recoverable by matching, which lets
/// visitors and validation rules handle nodes uniformly: each node exposes its [`ASTKind`], its
/// name where it has one, its source location, and its child nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeRef<'a> {
    Document(&'a Document<'a>),
    Operation(&'a OperationDefinition<'a>),
    Fragment(&'a FragmentDefinition<'a>),
    VariableDefinition(&'a VariableDefinition<'a>),
    SelectionSet(&'a SelectionSet<'a>),
    Field(&'a Field<'a>),
    FragmentSpread(&'a FragmentSpread<'a>),
    InlineFragment(&'a InlineFragment<'a>),
    Directive(&'a Directive<'a>),
    Argument(&'a Argument<'a>),
    ObjectField(&'a ObjectField<'a>),
    Variable(&'a Variable<'a>),
}

impl<'a> NodeRef<'a> {
    #[inline]
    pub fn kind(&self) -> ASTKind {
        match self {
            NodeRef::Document(_) => ASTKind::Document,
            NodeRef::Operation(_) => ASTKind::OperationDefinition,
            NodeRef::Fragment(_) => ASTKind::FragmentDefinition,
            NodeRef::VariableDefinition(_) => ASTKind::VariableDefinition,
            NodeRef::SelectionSet(_) => ASTKind::SelectionSet,
            NodeRef::Field(_) => ASTKind::Field,
            NodeRef::FragmentSpread(_) => ASTKind::FragmentSpread,
            NodeRef::InlineFragment(_) => ASTKind::InlineFragment,
            NodeRef::Directive(_) => ASTKind::Directive,
            NodeRef::Argument(_) => ASTKind::Argument,
            NodeRef::ObjectField(_) => ASTKind::ObjectField,
            NodeRef::Variable(_) => ASTKind::Variable,
        }
    }

    /// Returns the node's name, if its kind has one.
    ///
    /// Fields return their name rather than their alias, fragment spreads and inline fragments
    /// return the fragment name or type condition they refer to.
    pub fn name(&self) -> Option<&'a str> {
        match *self {
            NodeRef::Document(_) | NodeRef::SelectionSet(_) => None,
            NodeRef::Operation(operation) => operation.name.map(|name| name.name),
            NodeRef::Fragment(fragment) => Some(fragment.name.name),
            NodeRef::VariableDefinition(var_def) => Some(var_def.variable.name),
            NodeRef::Field(field) => Some(field.name),
            NodeRef::FragmentSpread(spread) => Some(spread.name.name),
            NodeRef::InlineFragment(fragment) => fragment.type_condition.map(|name| name.name),
            NodeRef::Directive(directive) => Some(directive.name),
            NodeRef::Argument(argument) => Some(argument.name),
            NodeRef::ObjectField(field) => Some(field.name),
            NodeRef::Variable(variable) => Some(variable.name),
        }
    }

    /// Returns the node's source location. Documents and selection sets don't carry one.
    pub fn location(&self) -> Option<Location> {
        match *self {
            NodeRef::Document(_) | NodeRef::SelectionSet(_) => None,
            NodeRef::Operation(operation) => Some(operation.location),
            NodeRef::Fragment(fragment) => Some(fragment.location),
            NodeRef::VariableDefinition(var_def) => Some(var_def.location),
            NodeRef::Field(field) => Some(field.location),
            NodeRef::FragmentSpread(spread) => Some(spread.location),
            NodeRef::InlineFragment(fragment) => Some(fragment.location),
            NodeRef::Directive(directive) => Some(directive.location),
            NodeRef::Argument(argument) => Some(argument.location),
            NodeRef::ObjectField(field) => Some(field.location),
            NodeRef::Variable(variable) => Some(variable.location),
        }
    }

    /// Returns the node's arguments, if its kind accepts any.
    #[inline]
    pub fn arguments(&self) -> Option<&'a Arguments<'a>> {
        match *self {
            NodeRef::Field(field) => Some(&field.arguments),
            NodeRef::Directive(directive) => Some(&directive.arguments),
            _ => None,
        }
    }

    /// Returns a lazy iterator over the node's children in source order.
    ///
    /// The iterator borrows from the AST only, so it may be created any number of times. Children
    /// are, per kind:
    /// - Document: its definitions
    /// - Operation: variable definitions, directives, and its selection set
    /// - Fragment, InlineFragment: directives and the selection set
    /// - VariableDefinition, FragmentSpread: directives
    /// - SelectionSet: its selections
    /// - Field: arguments, directives, and its selection set unless the field is a leaf
    /// - Directive: arguments
    /// - Argument, ObjectField: the variables and object fields inside the value, looking through
    ///   lists
    ///
    /// Documents converted from `graphql-parser` are the exception for object values, whose fields
    /// come out sorted by name with repeated names collapsed to the last one, since that parser
    /// keeps them in a `BTreeMap`.
    pub fn children(&self) -> Box<dyn Iterator<Item = NodeRef<'a>> + 'a> {
        match *self {
            NodeRef::Document(document) => {
                Box::new(document.definitions.iter().map(|definition| match definition {
                    Definition::Operation(operation) => NodeRef::Operation(operation),
                    Definition::Fragment(fragment) => NodeRef::Fragment(fragment),
                }))
            }
            NodeRef::Operation(operation) => Box::new(
                operation
                    .variable_definitions
                    .children
                    .iter()
                    .map(NodeRef::VariableDefinition)
                    .chain(directives(&operation.directives))
                    .chain(iter::once(NodeRef::SelectionSet(&operation.selection_set))),
            ),
            NodeRef::Fragment(fragment) => Box::new(
                directives(&fragment.directives)
                    .chain(iter::once(NodeRef::SelectionSet(&fragment.selection_set))),
            ),
            NodeRef::VariableDefinition(var_def) => Box::new(directives(&var_def.directives)),
            NodeRef::SelectionSet(selection_set) => {
                Box::new(selection_set.selections.iter().map(|selection| match selection {
                    Selection::Field(field) => NodeRef::Field(field),
                    Selection::FragmentSpread(spread) => NodeRef::FragmentSpread(spread),
                    Selection::InlineFragment(fragment) => NodeRef::InlineFragment(fragment),
                }))
            }
            NodeRef::Field(field) => {
                let selection_set = if field.selection_set.is_empty() {
                    None
                } else {
                    Some(NodeRef::SelectionSet(&field.selection_set))
                };
                Box::new(
                    field
                        .arguments
                        .children
                        .iter()
                        .map(NodeRef::Argument)
                        .chain(directives(&field.directives))
                        .chain(selection_set),
                )
            }
            NodeRef::FragmentSpread(spread) => Box::new(directives(&spread.directives)),
            NodeRef::InlineFragment(fragment) => Box::new(
                directives(&fragment.directives)
                    .chain(iter::once(NodeRef::SelectionSet(&fragment.selection_set))),
            ),
            NodeRef::Directive(directive) => {
                Box::new(directive.arguments.children.iter().map(NodeRef::Argument))
            }
            NodeRef::Argument(argument) => value_children(&argument.value),
            NodeRef::ObjectField(field) => value_children(&field.value),
            NodeRef::Variable(_) => Box::new(iter::empty()),
        }
    }
}

#[inline]
fn directives<'a>(directives: &'a Directives<'a>) -> impl Iterator<Item = NodeRef<'a>> + 'a {
    directives.children.iter().map(NodeRef::Directive)
}

fn value_children<'a>(value: &'a Value<'a>) -> Box<dyn Iterator<Item = NodeRef<'a>> + 'a> {
    match value {
        Value::Variable(variable) => Box::new(iter::once(NodeRef::Variable(variable))),
        Value::Object(object) => Box::new(object.children.iter().map(NodeRef::ObjectField)),
        Value::List(list) => Box::new(list.children.iter().flat_map(value_children)),
        _ => Box::new(iter::empty()),
    }
}

macro_rules! node_ref_from {
    ($($node:ident => $variant:ident),+ $(,)?) => {
        $(
            impl<'a> From<&'a $node<'a>> for NodeRef<'a> {
                #[inline]
                fn from(node: &'a $node<'a>) -> Self {
                    NodeRef::$variant(node)
                }
            }
        )+
    };
}

node_ref_from!(
    Document => Document,
    OperationDefinition => Operation,
    FragmentDefinition => Fragment,
    VariableDefinition => VariableDefinition,
    SelectionSet => SelectionSet,
    Field => Field,
    FragmentSpread => FragmentSpread,
    InlineFragment => InlineFragment,
    Directive => Directive,
    Argument => Argument,
    ObjectField => ObjectField,
    Variable => Variable,
);

#[cfg(test)]
mod tests {
    use super::*;

    fn names(node: NodeRef<'_>) -> Vec<(ASTKind, Option<&str>)> {
        node.children()
            .map(|child| (child.kind(), child.name()))
            .collect()
    }

    #[test]
    fn field_children_in_order() {
        let ctx = ASTContext::new();
        let mut field = Field::new_leaf(&ctx, "user", Location::new(1, 3));
        let mut object = ObjectValue::default_in(&ctx.arena);
        object.children.push(ObjectField {
            name: "name",
            value: Value::Variable(Variable {
                name: "name",
                location: Location::new(1, 24),
            }),
            location: Location::new(1, 18),
        });
        let mut list = ListValue::default_in(&ctx.arena);
        list.children.push(Value::Object(object));
        field.arguments.children.push(Argument::new(
            "filter",
            Value::List(list),
            Location::new(1, 8),
        ));
        field
            .directives
            .children
            .push(Directive::new(&ctx, "include", Location::new(1, 32)));

        let node = NodeRef::from(&field);
        assert_eq!(node.kind(), ASTKind::Field);
        assert_eq!(node.location(), Some(Location::new(1, 3)));
        assert_eq!(
            names(node),
            [
                (ASTKind::Argument, Some("filter")),
                (ASTKind::Directive, Some("include")),
            ]
        );

        let argument = node.children().next().unwrap();
        let object_field = argument.children().next().unwrap();
        assert_eq!(object_field.kind(), ASTKind::ObjectField);
        assert_eq!(object_field.location(), Some(Location::new(1, 18)));
        assert_eq!(names(object_field), [(ASTKind::Variable, Some("name"))]);

        // Children can be walked again
        assert_eq!(node.children().count(), 2);
    }

    #[test]
    fn operation_children_in_order() {
        let ctx = ASTContext::new();
        let mut operation =
            OperationDefinition::new(&ctx, OperationKind::Query, Some("Q"), Location::new(1, 1));
        operation.variable_definitions.children.push(VariableDefinition {
            variable: Variable {
                name: "id",
                location: Location::new(1, 9),
            },
            of_type: Type::NamedType(NamedType { name: "ID" }),
            default_value: Value::Null,
            directives: Directives::default_in(&ctx.arena),
            location: Location::new(1, 9),
        });
        operation
            .selection_set
            .selections
            .push(Field::new_leaf(&ctx, "me", Location::new(1, 20)).into());

        let node = NodeRef::from(&operation);
        assert_eq!(node.name(), Some("Q"));
        assert_eq!(
            names(node),
            [
                (ASTKind::VariableDefinition, Some("id")),
                (ASTKind::SelectionSet, None),
            ]
        );

        let selection_set = node.children().last().unwrap();
        assert_eq!(selection_set.location(), None);
        assert_eq!(names(selection_set), [(ASTKind::Field, Some("me"))]);

        // Leaf fields have no selection set child
        let field = selection_set.children().next().unwrap();
        assert_eq!(field.children().count(), 0);
    }
}
