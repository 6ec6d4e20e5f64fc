use super::super::{ValidationContext, ValidationRule};
use crate::{ast::*, schema::*, visit::*};

/// Validate that every field that's selected is defined on the type it's selected on, and that
/// the schema supports the kind of each operation.
///
/// Fields on types that the schema doesn't know aren't checked, since the unknown type itself is
/// the problem. The same goes for selections of an operation the schema has no root type for,
/// which is reported once and then walked without checking its fields. `__typename` may be selected on any type. A field that isn't defined is skipped
/// over together with its arguments and selections.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Field-Selections)
#[derive(Default)]
pub struct FieldsAreDefinedOnType;

impl<'a> ValidationRule<'a> for FieldsAreDefinedOnType {
    fn interests(&self) -> &'static [ASTKind] {
        &[ASTKind::OperationDefinition, ASTKind::Field]
    }

    fn enter(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        _parent: Option<NodeRef<'a>>,
        node: NodeRef<'a>,
        defn: Option<DefinitionRef<'a>>,
    ) -> VisitFlow {
        match node {
            NodeRef::Operation(operation) if defn.is_none() => {
                ctx.add_error(
                    format!(
                        "Schema is not configured for {}s",
                        operation.operation.as_str()
                    ),
                    node,
                );
                VisitFlow::Next
            }
            NodeRef::Field(field) if defn.is_none() && field.name != "__typename" => {
                match ctx.parent_type() {
                    Some(OutputType::Union(union)) => {
                        ctx.add_error(
                            format!(
                                "Selections can't be made directly on unions (see selections on {})",
                                union.name
                            ),
                            node,
                        );
                        VisitFlow::Skip
                    }
                    Some(parent_type) => {
                        ctx.add_error(
                            format!(
                                "Field '{}' doesn't exist on type '{}'",
                                field.name,
                                parent_type.name()
                            ),
                            node,
                        );
                        VisitFlow::Skip
                    }
                    None => VisitFlow::Next,
                }
            }
            _ => VisitFlow::Next,
        }
    }
}
