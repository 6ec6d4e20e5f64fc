use super::super::{ValidationContext, ValidationRule};
use crate::{ast::*, schema::*, visit::*};
use hashbrown::HashSet;

/// Validates that no operation the document defines have duplicate names.
/// Note: Operations and Fragments are allowed to share names.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Operation-Name-Uniqueness)
#[derive(Default)]
pub struct UniqueOperationNames<'a> {
    used_operation_names: HashSet<&'a str>,
}

impl<'a> ValidationRule<'a> for UniqueOperationNames<'a> {
    fn interests(&self) -> &'static [ASTKind] {
        &[ASTKind::OperationDefinition]
    }

    fn enter(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        _parent: Option<NodeRef<'a>>,
        node: NodeRef<'a>,
        _defn: Option<DefinitionRef<'a>>,
    ) -> VisitFlow {
        if let NodeRef::Operation(OperationDefinition {
            name: Some(name), ..
        }) = node
        {
            if !self.used_operation_names.insert(name.name) {
                ctx.add_error(format!("Operation name '{}' must be unique", name.name), node);
            }
        }
        VisitFlow::Next
    }
}
