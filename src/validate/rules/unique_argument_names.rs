use super::super::{ValidationContext, ValidationRule};
use crate::{ast::*, schema::*, visit::*};

/// Validates that no field or directive is passed the same argument more than once.
///
/// Each repeated name is reported once, on its second occurrence.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Argument-Uniqueness)
#[derive(Default)]
pub struct UniqueArgumentNames;

impl<'a> ValidationRule<'a> for UniqueArgumentNames {
    fn interests(&self) -> &'static [ASTKind] {
        &[ASTKind::Argument]
    }

    fn enter(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        parent: Option<NodeRef<'a>>,
        node: NodeRef<'a>,
        _defn: Option<DefinitionRef<'a>>,
    ) -> VisitFlow {
        let (NodeRef::Argument(argument), Some(arguments)) =
            (node, parent.and_then(|parent| parent.arguments()))
        else {
            return VisitFlow::Next;
        };
        let earlier = arguments
            .children
            .iter()
            .take_while(|sibling| !std::ptr::eq(*sibling, argument))
            .filter(|sibling| sibling.name == argument.name)
            .count();
        if earlier == 1 {
            ctx.add_error(
                format!("There can be only one argument named '{}'", argument.name),
                node,
            );
        }
        VisitFlow::Next
    }
}
