use super::super::{ArgumentOwner, ValidationContext, ValidationRule};
use crate::{ast::*, schema::*, visit::*};

/// Validate that fields and directives are passed all of their required arguments.
///
/// An argument is required when its type is non-null and it has no default value. The missing
/// arguments of a field or directive are reported together, sorted by name.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Required-Arguments)
#[derive(Default)]
pub struct RequiredArgumentsArePresent;

impl<'a> ValidationRule<'a> for RequiredArgumentsArePresent {
    fn interests(&self) -> &'static [ASTKind] {
        &[ASTKind::Field, ASTKind::Directive]
    }

    fn enter(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        _parent: Option<NodeRef<'a>>,
        node: NodeRef<'a>,
        defn: Option<DefinitionRef<'a>>,
    ) -> VisitFlow {
        let Some(owner) = defn.and_then(|defn| ArgumentOwner::new(node, defn)) else {
            return VisitFlow::Next;
        };
        let Some(arguments) = node.arguments() else {
            return VisitFlow::Next;
        };

        let mut missing: Vec<&str> = owner
            .arguments()
            .values()
            .filter(|input| input.is_required() && arguments.get(input.name).is_none())
            .map(|input| input.name)
            .collect();
        if !missing.is_empty() {
            missing.sort_unstable();
            ctx.add_error(
                format!(
                    "{} is missing required arguments: {}",
                    owner,
                    missing.join(", ")
                ),
                node,
            );
        }
        VisitFlow::Next
    }
}
