use super::super::{ValidationContext, ValidationRule};
use crate::{ast::*, schema::*, visit::*};

/// Validate that every directive that's used is defined by the schema.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Directives-Are-Defined)
#[derive(Default)]
pub struct DirectivesAreDefined;

impl<'a> ValidationRule<'a> for DirectivesAreDefined {
    fn interests(&self) -> &'static [ASTKind] {
        &[ASTKind::Directive]
    }

    fn enter(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        _parent: Option<NodeRef<'a>>,
        node: NodeRef<'a>,
        defn: Option<DefinitionRef<'a>>,
    ) -> VisitFlow {
        match (node, defn) {
            (NodeRef::Directive(directive), None) => {
                ctx.add_error(format!("Directive @{} is not defined", directive.name), node);
                VisitFlow::Skip
            }
            _ => VisitFlow::Next,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::messages;

    #[test]
    fn known_directives() {
        let ctx = ASTContext::new();
        let errors = messages(
            &ctx,
            DirectivesAreDefined,
            "query ($a: Boolean!) { user(id: 1) @include(if: $a) { id @skip(if: false) } }",
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn unknown_directives() {
        let ctx = ASTContext::new();
        let errors = messages(
            &ctx,
            DirectivesAreDefined,
            "query @live { user(id: 1) @defer { ...F @include(if: true) } } fragment F on User @cached { id }",
        );
        assert_eq!(
            errors,
            [
                "Directive @live is not defined",
                "Directive @defer is not defined",
                "Directive @cached is not defined",
            ]
        );
    }
}
