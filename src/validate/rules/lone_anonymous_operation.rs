use super::super::{ValidationContext, ValidationRule};
use crate::{ast::*, schema::*, visit::*};

/// Validate a document to only contain one anonymous operation or multiple named operations.
///
/// Every anonymous operation in a document with more than one operation is reported.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Lone-Anonymous-Operation)
#[derive(Default)]
pub struct LoneAnonymousOperation {
    operations: usize,
}

impl<'a> ValidationRule<'a> for LoneAnonymousOperation {
    fn interests(&self) -> &'static [ASTKind] {
        &[ASTKind::Document, ASTKind::OperationDefinition]
    }

    fn enter(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        _parent: Option<NodeRef<'a>>,
        node: NodeRef<'a>,
        _defn: Option<DefinitionRef<'a>>,
    ) -> VisitFlow {
        match node {
            NodeRef::Document(document) => {
                self.operations = document
                    .definitions
                    .iter()
                    .filter(|definition| definition.operation().is_some())
                    .count();
            }
            NodeRef::Operation(operation) if operation.name.is_none() && self.operations > 1 => {
                ctx.add_error(
                    "Operation name is required when multiple operations are present",
                    node,
                );
            }
            _ => {}
        }
        VisitFlow::Next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::messages;

    #[test]
    fn lone_operation() {
        let ctx = ASTContext::new();
        let errors = messages(
            &ctx,
            LoneAnonymousOperation::default(),
            "query { __typename } fragment F on Query { __typename }",
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn two_named() {
        let ctx = ASTContext::new();
        let errors = messages(
            &ctx,
            LoneAnonymousOperation::default(),
            "query A { __typename } query B { __typename }",
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn anonymous_among_many() {
        let ctx = ASTContext::new();
        let errors = messages(
            &ctx,
            LoneAnonymousOperation::default(),
            "{ __typename } query A { __typename } mutation { __typename }",
        );
        assert_eq!(
            errors,
            [
                "Operation name is required when multiple operations are present",
                "Operation name is required when multiple operations are present",
            ]
        );
    }
}
