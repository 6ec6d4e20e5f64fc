use super::super::{ValidationContext, ValidationRule};
use crate::{ast::*, schema::*, visit::*};
use hashbrown::HashSet;

/// Validate a document for all fragment names in spreads to be defined in the same document.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Fragment-spread-target-defined)
#[derive(Default)]
pub struct KnownFragmentNames<'a> {
    fragment_names: HashSet<&'a str>,
}

impl<'a> ValidationRule<'a> for KnownFragmentNames<'a> {
    fn interests(&self) -> &'static [ASTKind] {
        &[ASTKind::Document, ASTKind::FragmentSpread]
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
                self.fragment_names = document
                    .definitions
                    .iter()
                    .filter_map(|definition| definition.fragment())
                    .map(|fragment| fragment.name.name)
                    .collect();
            }
            NodeRef::FragmentSpread(spread) => {
                if !self.fragment_names.contains(spread.name.name) {
                    ctx.add_error(
                        format!("Fragment {} was used, but not defined", spread.name.name),
                        node,
                    );
                }
            }
            _ => {}
        }
        VisitFlow::Next
    }
}
