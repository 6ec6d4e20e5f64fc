use super::context::ValidationContext;
use super::validate::ValidationRule;
use crate::ast::{ASTKind, Argument, Directive, Field, NodeRef};
use crate::schema::{
    DefinitionRef, SchemaArguments, SchemaDirective, SchemaField, SchemaInputField,
};
use crate::visit::VisitFlow;
use hashbrown::HashMap;
use std::fmt;

/// The field or directive that an argument is passed to, together with its definition.
///
/// Printing an owner gives the phrase that errors use to refer to it, e.g. `Field 'user'` or
/// `Directive 'include'`.
#[derive(Debug, Clone, Copy)]
pub enum ArgumentOwner<'a> {
    Field {
        node: &'a Field<'a>,
        defn: &'a SchemaField<'a>,
    },
    Directive {
        node: &'a Directive<'a>,
        defn: &'a SchemaDirective<'a>,
    },
}

impl<'a> ArgumentOwner<'a> {
    /// Pairs a node with its definition, if the node can own arguments and the definition
    /// matches its kind.
    pub fn new(node: NodeRef<'a>, defn: DefinitionRef<'a>) -> Option<Self> {
        match (node, defn) {
            (NodeRef::Field(node), DefinitionRef::Field(defn)) => {
                Some(ArgumentOwner::Field { node, defn })
            }
            (NodeRef::Directive(node), DefinitionRef::Directive(defn)) => {
                Some(ArgumentOwner::Directive { node, defn })
            }
            _ => None,
        }
    }

    #[inline]
    pub fn kind(&self) -> ASTKind {
        match self {
            ArgumentOwner::Field { .. } => ASTKind::Field,
            ArgumentOwner::Directive { .. } => ASTKind::Directive,
        }
    }

    /// The name the owner is referred to by, which is the field's name rather than its alias.
    #[inline]
    pub fn name(&self) -> &'a str {
        match self {
            ArgumentOwner::Field { node, .. } => node.name,
            ArgumentOwner::Directive { node, .. } => node.name,
        }
    }

    #[inline]
    pub fn node(&self) -> NodeRef<'a> {
        match *self {
            ArgumentOwner::Field { node, .. } => NodeRef::Field(node),
            ArgumentOwner::Directive { node, .. } => NodeRef::Directive(node),
        }
    }

    /// The arguments that the owner's definition declares.
    #[inline]
    pub fn arguments(&self) -> &'a HashMap<&'a str, SchemaInputField<'a>> {
        match *self {
            ArgumentOwner::Field { defn, .. } => defn.get_arguments(),
            ArgumentOwner::Directive { defn, .. } => defn.get_arguments(),
        }
    }

    /// Returns a declared argument by its exact name.
    #[inline]
    pub fn get_argument(&self, name: &str) -> Option<&'a SchemaInputField<'a>> {
        self.arguments().get(name)
    }
}

impl<'a> fmt::Display for ArgumentOwner<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.kind(), self.name())
    }
}

/// Trait for rules that check each argument passed to a field or directive against the
/// arguments its definition declares.
///
/// All implementors are [`ValidationRule`]s that are interested in arguments. They're only called
/// for arguments whose owner resolved to a definition in the schema, so an argument on an unknown
/// field or directive is never checked.
pub trait ArgumentsValidator<'a> {
    fn validate_argument(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        owner: ArgumentOwner<'a>,
        argument: &'a Argument<'a>,
    ) -> VisitFlow;
}

impl<'a, T: ArgumentsValidator<'a>> ValidationRule<'a> for T {
    #[inline]
    fn interests(&self) -> &'static [ASTKind] {
        &[ASTKind::Argument]
    }

    fn enter(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        parent: Option<NodeRef<'a>>,
        node: NodeRef<'a>,
        defn: Option<DefinitionRef<'a>>,
    ) -> VisitFlow {
        let (NodeRef::Argument(argument), Some(parent), Some(defn)) = (node, parent, defn) else {
            return VisitFlow::Next;
        };
        match ArgumentOwner::new(parent, defn) {
            Some(owner) => self.validate_argument(ctx, owner, argument),
            None => VisitFlow::Next,
        }
    }
}
