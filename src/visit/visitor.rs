use crate::ast::*;

/// A visitor signal that is returned from [Visitor] callbacks to alter the flow of traversal.
///
/// The default callbacks all return `VisitFlow::Next`, which continues the depth-first traversal.
/// `VisitFlow::Skip` may be returned from an `enter_` callback to skip over a node's children.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum VisitFlow {
    /// Continue visiting nodes as usual.
    Next,
    /// Skip over the current node's children without performing any deeper traversal.
    /// The node's `leave_` callback isn't called either.
    Skip,
}

/// Information on the position of the visited node in the AST.
///
/// The ancestors of the current node are kept from the root downwards, so the last entry is the
/// current node's parent.
#[derive(Debug, Default)]
pub struct VisitInfo<'a> {
    pub ancestors: Vec<NodeRef<'a>>,
}

impl<'a> VisitInfo<'a> {
    /// Returns the parent of the currently visited node. The root node has none.
    #[inline]
    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.ancestors.last().copied()
    }

    /// Returns how many ancestors the currently visited node has.
    #[inline]
    pub fn depth(&self) -> usize {
        self.ancestors.len()
    }
}

/// Trait for a visitor that carries methods that are called as callback while AST nodes
/// implementing the visitor pattern are traversed.
///
/// While the AST is traversed in depth-first order, callbacks that are prefixed with `enter_` are
/// called from top-to-bottom while the traversal is recursing, while callbacks that are prefixed
/// with `leave_` are called from bottom-to-top while the traversal is returning.
///
/// All callbacks have a default no-op implementation that returns `VisitFlow::Next`. The
/// [`VisitFlow`] signals are returned from `enter_` callbacks to either continue the traversal
/// (`Next`) or skip over a node's children (`Skip`).
///
/// Every node first passes through [`Visitor::enter_node`] and [`Visitor::leave_node`], which
/// dispatch to the typed callbacks by default. Visitors that handle all kinds of nodes alike
/// override these two instead.
///
/// The visitor must implement the [Visitor] trait which may also define a custom context structure
/// that can be passed to the `visit` method. By default the context is an empty unit `()`.
///
/// This pattern is applicable to any AST node that implements the [`VisitNode`] trait.
pub trait Visitor<'a, Context = ()>: Sized {
    /// Called when any node is visited and before its child nodes are visited.
    fn enter_node(
        &mut self,
        ctx: &mut Context,
        node: NodeRef<'a>,
        info: &VisitInfo<'a>,
    ) -> VisitFlow {
        match node {
            NodeRef::Document(document) => self.enter_document(ctx, document, info),
            NodeRef::Operation(operation) => self.enter_operation(ctx, operation, info),
            NodeRef::Fragment(fragment) => self.enter_fragment(ctx, fragment, info),
            NodeRef::VariableDefinition(var_def) => {
                self.enter_variable_definition(ctx, var_def, info)
            }
            NodeRef::SelectionSet(selection_set) => {
                self.enter_selection_set(ctx, selection_set, info)
            }
            NodeRef::Field(field) => self.enter_field(ctx, field, info),
            NodeRef::FragmentSpread(spread) => self.enter_fragment_spread(ctx, spread, info),
            NodeRef::InlineFragment(fragment) => self.enter_inline_fragment(ctx, fragment, info),
            NodeRef::Directive(directive) => self.enter_directive(ctx, directive, info),
            NodeRef::Argument(argument) => self.enter_argument(ctx, argument, info),
            NodeRef::ObjectField(field) => self.enter_object_field(ctx, field, info),
            NodeRef::Variable(variable) => self.enter_variable(ctx, variable, info),
        }
    }

    /// Called after any node and its child nodes were visited.
    fn leave_node(&mut self, ctx: &mut Context, node: NodeRef<'a>, info: &VisitInfo<'a>) {
        match node {
            NodeRef::Document(document) => self.leave_document(ctx, document, info),
            NodeRef::Operation(operation) => self.leave_operation(ctx, operation, info),
            NodeRef::Fragment(fragment) => self.leave_fragment(ctx, fragment, info),
            NodeRef::VariableDefinition(var_def) => {
                self.leave_variable_definition(ctx, var_def, info)
            }
            NodeRef::SelectionSet(selection_set) => {
                self.leave_selection_set(ctx, selection_set, info)
            }
            NodeRef::Field(field) => self.leave_field(ctx, field, info),
            NodeRef::FragmentSpread(spread) => self.leave_fragment_spread(ctx, spread, info),
            NodeRef::InlineFragment(fragment) => self.leave_inline_fragment(ctx, fragment, info),
            NodeRef::Directive(directive) => self.leave_directive(ctx, directive, info),
            NodeRef::Argument(argument) => self.leave_argument(ctx, argument, info),
            NodeRef::ObjectField(field) => self.leave_object_field(ctx, field, info),
            NodeRef::Variable(variable) => self.leave_variable(ctx, variable, info),
        }
    }

    /// Called when a [`Document`] node is visited and before its child nodes are visited.
    fn enter_document(
        &mut self,
        _ctx: &mut Context,
        _document: &'a Document<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
    /// Called after a [`Document`] node and its child nodes were visited.
    fn leave_document(
        &mut self,
        _ctx: &mut Context,
        _document: &'a Document<'a>,
        _info: &VisitInfo<'a>,
    ) {}

    /// Called when an [`OperationDefinition`] node is visited and before its child nodes are visited.
    fn enter_operation(
        &mut self,
        _ctx: &mut Context,
        _operation: &'a OperationDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
    /// Called after an [`OperationDefinition`] node and its child nodes were visited.
    fn leave_operation(
        &mut self,
        _ctx: &mut Context,
        _operation: &'a OperationDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) {}

    /// Called when a [`FragmentDefinition`] node is visited and before its child nodes are visited.
    fn enter_fragment(
        &mut self,
        _ctx: &mut Context,
        _fragment: &'a FragmentDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
    /// Called after a [`FragmentDefinition`] node and its child nodes were visited.
    fn leave_fragment(
        &mut self,
        _ctx: &mut Context,
        _fragment: &'a FragmentDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) {}

    /// Called when a [`VariableDefinition`] node is visited and before its child nodes are visited.
    fn enter_variable_definition(
        &mut self,
        _ctx: &mut Context,
        _var_def: &'a VariableDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
    /// Called after a [`VariableDefinition`] node and its child nodes were visited.
    fn leave_variable_definition(
        &mut self,
        _ctx: &mut Context,
        _var_def: &'a VariableDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) {}

    /// Called when a [`SelectionSet`] node is visited and before its child nodes are visited.
    fn enter_selection_set(
        &mut self,
        _ctx: &mut Context,
        _selection_set: &'a SelectionSet<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
    /// Called after a [`SelectionSet`] node and its child nodes were visited.
    fn leave_selection_set(
        &mut self,
        _ctx: &mut Context,
        _selection_set: &'a SelectionSet<'a>,
        _info: &VisitInfo<'a>,
    ) {}

    /// Called when a [Field] node is visited and before its child nodes are visited.
    fn enter_field(
        &mut self,
        _ctx: &mut Context,
        _field: &'a Field<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
    /// Called after a [Field] node and its child nodes were visited.
    fn leave_field(&mut self, _ctx: &mut Context, _field: &'a Field<'a>, _info: &VisitInfo<'a>) {}

    /// Called when a [`FragmentSpread`] node is visited and before its child nodes are visited.
    fn enter_fragment_spread(
        &mut self,
        _ctx: &mut Context,
        _fragment_spread: &'a FragmentSpread<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
    /// Called after a [`FragmentSpread`] node and its child nodes were visited.
    fn leave_fragment_spread(
        &mut self,
        _ctx: &mut Context,
        _fragment_spread: &'a FragmentSpread<'a>,
        _info: &VisitInfo<'a>,
    ) {}

    /// Called when an [`InlineFragment`] node is visited and before its child nodes are visited.
    fn enter_inline_fragment(
        &mut self,
        _ctx: &mut Context,
        _inline_fragment: &'a InlineFragment<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
    /// Called after an [`InlineFragment`] node and its child nodes were visited.
    fn leave_inline_fragment(
        &mut self,
        _ctx: &mut Context,
        _inline_fragment: &'a InlineFragment<'a>,
        _info: &VisitInfo<'a>,
    ) {}

    /// Called when a [Directive] node is visited and before its child nodes are visited.
    fn enter_directive(
        &mut self,
        _ctx: &mut Context,
        _directive: &'a Directive<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
    /// Called after a [Directive] node and its child nodes were visited.
    fn leave_directive(
        &mut self,
        _ctx: &mut Context,
        _directive: &'a Directive<'a>,
        _info: &VisitInfo<'a>,
    ) {}

    /// Called when an [Argument] node is visited and before its child nodes are visited.
    fn enter_argument(
        &mut self,
        _ctx: &mut Context,
        _argument: &'a Argument<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
    /// Called after an [Argument] node and its child nodes were visited.
    fn leave_argument(
        &mut self,
        _ctx: &mut Context,
        _argument: &'a Argument<'a>,
        _info: &VisitInfo<'a>,
    ) {}

    /// Called when an [`ObjectField`] node is visited and before its child nodes are visited.
    fn enter_object_field(
        &mut self,
        _ctx: &mut Context,
        _object_field: &'a ObjectField<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
    /// Called after an [`ObjectField`] node and its child nodes were visited.
    fn leave_object_field(
        &mut self,
        _ctx: &mut Context,
        _object_field: &'a ObjectField<'a>,
        _info: &VisitInfo<'a>,
    ) {}

    /// Called when a [Variable] node is visited and before its child nodes are visited.
    fn enter_variable(
        &mut self,
        _ctx: &mut Context,
        _variable: &'a Variable<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
    /// Called after a [Variable] node and its child nodes were visited.
    fn leave_variable(
        &mut self,
        _ctx: &mut Context,
        _variable: &'a Variable<'a>,
        _info: &VisitInfo<'a>,
    ) {}
}

/// Trait for visiting AST Nodes of a GraphQL language document in depth-first order using a
/// custom visitor.
///
/// The visitor must implement the [Visitor] trait which may also define a custom context structure
/// that can be passed to the `visit` method.
pub trait VisitNode<'a> {
    /// Visit a GraphQL AST node tree recursively in depth-first order with a given visitor.
    ///
    /// Each node is entered exactly once, before its children, and left after them unless its
    /// `enter_` callback returned `VisitFlow::Skip`.
    fn visit<C, V: Visitor<'a, C>>(&'a self, ctx: &mut C, visitor: &mut V);
}

impl<'a, T: 'a> VisitNode<'a> for T
where
    &'a T: Into<NodeRef<'a>>,
{
    #[inline]
    fn visit<C, V: Visitor<'a, C>>(&'a self, ctx: &mut C, visitor: &mut V) {
        let mut info = VisitInfo::default();
        visit_node(self.into(), ctx, visitor, &mut info);
    }
}

fn visit_node<'a, C, V: Visitor<'a, C>>(
    node: NodeRef<'a>,
    ctx: &mut C,
    visitor: &mut V,
    info: &mut VisitInfo<'a>,
) {
    if visitor.enter_node(ctx, node, info) == VisitFlow::Skip {
        return;
    }
    info.ancestors.push(node);
    for child in node.children() {
        visit_node(child, ctx, visitor, info);
    }
    info.ancestors.pop();
    visitor.leave_node(ctx, node, info);
}
