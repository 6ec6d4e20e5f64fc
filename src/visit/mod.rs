//! # Visiting GraphQL ASTs
//!
//! The `graphql_static_validation::visit` module contains utilities to traverse GraphQL ASTs.
//! The [Visitor] trait is implemented by a visitor and the [`VisitNode`] trait, which all nodes
//! that [`NodeRef`](crate::ast::NodeRef) can point to implement, starts a traversal.
//!
//! Typically, a visitor is used in GraphQL to gain information about the AST and inspect it for
//! certain features. Validation itself is a visitor that dispatches every node to a list of rules.
//!
//! In this example we'll define a visitor that counts all operations in a document:
//!
//! ```
//! use graphql_static_validation::{ast::*, visit::*};
//!
//! #[derive(Default)]
//! struct CountOperations {
//!    operations: usize,
//! }
//!
//! impl<'a> Visitor<'a> for CountOperations {
//!     fn enter_fragment(
//!         &mut self,
//!         _ctx: &mut (),
//!         _fragment: &'a FragmentDefinition<'a>,
//!         _info: &VisitInfo<'a>
//!     ) -> VisitFlow {
//!         // We can skip over fragment nodes and never traverse its children,
//!         // since we're only interested in counting operations
//!         VisitFlow::Skip
//!     }
//!
//!     fn enter_operation(
//!         &mut self,
//!         _ctx: &mut (),
//!         operation: &'a OperationDefinition<'a>,
//!         _info: &VisitInfo<'a>
//!     ) -> VisitFlow {
//!         self.operations += 1;
//!         VisitFlow::Skip
//!     }
//! }
//! ```
//!
//! We may then execute this visitor using `Document::visit`,
//! e.g. `document.visit(&mut (), &mut CountOperations::default())`.
//!
//! [More information on the Visitor trait](Visitor)

mod visitor;

pub use visitor::*;
