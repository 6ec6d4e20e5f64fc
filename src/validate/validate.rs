use super::context::{ValidationContext, ValidationError};
use super::rule_visitor::RuleVisitor;
use super::rules::*;
use crate::ast::{ASTContext, ASTKind, Document, NodeRef};
use crate::error::Result;
use crate::schema::{DefinitionRef, Schema};
use crate::visit::{VisitFlow, VisitNode};
use bumpalo::collections::Vec;
use std::borrow::Borrow;
use tracing::{debug, debug_span};

/// Trait for a `ValidationRule` that checks the nodes of a GraphQL document against a schema.
///
/// A rule declares the kinds of nodes it's interested in and is then called for every node of
/// those kinds as the document is traversed. Alongside the node, rules receive the node's parent
/// and the schema definition that the node resolved to, if any. See [`DefinitionRef`] for which
/// definition each kind of node resolves to.
///
/// Returning [`VisitFlow::Skip`] from [`ValidationRule::enter`] stops the node's subtree from
/// being traversed. This applies to all rules, so a rule that detects that a node makes no sense
/// against the schema may use it to avoid follow-up errors deeper in the document. Rules
/// registered after the skipping rule aren't called on the node either.
///
/// Rules must be independent from each other and only communicate by adding errors to the
/// [`ValidationContext`].
pub trait ValidationRule<'a> {
    /// The kinds of nodes this rule is called on.
    fn interests(&self) -> &'static [ASTKind];

    /// Called when a node of an interesting kind is entered, before its children.
    fn enter(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        parent: Option<NodeRef<'a>>,
        node: NodeRef<'a>,
        defn: Option<DefinitionRef<'a>>,
    ) -> VisitFlow;

    /// Called when a node of an interesting kind is left, after its children.
    ///
    /// Nodes whose subtree was skipped aren't left.
    #[inline]
    fn leave(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        _parent: Option<NodeRef<'a>>,
        _node: NodeRef<'a>,
        _defn: Option<DefinitionRef<'a>>,
    ) {
    }
}

/// An ordered set of [`ValidationRule`]s that's run against a document in a single traversal.
///
/// Rules are called in the order they were added. `ValidationRules::default()` contains all rules
/// this crate comes with, ordered so that rules which prune subtrees that make no sense against
/// the schema run before the rules that would otherwise report follow-up errors on them.
///
/// ```
/// use graphql_static_validation::validate::{rules::*, ValidationRules};
///
/// let rules = ValidationRules::new()
///     .with(FieldsAreDefinedOnType)
///     .with(ArgumentsAreDefined);
/// assert_eq!(rules.len(), 2);
/// ```
pub struct ValidationRules<'a> {
    rules: std::vec::Vec<Box<dyn ValidationRule<'a> + 'a>>,
}

impl<'a> ValidationRules<'a> {
    /// Create an empty set of rules.
    #[inline]
    pub fn new() -> Self {
        ValidationRules {
            rules: std::vec::Vec::new(),
        }
    }

    /// Add a rule after all previously added rules and return the set.
    #[inline]
    pub fn with<R: ValidationRule<'a> + 'a>(mut self, rule: R) -> Self {
        self.add(rule);
        self
    }

    /// Add a rule after all previously added rules.
    #[inline]
    pub fn add<R: ValidationRule<'a> + 'a>(&mut self, rule: R) {
        self.rules.push(Box::new(rule));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn run(
        self,
        ctx: &'a ASTContext,
        document: &'a Document<'a>,
        schema: &'a Schema<'a>,
    ) -> ValidationContext<'a> {
        let span = debug_span!("validate", rules = self.rules.len());
        let _enter = span.enter();
        debug!(definitions = document.definitions.len(), "validation started");

        let mut validation = ValidationContext::new(ctx, document, schema);
        let mut visitor = RuleVisitor::new(self.rules);
        document.visit(&mut validation, &mut visitor);

        if !validation.has_failed() {
            debug!(errors = validation.errors().len(), "validation finished");
        }
        validation
    }

    /// Run all rules against the given document and return the errors they found.
    ///
    /// Errors are returned in the order they were found, which is the order of the nodes they were
    /// found on and, for a single node, the order of the rules. An empty list means that the
    /// document is safe to execute. The run only fails with an [`Error`](crate::error::Error) if
    /// the schema turns out to be inconsistent.
    #[inline]
    pub fn validate(
        self,
        ctx: &'a ASTContext,
        document: &'a Document<'a>,
        schema: &'a Schema<'a>,
    ) -> Result<Vec<'a, ValidationError<'a>>> {
        self.run(ctx, document, schema).into_errors()
    }

    /// Run all rules against the given document and return a result which errors if any rule
    /// found an error.
    ///
    /// See [`ValidationContext::to_result`] for how errors are combined.
    #[inline]
    pub fn check(
        self,
        ctx: &'a ASTContext,
        document: &'a Document<'a>,
        schema: &'a Schema<'a>,
    ) -> Result<()> {
        self.run(ctx, document, schema).to_result()
    }
}

impl<'a> Default for ValidationRules<'a> {
    fn default() -> Self {
        ValidationRules::new()
            .with(FieldsAreDefinedOnType)
            .with(DirectivesAreDefined)
            .with(ArgumentsAreDefined)
            .with(RequiredArgumentsArePresent)
            .with(UniqueArgumentNames)
            .with(UniqueOperationNames::default())
            .with(LoneAnonymousOperation::default())
            .with(KnownFragmentNames::default())
    }
}

/// Validate a document against a schema with the default set of rules and return the errors
/// that were found.
///
/// See [`ValidationRules::validate`].
#[inline]
pub fn validate<'a>(
    ctx: &'a ASTContext,
    document: &'a Document<'a>,
    schema: &'a Schema<'a>,
) -> Result<Vec<'a, ValidationError<'a>>> {
    ValidationRules::default().validate(ctx, document, schema)
}

/// Trait to run validation on a given GraphQL Document node.
pub trait ValidateNode<'a>
where
    Self: Borrow<Document<'a>>,
{
    /// Run the default rules on the document node and return a result which errors if any of them
    /// failed on the current document.
    ///
    /// `document.validate(&ctx, &schema)`
    #[inline]
    fn validate(&'a self, ctx: &'a ASTContext, schema: &'a Schema<'a>) -> Result<()> {
        ValidationRules::default().check(ctx, self.borrow(), schema)
    }

    /// Run the given rules on the document node and return a result which errors if any of them
    /// failed on the current document.
    #[inline]
    fn validate_with(
        &'a self,
        ctx: &'a ASTContext,
        schema: &'a Schema<'a>,
        rules: ValidationRules<'a>,
    ) -> Result<()> {
        rules.check(ctx, self.borrow(), schema)
    }
}

impl<'a> ValidateNode<'a> for Document<'a> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorType, Location};
    use crate::fixture::{build_schema, parse};
    use crate::schema::{SchemaField, SchemaFields, SchemaObject, TypeRef};
    use crate::ast::OperationKind;
    use indoc::indoc;

    fn messages<'a>(errors: &[ValidationError<'a>]) -> std::vec::Vec<&'a str> {
        errors.iter().map(|error| error.message).collect()
    }

    #[test]
    fn valid_document() {
        let ctx = ASTContext::new();
        let schema = build_schema(&ctx);
        let document = parse(
            &ctx,
            indoc! {"
                query Users($id: ID!) {
                  user(id: $id) { id name(format: SHORT) @include(if: true) }
                  users(first: 5, filter: { name: \"a\" }) { ...UserFields }
                }
                fragment UserFields on User { friends(first: 2) { __typename } }
            "},
        );
        let errors = validate(&ctx, document, &schema).unwrap();
        assert!(errors.is_empty(), "{:?}", errors);
        document.validate(&ctx, &schema).unwrap();
    }

    #[test]
    fn unknown_argument_on_field() {
        let ctx = ASTContext::new();
        let schema = build_schema(&ctx);
        let document = parse(&ctx, "query { user(id: 1, name: \"x\") { id } }");
        let errors = validate(&ctx, document, &schema).unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Field 'user' doesn't accept argument 'name'");
        assert_eq!(errors[0].location, Some(Location::new(1, 9)));
        assert_eq!(errors[0].path, ["query", "user", "name"]);
    }

    #[test]
    fn unknown_argument_on_directive() {
        let ctx = ASTContext::new();
        let schema = build_schema(&ctx);
        let document = parse(&ctx, "{ user(id: 1) { id @skip(if: true, unless: false) } }");
        let errors = validate(&ctx, document, &schema).unwrap();
        assert_eq!(
            messages(&errors),
            ["Directive 'skip' doesn't accept argument 'unless'"]
        );
        assert_eq!(errors[0].path, ["query", "user", "id", "@skip", "unless"]);
    }

    #[test]
    fn several_unknown_arguments_in_order() {
        let ctx = ASTContext::new();
        let schema = build_schema(&ctx);
        let document = parse(&ctx, "{ user(a: 1, id: 1, b: 2) { id } }");
        let errors = validate(&ctx, document, &schema).unwrap();
        assert_eq!(
            messages(&errors),
            [
                "Field 'user' doesn't accept argument 'a'",
                "Field 'user' doesn't accept argument 'b'",
            ]
        );
    }

    #[test]
    fn unknown_field_prunes_arguments() {
        let ctx = ASTContext::new();
        let schema = build_schema(&ctx);
        let document = parse(&ctx, "{ viewer(unknown: 1) { anything(else: 2) } }");
        let errors = validate(&ctx, document, &schema).unwrap();
        assert_eq!(messages(&errors), ["Field 'viewer' doesn't exist on type 'Query'"]);
    }

    #[test]
    fn errors_are_in_document_order() {
        let ctx = ASTContext::new();
        let schema = build_schema(&ctx);
        let document = parse(
            &ctx,
            indoc! {"
                query A { user(id: 1, x: 1) { id } }
                query A { ...Missing }
                { __typename }
            "},
        );
        let errors = validate(&ctx, document, &schema).unwrap();
        assert_eq!(
            messages(&errors),
            [
                "Field 'user' doesn't accept argument 'x'",
                "Operation name 'A' must be unique",
                "Fragment Missing was used, but not defined",
                "Operation name is required when multiple operations are present",
            ]
        );
    }

    #[test]
    fn validation_is_deterministic() {
        let source = "{ user(a: 1, b: 2) { name(x: 1) friends(y: 2) { id } } users(z: 3) }";
        let ctx = ASTContext::new();
        let schema = build_schema(&ctx);
        let document = parse(&ctx, source);
        let first = validate(&ctx, document, &schema).unwrap();
        let second = validate(&ctx, document, &schema).unwrap();
        assert_eq!(first.len(), 6);
        assert_eq!(first, second);
    }

    #[test]
    fn concurrent_runs_share_schema() {
        let schema_ctx = ASTContext::new();
        let schema = build_schema(&schema_ctx);
        let schema = &schema;
        std::thread::scope(|scope| {
            let handles: std::vec::Vec<_> = (0..4)
                .map(|_| {
                    scope.spawn(move || {
                        let ctx = ASTContext::new();
                        let document = parse(&ctx, "{ user(id: 1, name: 2) { id } }");
                        let errors = validate(&ctx, document, schema).unwrap();
                        errors.iter().map(|error| error.to_string()).collect::<std::vec::Vec<_>>()
                    })
                })
                .collect();
            for handle in handles {
                assert_eq!(
                    handle.join().unwrap(),
                    ["Field 'user' doesn't accept argument 'name' (1:3)"]
                );
            }
        });
    }

    #[test]
    fn check_folds_errors() {
        let ctx = ASTContext::new();
        let schema = build_schema(&ctx);
        let document = parse(&ctx, "{ user(a: 1) { id } node(b: 2) { id } }");
        let error = document.validate(&ctx, &schema).unwrap_err();
        assert_eq!(error.error_type(), ErrorType::GraphQL);
        assert_eq!(
            error.to_string(),
            indoc! {"
                GraphQL Error: Document failed validation
                - Field 'user' is missing required arguments: id (1:3)
                - Field 'user' doesn't accept argument 'a' (1:3)
                - Field 'node' doesn't accept argument 'b' (1:21)"}
        );
    }

    #[test]
    fn custom_rules_only() {
        let ctx = ASTContext::new();
        let schema = build_schema(&ctx);
        let document = parse(&ctx, "{ viewer(a: 1) } { user(b: 2) { id } }");
        let rules = ValidationRules::new().with(ArgumentsAreDefined);
        let errors = rules.validate(&ctx, document, &schema).unwrap();
        assert_eq!(messages(&errors), ["Field 'user' doesn't accept argument 'b'"]);

        let empty = ValidationRules::new();
        assert!(empty.is_empty());
        document.validate_with(&ctx, &schema, empty).unwrap();
    }

    #[test]
    fn inconsistent_schema_aborts() {
        let ctx = ASTContext::new();
        let mut query = SchemaObject::new("Query");
        query.add_field(&ctx, SchemaField::new("ghost", ctx.alloc(TypeRef::Type("Ghost"))));
        let mut schema = Schema::new();
        schema.set_root_type(&ctx, OperationKind::Query, ctx.alloc(query));

        let document = parse(&ctx, "{ ghost { id } }");
        let error = validate(&ctx, document, &schema).unwrap_err();
        assert_eq!(error.error_type(), ErrorType::Internal);
        assert_eq!(
            error.message(),
            "Field 'ghost' refers to 'Ghost', which isn't an output type in the schema"
        );
    }
}
