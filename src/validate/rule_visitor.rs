use super::context::ValidationContext;
use super::validate::ValidationRule;
use crate::ast::NodeRef;
use crate::schema::{DefinitionRef, OutputType};
use crate::visit::{VisitFlow, VisitInfo, Visitor};
use bumpalo::Bump;

/// What was resolved and recorded when a node was entered, so that it can be undone when the
/// node is left.
struct Frame<'a> {
    defn: Option<DefinitionRef<'a>>,
    pushed_type: bool,
    pushed_path: bool,
}

/// The visitor that runs a list of rules over a document.
///
/// Before any rule sees a node its definition is resolved against the schema. Rules are then
/// called in order until one of them skips the node, at which point the node's subtree is pruned
/// for all rules. Only once all rules let a node pass is the type it selects into entered.
pub(crate) struct RuleVisitor<'a> {
    rules: Vec<Box<dyn ValidationRule<'a> + 'a>>,
    frames: Vec<Frame<'a>>,
}

impl<'a> RuleVisitor<'a> {
    pub(crate) fn new(rules: Vec<Box<dyn ValidationRule<'a> + 'a>>) -> Self {
        RuleVisitor {
            rules,
            frames: Vec::with_capacity(32),
        }
    }

    fn resolve(&self, ctx: &ValidationContext<'a>, node: NodeRef<'a>) -> Option<DefinitionRef<'a>> {
        match node {
            NodeRef::Operation(operation) => ctx
                .schema()
                .get_root_type(operation.operation)
                .map(|object| DefinitionRef::Type(OutputType::Object(object))),
            NodeRef::Fragment(fragment) => ctx
                .schema()
                .get_type(fragment.type_condition.name)
                .and_then(|schema_type| schema_type.output_type())
                .map(DefinitionRef::Type),
            NodeRef::InlineFragment(fragment) => match fragment.type_condition {
                Some(condition) => ctx
                    .schema()
                    .get_type(condition.name)
                    .and_then(|schema_type| schema_type.output_type()),
                None => ctx.parent_type(),
            }
            .map(DefinitionRef::Type),
            NodeRef::SelectionSet(_) => ctx.parent_type().map(DefinitionRef::Type),
            NodeRef::Field(field) => ctx.types.get_field(field.name).map(DefinitionRef::Field),
            NodeRef::Directive(directive) => ctx
                .schema()
                .get_directive(directive.name)
                .map(DefinitionRef::Directive),
            NodeRef::Argument(_) | NodeRef::ObjectField(_) | NodeRef::Variable(_) => {
                self.frames.last().and_then(|frame| frame.defn)
            }
            NodeRef::Document(_)
            | NodeRef::VariableDefinition(_)
            | NodeRef::FragmentSpread(_) => None,
        }
    }

    /// Enter the type that the node selects into. Returns whether a type was entered.
    fn select_type(ctx: &mut ValidationContext<'a>, node: NodeRef<'a>) -> Option<bool> {
        match node {
            NodeRef::Operation(operation) => {
                ctx.types.select_root(operation.operation);
                Some(true)
            }
            NodeRef::Fragment(fragment) => {
                ctx.types.select_condition(Some(fragment.type_condition.name));
                Some(true)
            }
            NodeRef::InlineFragment(fragment) => {
                ctx.types
                    .select_condition(fragment.type_condition.map(|condition| condition.name));
                Some(true)
            }
            NodeRef::Field(field) => match ctx.types.select_field(field.name) {
                Ok(_) => Some(true),
                Err(error) => {
                    ctx.fail(error);
                    None
                }
            },
            _ => Some(false),
        }
    }
}

/// Returns the path segment that a node adds to the paths of errors on itself and its children.
fn path_segment<'a>(arena: &'a Bump, node: NodeRef<'a>) -> Option<&'a str> {
    let segment: &'a str = match node {
        NodeRef::Operation(operation) => match operation.name {
            Some(name) => {
                arena.alloc_str(&format!("{} {}", operation.operation.as_str(), name.name))
            }
            None => operation.operation.as_str(),
        },
        NodeRef::Fragment(fragment) => arena.alloc_str(&format!("fragment {}", fragment.name.name)),
        NodeRef::InlineFragment(fragment) => match fragment.type_condition {
            Some(condition) => arena.alloc_str(&format!("... on {}", condition.name)),
            None => "...",
        },
        NodeRef::FragmentSpread(spread) => arena.alloc_str(&format!("... {}", spread.name.name)),
        NodeRef::Field(field) => field.alias_or_name(),
        NodeRef::Directive(directive) => arena.alloc_str(&format!("@{}", directive.name)),
        NodeRef::Argument(argument) => argument.name,
        _ => return None,
    };
    Some(segment)
}

impl<'a> Visitor<'a, ValidationContext<'a>> for RuleVisitor<'a> {
    fn enter_node(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        node: NodeRef<'a>,
        info: &VisitInfo<'a>,
    ) -> VisitFlow {
        if ctx.has_failed() {
            return VisitFlow::Skip;
        }

        let defn = self.resolve(ctx, node);
        let segment = path_segment(ctx.arena, node);
        if let Some(segment) = segment {
            ctx.path.push(segment);
        }

        let kind = node.kind();
        let parent = info.parent();
        let mut flow = VisitFlow::Next;
        for rule in self.rules.iter_mut() {
            if !rule.interests().contains(&kind) {
                continue;
            }
            if rule.enter(ctx, parent, node, defn) == VisitFlow::Skip {
                flow = VisitFlow::Skip;
                break;
            }
        }

        let pushed_type = match flow {
            VisitFlow::Next => Self::select_type(ctx, node),
            VisitFlow::Skip => None,
        };
        match pushed_type {
            Some(pushed_type) => {
                self.frames.push(Frame {
                    defn,
                    pushed_type,
                    pushed_path: segment.is_some(),
                });
                VisitFlow::Next
            }
            None => {
                if segment.is_some() {
                    ctx.path.pop();
                }
                VisitFlow::Skip
            }
        }
    }

    fn leave_node(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        node: NodeRef<'a>,
        info: &VisitInfo<'a>,
    ) {
        let Some(frame) = self.frames.pop() else {
            return;
        };
        if frame.pushed_type {
            ctx.types.leave_type();
        }
        if !ctx.has_failed() {
            let kind = node.kind();
            let parent = info.parent();
            for rule in self.rules.iter_mut() {
                if rule.interests().contains(&kind) {
                    rule.leave(ctx, parent, node, frame.defn);
                }
            }
        }
        if frame.pushed_path {
            ctx.path.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{ASTContext, ASTKind};
    use crate::fixture::{build_schema, parse};
    use crate::validate::ValidationRules;

    /// Records every call it receives and skips nodes with a given name.
    struct Recorder<'r> {
        label: &'static str,
        interests: &'static [ASTKind],
        skip: Option<&'static str>,
        log: &'r std::cell::RefCell<Vec<String>>,
    }

    impl<'a, 'r> ValidationRule<'a> for Recorder<'r> {
        fn interests(&self) -> &'static [ASTKind] {
            self.interests
        }

        fn enter(
            &mut self,
            ctx: &mut ValidationContext<'a>,
            parent: Option<NodeRef<'a>>,
            node: NodeRef<'a>,
            defn: Option<DefinitionRef<'a>>,
        ) -> VisitFlow {
            self.log.borrow_mut().push(format!(
                "{} enter {} {} parent={:?} defn={:?} path={}",
                self.label,
                node.kind(),
                node.name().unwrap_or("-"),
                parent.map(|parent| parent.kind().to_string()),
                defn.map(|defn| defn.name()),
                ctx.path().join("/"),
            ));
            if node.name().is_some() && node.name() == self.skip {
                VisitFlow::Skip
            } else {
                VisitFlow::Next
            }
        }

        fn leave(
            &mut self,
            ctx: &mut ValidationContext<'a>,
            _parent: Option<NodeRef<'a>>,
            node: NodeRef<'a>,
            _defn: Option<DefinitionRef<'a>>,
        ) {
            self.log.borrow_mut().push(format!(
                "{} leave {} {} type={:?}",
                self.label,
                node.kind(),
                node.name().unwrap_or("-"),
                ctx.parent_type().map(|parent_type| parent_type.name()),
            ));
        }
    }

    #[test]
    fn definitions_and_paths() {
        let ctx = ASTContext::new();
        let schema = build_schema(&ctx);
        let document = parse(&ctx, "query Q { me: user(id: 1) @include(if: true) { id } }");
        let log = std::cell::RefCell::new(Vec::new());
        let rules = ValidationRules::new().with(Recorder {
            label: "a",
            interests: &[ASTKind::Field, ASTKind::Directive, ASTKind::Argument],
            skip: None,
            log: &log,
        });
        assert!(rules.validate(&ctx, document, &schema).unwrap().is_empty());
        assert_eq!(
            log.into_inner(),
            [
                "a enter Field user parent=Some(\"Selection Set\") defn=Some(\"user\") path=query Q/me",
                "a enter Argument id parent=Some(\"Field\") defn=Some(\"user\") path=query Q/me/id",
                "a leave Argument id type=Some(\"User\")",
                "a enter Directive include parent=Some(\"Field\") defn=Some(\"include\") path=query Q/me/@include",
                "a enter Argument if parent=Some(\"Directive\") defn=Some(\"include\") path=query Q/me/@include/if",
                "a leave Argument if type=Some(\"User\")",
                "a leave Directive include type=Some(\"User\")",
                "a enter Field id parent=Some(\"Selection Set\") defn=Some(\"id\") path=query Q/me/id",
                "a leave Field id type=Some(\"User\")",
                "a leave Field user type=Some(\"Query\")",
            ]
        );
    }

    #[test]
    fn first_skip_wins() {
        let ctx = ASTContext::new();
        let schema = build_schema(&ctx);
        let document = parse(&ctx, "{ user(id: 1) { id } }");
        let log = std::cell::RefCell::new(Vec::new());
        let rules = ValidationRules::new()
            .with(Recorder {
                label: "a",
                interests: &[ASTKind::Field],
                skip: Some("user"),
                log: &log,
            })
            .with(Recorder {
                label: "b",
                interests: &[ASTKind::Field, ASTKind::Argument],
                skip: None,
                log: &log,
            });
        rules.validate(&ctx, document, &schema).unwrap();
        assert_eq!(
            log.into_inner(),
            ["a enter Field user parent=Some(\"Selection Set\") defn=Some(\"user\") path=query/user"]
        );
    }

    #[test]
    fn leave_hooks_run_in_order() {
        let ctx = ASTContext::new();
        let schema = build_schema(&ctx);
        let document = parse(&ctx, "{ __typename }");
        let log = std::cell::RefCell::new(Vec::new());
        let rules = ValidationRules::new()
            .with(Recorder {
                label: "a",
                interests: &[ASTKind::Field],
                skip: None,
                log: &log,
            })
            .with(Recorder {
                label: "b",
                interests: &[ASTKind::Field],
                skip: None,
                log: &log,
            });
        rules.validate(&ctx, document, &schema).unwrap();
        assert_eq!(
            log.into_inner(),
            [
                "a enter Field __typename parent=Some(\"Selection Set\") defn=None path=query/__typename",
                "b enter Field __typename parent=Some(\"Selection Set\") defn=None path=query/__typename",
                "a leave Field __typename type=Some(\"Query\")",
                "b leave Field __typename type=Some(\"Query\")",
            ]
        );
    }

    #[test]
    fn skipped_arguments_hide_their_values() {
        let ctx = ASTContext::new();
        let schema = build_schema(&ctx);
        let document = parse(
            &ctx,
            "query($a: Int, $b: String, $c: String) {\n  users(bogus: {name: $b}, first: $a, filter: {name: $c}) { id }\n}",
        );
        let log = std::cell::RefCell::new(Vec::new());
        let rules = ValidationRules::new()
            .with(crate::validate::rules::ArgumentsAreDefined)
            .with(Recorder {
                label: "a",
                interests: &[ASTKind::ObjectField, ASTKind::Variable],
                skip: None,
                log: &log,
            });
        let errors = rules.validate(&ctx, document, &schema).unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Field 'users' doesn't accept argument 'bogus'");
        assert_eq!(errors[0].path, ["query", "users", "bogus"]);
        drop(errors);

        let log = log.into_inner();
        let enters: Vec<&str> = log
            .iter()
            .filter(|line| line.contains(" enter "))
            .map(|line| line.as_str())
            .collect();
        assert_eq!(
            enters,
            [
                "a enter Variable a parent=Some(\"Argument\") defn=Some(\"users\") path=query/users/first",
                "a enter Object Field name parent=Some(\"Argument\") defn=Some(\"users\") path=query/users/filter",
                "a enter Variable c parent=Some(\"Object Field\") defn=Some(\"users\") path=query/users/filter",
            ]
        );
    }

    #[test]
    fn fragments_resolve_their_conditions() {
        let ctx = ASTContext::new();
        let schema = build_schema(&ctx);
        let document = parse(
            &ctx,
            "{ node { ... on User { id } ... { id } } } fragment F on Unknown { a }",
        );
        let log = std::cell::RefCell::new(Vec::new());
        let rules = ValidationRules::new().with(Recorder {
            label: "a",
            interests: &[ASTKind::InlineFragment, ASTKind::FragmentDefinition, ASTKind::SelectionSet],
            skip: None,
            log: &log,
        });
        rules.validate(&ctx, document, &schema).unwrap();
        let log = log.into_inner();
        let enters: Vec<&str> = log
            .iter()
            .filter(|line| line.contains(" enter "))
            .map(|line| line.as_str())
            .collect();
        assert_eq!(
            enters,
            [
                "a enter Selection Set - parent=Some(\"Operation Definition\") defn=Some(\"Query\") path=query",
                "a enter Selection Set - parent=Some(\"Field\") defn=Some(\"Node\") path=query/node",
                "a enter Inline Fragment User parent=Some(\"Selection Set\") defn=Some(\"User\") path=query/node/... on User",
                "a enter Selection Set - parent=Some(\"Inline Fragment\") defn=Some(\"User\") path=query/node/... on User",
                "a enter Inline Fragment - parent=Some(\"Selection Set\") defn=Some(\"Node\") path=query/node/...",
                "a enter Selection Set - parent=Some(\"Inline Fragment\") defn=Some(\"Node\") path=query/node/...",
                "a enter Fragment Definition F parent=Some(\"Document\") defn=None path=fragment F",
                "a enter Selection Set - parent=Some(\"Fragment Definition\") defn=None path=fragment F",
            ]
        );
    }
}
