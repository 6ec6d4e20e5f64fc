use std::fmt;

/// An enum of identifiers representing the AST nodes that a traversal enters.
///
/// This enum can be printed using the [`fmt::Display`] trait, which validation rules use to
/// describe the node that an error refers to, e.g. `Field` or `Directive`.
/// Rules also use it to declare which nodes they'd like to inspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ASTKind {
    /// See: [crate::ast::Document]
    Document,
    /// See: [crate::ast::OperationDefinition]
    OperationDefinition,
    /// See: [crate::ast::FragmentDefinition]
    FragmentDefinition,
    /// See: [crate::ast::VariableDefinition]
    VariableDefinition,
    /// See: [crate::ast::SelectionSet]
    SelectionSet,
    /// See: [crate::ast::Field]
    Field,
    /// See: [crate::ast::FragmentSpread]
    FragmentSpread,
    /// See: [crate::ast::InlineFragment]
    InlineFragment,
    /// See: [crate::ast::Directive]
    Directive,
    /// See: [crate::ast::Argument]
    Argument,
    /// See: [crate::ast::ObjectField]
    ObjectField,
    /// See: [crate::ast::Variable]
    Variable,
}

impl fmt::Display for ASTKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ASTKind::Document => f.write_str("Document"),
            ASTKind::OperationDefinition => f.write_str("Operation Definition"),
            ASTKind::FragmentDefinition => f.write_str("Fragment Definition"),
            ASTKind::VariableDefinition => f.write_str("Variable Definition"),
            ASTKind::SelectionSet => f.write_str("Selection Set"),
            ASTKind::Field => f.write_str("Field"),
            ASTKind::FragmentSpread => f.write_str("Fragment Spread"),
            ASTKind::InlineFragment => f.write_str("Inline Fragment"),
            ASTKind::Directive => f.write_str("Directive"),
            ASTKind::Argument => f.write_str("Argument"),
            ASTKind::ObjectField => f.write_str("Object Field"),
            ASTKind::Variable => f.write_str("Variable"),
        }
    }
}
