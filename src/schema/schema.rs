use crate::ast::{ASTContext, OperationKind};
use hashbrown::{HashMap, HashSet};

/// Schema Definition
///
/// A schema is created from root types for each kind of operation, a set of named types, and a
/// set of directives, and is then used against AST documents for validation. In this library the
/// schema is never executable and serves only for metadata and type information.
/// [Reference](https://spec.graphql.org/October2021/#sec-Schema)
///
/// The definitions themselves are allocated on an [`ASTContext`] while the lookup maps live on
/// the heap, which keeps a finished schema `Sync`. Any number of validation runs may therefore
/// share one schema by reference across threads.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Schema<'a> {
    pub(crate) query_type: Option<&'a SchemaObject<'a>>,
    pub(crate) mutation_type: Option<&'a SchemaObject<'a>>,
    pub(crate) subscription_type: Option<&'a SchemaObject<'a>>,
    pub(crate) types: HashMap<&'a str, &'a SchemaType<'a>>,
    pub(crate) directives: HashMap<&'a str, &'a SchemaDirective<'a>>,
}

impl<'a> Schema<'a> {
    /// Creates an empty schema without any types, directives, or root types.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the schema is a default, empty schema
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
            && self.directives.is_empty()
            && self.query_type.is_none()
            && self.mutation_type.is_none()
            && self.subscription_type.is_none()
    }

    /// Returns the appropriate object type depending on the passed operation kind
    #[inline]
    pub fn get_root_type(&self, operation_kind: OperationKind) -> Option<&'a SchemaObject<'a>> {
        match operation_kind {
            OperationKind::Query => self.query_type,
            OperationKind::Mutation => self.mutation_type,
            OperationKind::Subscription => self.subscription_type,
        }
    }

    /// Retrieves a kind by name from known schema types.
    #[inline]
    pub fn get_type(&self, name: &str) -> Option<&'a SchemaType<'a>> {
        self.types.get(name).copied()
    }

    /// Retrieves a directive definition by its name, without the leading `@`.
    #[inline]
    pub fn get_directive(&self, name: &str) -> Option<&'a SchemaDirective<'a>> {
        self.directives.get(name).copied()
    }

    /// Adds a named type to the schema, replacing any type of the same name.
    pub fn add_type(&mut self, ctx: &'a ASTContext, schema_type: SchemaType<'a>) {
        self.types.insert(schema_type.name(), ctx.alloc(schema_type));
    }

    /// Adds a directive definition to the schema, replacing any directive of the same name.
    pub fn add_directive(&mut self, ctx: &'a ASTContext, directive: SchemaDirective<'a>) {
        self.directives.insert(directive.name, ctx.alloc(directive));
    }

    /// Sets the root type for the given kind of operation and registers it as a named type.
    pub fn set_root_type(
        &mut self,
        ctx: &'a ASTContext,
        operation_kind: OperationKind,
        object: &'a SchemaObject<'a>,
    ) {
        match operation_kind {
            OperationKind::Query => self.query_type = Some(object),
            OperationKind::Mutation => self.mutation_type = Some(object),
            OperationKind::Subscription => self.subscription_type = Some(object),
        }
        self.add_type(ctx, SchemaType::Object(object));
    }

    /// Adds the `@include` and `@skip` directives, which every GraphQL service supports, along
    /// with the `Boolean` scalar that their `if` argument accepts.
    pub fn add_builtin_directives(&mut self, ctx: &'a ASTContext) {
        if self.get_type("Boolean").is_none() {
            self.add_type(ctx, SchemaType::Scalar(ctx.alloc(SchemaScalar::new("Boolean"))));
        }
        let if_type = ctx.alloc(TypeRef::NonNullType(ctx.alloc(TypeRef::Type("Boolean"))));
        for name in ["include", "skip"] {
            let mut directive = SchemaDirective::new(name);
            directive.add_argument(SchemaInputField::new("if", if_type));
            self.add_directive(ctx, directive);
        }
    }
}

/// Generic trait for any schema type that implements fields
pub trait SchemaFields<'a>: Sized {
    /// Add a new [SchemaField] to the list of fields
    fn add_field(&mut self, ctx: &'a ASTContext, field: SchemaField<'a>);

    /// Get a map of all fields
    fn get_fields(&self) -> &HashMap<&'a str, &'a SchemaField<'a>>;

    /// Get a known field by name
    #[inline]
    fn get_field(&self, name: &str) -> Option<&'a SchemaField<'a>> {
        self.get_fields().get(name).copied()
    }
}

/// Generic trait for any schema definition that accepts arguments, which are field and directive
/// definitions.
///
/// Names are matched exactly. An argument name that wasn't declared is simply missing from the
/// map; deciding whether that's an error is left to validation rules.
pub trait SchemaArguments<'a> {
    /// Get a map of all declared arguments
    fn get_arguments(&self) -> &HashMap<&'a str, SchemaInputField<'a>>;

    /// Get a declared argument by name
    #[inline]
    fn get_argument(&self, name: &str) -> Option<&SchemaInputField<'a>> {
        self.get_arguments().get(name)
    }
}

/// An Object type definition.
///
/// Most types in GraphQL are objects and define a set of fields.
/// [Reference](https://spec.graphql.org/October2021/#sec-Objects)
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaObject<'a> {
    pub name: &'a str,
    pub(crate) fields: HashMap<&'a str, &'a SchemaField<'a>>,
}

impl<'a> SchemaObject<'a> {
    #[inline]
    pub fn new(name: &'a str) -> Self {
        SchemaObject {
            name,
            fields: HashMap::new(),
        }
    }
}

impl<'a> SchemaFields<'a> for SchemaObject<'a> {
    fn add_field(&mut self, ctx: &'a ASTContext, field: SchemaField<'a>) {
        self.fields.insert(field.name, ctx.alloc(field));
    }

    #[inline]
    fn get_fields(&self) -> &HashMap<&'a str, &'a SchemaField<'a>> {
        &self.fields
    }
}

/// An Interface type definition.
///
/// An interface declares fields that may be selected on it directly, whichever object type stands
/// in for it at runtime.
/// [Reference](https://spec.graphql.org/October2021/#sec-Interfaces)
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaInterface<'a> {
    pub name: &'a str,
    pub(crate) fields: HashMap<&'a str, &'a SchemaField<'a>>,
}

impl<'a> SchemaInterface<'a> {
    #[inline]
    pub fn new(name: &'a str) -> Self {
        SchemaInterface {
            name,
            fields: HashMap::new(),
        }
    }
}

impl<'a> SchemaFields<'a> for SchemaInterface<'a> {
    fn add_field(&mut self, ctx: &'a ASTContext, field: SchemaField<'a>) {
        self.fields.insert(field.name, ctx.alloc(field));
    }

    #[inline]
    fn get_fields(&self) -> &HashMap<&'a str, &'a SchemaField<'a>> {
        &self.fields
    }
}

/// An object Field type definition.
///
/// A field is like a function that given its arguments as input values produces an output value.
/// [Reference](https://spec.graphql.org/October2021/#FieldsDefinition)
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaField<'a> {
    pub name: &'a str,
    pub arguments: HashMap<&'a str, SchemaInputField<'a>>,
    pub output_type: &'a TypeRef<'a>,
}

impl<'a> SchemaField<'a> {
    #[inline]
    pub fn new(name: &'a str, output_type: &'a TypeRef<'a>) -> Self {
        SchemaField {
            name,
            arguments: HashMap::new(),
            output_type,
        }
    }

    pub fn add_argument(&mut self, arg: SchemaInputField<'a>) {
        self.arguments.insert(arg.name, arg);
    }
}

impl<'a> SchemaArguments<'a> for SchemaField<'a> {
    #[inline]
    fn get_arguments(&self) -> &HashMap<&'a str, SchemaInputField<'a>> {
        &self.arguments
    }
}

/// A Directive definition.
///
/// Directives annotate parts of a document, e.g. `@include(if: $flag)`, and declare the arguments
/// they accept the same way fields do.
/// [Reference](https://spec.graphql.org/October2021/#sec-Type-System.Directives)
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaDirective<'a> {
    /// The directive's name without the leading `@`.
    pub name: &'a str,
    pub arguments: HashMap<&'a str, SchemaInputField<'a>>,
}

impl<'a> SchemaDirective<'a> {
    #[inline]
    pub fn new(name: &'a str) -> Self {
        SchemaDirective {
            name,
            arguments: HashMap::new(),
        }
    }

    pub fn add_argument(&mut self, arg: SchemaInputField<'a>) {
        self.arguments.insert(arg.name, arg);
    }
}

impl<'a> SchemaArguments<'a> for SchemaDirective<'a> {
    #[inline]
    fn get_arguments(&self) -> &HashMap<&'a str, SchemaInputField<'a>> {
        &self.arguments
    }
}

/// A Union type definition.
///
/// A union stands in for one of several object types. Fields can't be selected on a union
/// directly, only inside fragments on its member types.
/// [Reference](https://spec.graphql.org/October2021/#sec-Unions)
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaUnion<'a> {
    pub name: &'a str,
}

impl<'a> SchemaUnion<'a> {
    #[inline]
    pub fn new(name: &'a str) -> Self {
        SchemaUnion { name }
    }
}

/// A Scalar type definition.
///
/// Scalars represent primitive leaf values in GraphQL that are represented with a specific
/// serializer and deserializer, which makes the values returnable to a GraphQL client or readable
/// by a GraphQL API.
/// [Reference](https://spec.graphql.org/October2021/#sec-Scalars)
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaScalar<'a> {
    pub name: &'a str,
}

impl<'a> SchemaScalar<'a> {
    #[inline]
    pub fn new(name: &'a str) -> Self {
        SchemaScalar { name }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct SchemaEnum<'a> {
    pub name: &'a str,
    pub values: HashSet<&'a str>,
}

impl<'a> SchemaEnum<'a> {
    #[inline]
    pub fn new(name: &'a str) -> Self {
        SchemaEnum {
            name,
            values: HashSet::new(),
        }
    }

    pub fn add_value(&mut self, value: &'a str) {
        self.values.insert(value);
    }
}

/// An Input Object type definition.
///
/// Inputs, such as arguments, may sometimes be nested and accept objects that must adhere to the
/// shape of an Input Object definition. This is often used to represent more complex inputs.
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-Objects)
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaInputObject<'a> {
    pub name: &'a str,
    pub fields: HashMap<&'a str, SchemaInputField<'a>>,
}

impl<'a> SchemaInputObject<'a> {
    #[inline]
    pub fn new(name: &'a str) -> Self {
        SchemaInputObject {
            name,
            fields: HashMap::new(),
        }
    }

    pub fn add_field(&mut self, field: SchemaInputField<'a>) {
        self.fields.insert(field.name, field);
    }
}

/// An input value definition, as used for arguments and input object fields.
///
/// [Reference](https://spec.graphql.org/October2021/#InputValueDefinition)
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct SchemaInputField<'a> {
    pub name: &'a str,
    pub input_type: &'a TypeRef<'a>,
    /// The default value's source text, if the definition declares one.
    pub default_value: Option<&'a str>,
}

impl<'a> SchemaInputField<'a> {
    #[inline]
    pub fn new(name: &'a str, input_type: &'a TypeRef<'a>) -> Self {
        SchemaInputField {
            name,
            input_type,
            default_value: None,
        }
    }

    /// Returns this input value with a default value attached.
    #[inline]
    pub fn with_default(self, default_value: &'a str) -> Self {
        SchemaInputField {
            default_value: Some(default_value),
            ..self
        }
    }

    /// Whether a value must be passed, which is the case for non-null inputs without defaults.
    #[inline]
    pub fn is_required(&self) -> bool {
        self.default_value.is_none() && matches!(self.input_type, TypeRef::NonNullType(_))
    }
}

/// A named type enum that represents all possible GraphQL definition types.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Types)
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum SchemaType<'a> {
    InputObject(&'a SchemaInputObject<'a>),
    Object(&'a SchemaObject<'a>),
    Union(&'a SchemaUnion<'a>),
    Interface(&'a SchemaInterface<'a>),
    Scalar(&'a SchemaScalar<'a>),
    Enum(&'a SchemaEnum<'a>),
}

impl<'a> SchemaType<'a> {
    #[inline]
    pub fn name(&self) -> &'a str {
        match self {
            SchemaType::InputObject(x) => x.name,
            SchemaType::Object(x) => x.name,
            SchemaType::Union(x) => x.name,
            SchemaType::Interface(x) => x.name,
            SchemaType::Scalar(x) => x.name,
            SchemaType::Enum(x) => x.name,
        }
    }

    pub fn output_type(&self) -> Option<OutputType<'a>> {
        match self {
            SchemaType::Object(x) => Some(OutputType::Object(x)),
            SchemaType::Union(x) => Some(OutputType::Union(x)),
            SchemaType::Interface(x) => Some(OutputType::Interface(x)),
            SchemaType::Scalar(x) => Some(OutputType::Scalar(x)),
            SchemaType::Enum(x) => Some(OutputType::Enum(x)),
            SchemaType::InputObject(_) => None,
        }
    }
}

/// An output type enum that represents all possible GraphQL definition types that a field may
/// return.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-and-Output-Types)
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum OutputType<'a> {
    Object(&'a SchemaObject<'a>),
    Union(&'a SchemaUnion<'a>),
    Interface(&'a SchemaInterface<'a>),
    Scalar(&'a SchemaScalar<'a>),
    Enum(&'a SchemaEnum<'a>),
}

impl<'a> OutputType<'a> {
    #[inline]
    pub fn name(&self) -> &'a str {
        match self {
            OutputType::Object(x) => x.name,
            OutputType::Union(x) => x.name,
            OutputType::Interface(x) => x.name,
            OutputType::Scalar(x) => x.name,
            OutputType::Enum(x) => x.name,
        }
    }

    /// Returns a field by name if this type has fields, which only objects and interfaces do.
    #[inline]
    pub fn get_field(&self, name: &str) -> Option<&'a SchemaField<'a>> {
        match self {
            OutputType::Object(object) => object.get_field(name),
            OutputType::Interface(interface) => interface.get_field(name),
            _ => None,
        }
    }
}

/// A reference to a named type, possibly wrapped in list or non-null modifiers.
///
/// Type references only hold names, so definitions may refer to each other in cycles. The named
/// type is looked up on a [Schema] lazily.
#[derive(Clone, Copy)]
pub enum TypeRef<'a> {
    Type(&'a str),
    ListType(&'a TypeRef<'a>),
    NonNullType(&'a TypeRef<'a>),
}

impl<'a> TypeRef<'a> {
    /// Returns the name of the named type inside all wrappers.
    #[inline]
    pub fn name(&self) -> &'a str {
        match self {
            TypeRef::Type(name) => name,
            TypeRef::ListType(of_type) => of_type.name(),
            TypeRef::NonNullType(of_type) => of_type.name(),
        }
    }

    /// Looks up the named type inside all wrappers on the given schema.
    #[inline]
    pub fn of_type(&self, schema: &Schema<'a>) -> Option<&'a SchemaType<'a>> {
        schema.get_type(self.name())
    }
}

/// This implementation is necessary to circuit break circular types.
/// Without this impl, `Debug` would print on and on, overflowing the stack as it's bouncing between types over and over.
impl<'a> std::fmt::Debug for TypeRef<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Type(arg0) => f.debug_tuple("Type").field(&arg0).finish(),
            Self::ListType(arg0) => f.debug_tuple("ListType").field(arg0).finish(),
            Self::NonNullType(arg0) => f.debug_tuple("NonNullType").field(arg0).finish(),
        }
    }
}

/// Type references are compared by type names only.
impl<'a> PartialEq for TypeRef<'a> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Type(left), Self::Type(right)) => left == right,
            (Self::ListType(left), Self::ListType(right)) => left == right,
            (Self::NonNullType(left), Self::NonNullType(right)) => left == right,
            _ => false,
        }
    }
}

/// A reference to the schema definition that a node in a document is checked against.
///
/// Validation rules receive this alongside each node: a type for operations, fragments, and
/// selection sets, a field definition for fields, and a directive definition for directives.
/// Arguments and the values inside them receive the definition of the field or directive that
/// owns them.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum DefinitionRef<'a> {
    Type(OutputType<'a>),
    Field(&'a SchemaField<'a>),
    Directive(&'a SchemaDirective<'a>),
}

impl<'a> DefinitionRef<'a> {
    /// The name of the referenced definition.
    #[inline]
    pub fn name(&self) -> &'a str {
        match self {
            DefinitionRef::Type(output_type) => output_type.name(),
            DefinitionRef::Field(field) => field.name,
            DefinitionRef::Directive(directive) => directive.name,
        }
    }

    /// Returns the declared arguments if the definition accepts any, which types don't.
    #[inline]
    pub fn arguments(&self) -> Option<&'a HashMap<&'a str, SchemaInputField<'a>>> {
        match *self {
            DefinitionRef::Type(_) => None,
            DefinitionRef::Field(field) => Some(&field.arguments),
            DefinitionRef::Directive(directive) => Some(&directive.arguments),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sync<T: Sync>(_: &T) {}

    #[test]
    fn schema_is_sync() {
        let ctx = ASTContext::new();
        let mut schema = Schema::new();
        schema.add_builtin_directives(&ctx);
        assert_sync(&schema);
    }

    #[test]
    fn argument_lookup_is_exact() {
        let ctx = ASTContext::new();
        let id = ctx.alloc(TypeRef::Type("ID"));
        let mut field = SchemaField::new("user", ctx.alloc(TypeRef::Type("User")));
        field.add_argument(SchemaInputField::new("id", id));

        assert!(field.get_argument("id").is_some());
        assert!(field.get_argument("Id").is_none());
        assert!(field.get_argument("uid").is_none());
    }

    #[test]
    fn required_inputs() {
        let ctx = ASTContext::new();
        let int = ctx.alloc(TypeRef::Type("Int"));
        let non_null = ctx.alloc(TypeRef::NonNullType(int));

        assert!(SchemaInputField::new("first", non_null).is_required());
        assert!(!SchemaInputField::new("first", non_null)
            .with_default("10")
            .is_required());
        assert!(!SchemaInputField::new("first", int).is_required());
    }

    #[test]
    fn builtin_directives() {
        let ctx = ASTContext::new();
        let mut schema = Schema::new();
        assert!(schema.is_empty());
        schema.add_builtin_directives(&ctx);

        let include = schema.get_directive("include").unwrap();
        assert!(include.get_argument("if").unwrap().is_required());
        assert!(schema.get_directive("skip").is_some());
        assert!(schema.get_directive("defer").is_none());
        assert!(matches!(
            schema.get_type("Boolean"),
            Some(SchemaType::Scalar(_))
        ));
    }

    #[test]
    fn root_types_and_fields() {
        let ctx = ASTContext::new();
        let mut query = SchemaObject::new("Query");
        query.add_field(&ctx, SchemaField::new("me", ctx.alloc(TypeRef::Type("User"))));
        let query = ctx.alloc(query);

        let mut node = SchemaInterface::new("Node");
        node.add_field(&ctx, SchemaField::new("id", ctx.alloc(TypeRef::Type("ID"))));

        let mut schema = Schema::new();
        schema.set_root_type(&ctx, OperationKind::Query, query);
        schema.add_type(&ctx, SchemaType::Interface(ctx.alloc(node)));

        assert_eq!(schema.get_root_type(OperationKind::Query), Some(&*query));
        assert_eq!(schema.get_root_type(OperationKind::Mutation), None);
        assert_eq!(schema.get_type("Query").map(|x| x.name()), Some("Query"));

        let field = OutputType::Object(query).get_field("me").unwrap();
        assert_eq!(field.output_type.of_type(&schema).map(|x| x.name()), Some("User"));

        let node = schema.get_type("Node").and_then(|x| x.output_type()).unwrap();
        assert!(node.get_field("id").is_some());
        assert!(node.get_field("name").is_none());
    }
}
