use crate::{
    ast::OperationKind,
    error::{Error, ErrorType, Result},
};

use super::{OutputType, Schema, SchemaField};

/// Schema Reference
///
/// A stateful traverser that may be used to traverse a schema as a query is traversed. It supports
/// diving into types by specifying fields and fragment conditions. As a query is traversed it
/// keeps a stack of previous types, hence, as fields and fragments are traversed it can keep track
/// of the current type that a selection set is operating on.
///
/// Types that the schema doesn't know are tracked as `None`, so that a document referring to
/// unknown fields or types can still be traversed to its end.
#[derive(Clone)]
pub struct SchemaReference<'a> {
    output_stack: Vec<Option<OutputType<'a>>>,
    schema: &'a Schema<'a>,
}

impl<'a> SchemaReference<'a> {
    /// Create a schema reference that doesn't point at any type yet.
    #[inline]
    pub fn new(schema: &'a Schema<'a>) -> Self {
        SchemaReference {
            schema,
            output_stack: Vec::with_capacity(32),
        }
    }

    /// Returns the current pointer's referenced [OutputType], if it's known.
    #[inline]
    pub fn output_type(&self) -> Option<OutputType<'a>> {
        self.output_stack.last().copied().flatten()
    }

    /// Enter the root type of the given kind of operation and return it.
    #[inline]
    pub fn select_root(&mut self, operation_kind: OperationKind) -> Option<OutputType<'a>> {
        let output_type = self
            .schema
            .get_root_type(operation_kind)
            .map(OutputType::Object);
        self.output_stack.push(output_type);
        output_type
    }

    /// Enter a type condition by its name, or re-enter the current type when no type condition is
    /// given, as is the case for inline fragments without one.
    pub fn select_condition(&mut self, type_name: Option<&str>) -> Option<OutputType<'a>> {
        let output_type = match type_name {
            Some(type_name) => self
                .schema
                .get_type(type_name)
                .and_then(|schema_type| schema_type.output_type()),
            None => self.output_type(),
        };
        self.output_stack.push(output_type);
        output_type
    }

    /// Returns a field, if possible, on the current [OutputType].
    #[inline]
    pub fn get_field(&self, field_name: &str) -> Option<&'a SchemaField<'a>> {
        self.output_type()
            .and_then(|output_type| output_type.get_field(field_name))
    }

    /// Traverse deeper by selecting a field on the current [OutputType] and return the field's
    /// definition.
    ///
    /// Unknown fields are entered as unknown types. A known field whose output type is missing
    /// from the schema is an inconsistency in the schema itself and returns an internal error.
    pub fn select_field(&mut self, field_name: &str) -> Result<Option<&'a SchemaField<'a>>> {
        let field = self.get_field(field_name);
        let output_type = match field {
            Some(field) => {
                let of_type = field
                    .output_type
                    .of_type(self.schema)
                    .and_then(|schema_type| schema_type.output_type());
                match of_type {
                    Some(of_type) => Some(of_type),
                    None => {
                        return Err(Error::new(
                            format!(
                                "Field '{}' refers to '{}', which isn't an output type in the schema",
                                field.name,
                                field.output_type.name()
                            ),
                            Some(ErrorType::Internal),
                        ))
                    }
                }
            }
            None => None,
        };
        self.output_stack.push(output_type);
        Ok(field)
    }

    /// Leave the current type and return to the previously pointed at output type.
    #[inline]
    pub fn leave_type(&mut self) -> Option<OutputType<'a>> {
        self.output_stack.pop();
        self.output_type()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::ASTContext;
    use crate::fixture::build_schema;
    use crate::schema::{SchemaField, SchemaFields, SchemaObject, SchemaType, TypeRef};

    #[test]
    fn walk_schema() {
        let ctx = ASTContext::new();
        let schema = build_schema(&ctx);

        let mut schema_ref = SchemaReference::new(&schema);
        assert_eq!(schema_ref.output_type(), None);

        let query = schema_ref.select_root(OperationKind::Query).unwrap();
        assert_eq!(query.name(), "Query");

        let user = schema_ref.select_field("user").unwrap().unwrap();
        assert_eq!(user.name, "user");
        assert_eq!(schema_ref.output_type().unwrap().name(), "User");

        assert!(schema_ref.select_field("friends").unwrap().is_some());
        assert_eq!(schema_ref.output_type().unwrap().name(), "User");

        assert_eq!(schema_ref.leave_type().unwrap().name(), "User");
        assert_eq!(schema_ref.leave_type().unwrap().name(), "Query");
        assert_eq!(schema_ref.leave_type(), None);
    }

    #[test]
    fn unknown_types_are_tracked() {
        let ctx = ASTContext::new();
        let schema = build_schema(&ctx);

        let mut schema_ref = SchemaReference::new(&schema);
        assert_eq!(schema_ref.select_root(OperationKind::Subscription), None);
        assert_eq!(schema_ref.select_field("anything").unwrap(), None);
        assert_eq!(schema_ref.output_type(), None);
        assert_eq!(schema_ref.leave_type(), None);
        assert_eq!(schema_ref.leave_type(), None);

        assert_eq!(schema_ref.select_condition(Some("Nope")), None);
        assert_eq!(
            schema_ref.select_condition(Some("User")).map(|x| x.name()),
            Some("User")
        );
        assert_eq!(
            schema_ref.select_condition(None).map(|x| x.name()),
            Some("User")
        );
    }

    #[test]
    fn dangling_type_is_internal_error() {
        let ctx = ASTContext::new();
        let mut query = SchemaObject::new("Query");
        query.add_field(&ctx, SchemaField::new("ghost", ctx.alloc(TypeRef::Type("Ghost"))));
        let query = ctx.alloc(query);
        let mut schema = Schema::new();
        schema.set_root_type(&ctx, OperationKind::Query, query);
        assert!(matches!(schema.get_type("Query"), Some(SchemaType::Object(_))));

        let mut schema_ref = SchemaReference::new(&schema);
        schema_ref.select_root(OperationKind::Query);
        let error = schema_ref.select_field("ghost").unwrap_err();
        assert_eq!(error.error_type(), ErrorType::Internal);
        assert_eq!(
            error.message(),
            "Field 'ghost' refers to 'Ghost', which isn't an output type in the schema"
        );
    }
}
