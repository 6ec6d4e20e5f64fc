use crate::error::Location;
use crate::validate::ValidationError;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{json, Value as JSValue};
use std::slice;

/// Trait for converting validation errors to [serde_json::Value]s.
pub trait ValueFromError {
    /// Convert the current error or errors to a [serde_json::Value] in the shape of GraphQL
    /// response errors.
    fn to_json(&self) -> JSValue;
}

impl<'a> ValueFromError for ValidationError<'a> {
    #[inline]
    fn to_json(&self) -> JSValue {
        json!({
            "message": self.message,
            "locations": locations(&self.location),
            "path": self.path,
        })
    }
}

impl<'a> ValueFromError for [ValidationError<'a>] {
    #[inline]
    fn to_json(&self) -> JSValue {
        JSValue::Array(self.iter().map(|error| error.to_json()).collect())
    }
}

/// Convert a list of [ValidationError]s to a JSON array of GraphQL response errors.
#[inline]
pub fn errors_to_value(errors: &[ValidationError]) -> JSValue {
    errors.to_json()
}

impl<'a> Serialize for ValidationError<'a> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("message", self.message)?;
        map.serialize_entry("locations", locations(&self.location))?;
        map.serialize_entry("path", self.path)?;
        map.end()
    }
}

#[inline]
fn locations(location: &Option<Location>) -> &[Location] {
    match location {
        Some(location) => slice::from_ref(location),
        None => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::ASTContext;
    use crate::fixture::{build_schema, parse};
    use crate::validate::validate;

    #[test]
    fn error_shape() {
        let error = ValidationError {
            message: "Field 'user' doesn't accept argument 'name'",
            location: Some(Location::new(1, 3)),
            path: &["query", "user", "name"],
        };
        let expected = json!({
            "message": "Field 'user' doesn't accept argument 'name'",
            "locations": [{ "line": 1, "column": 3 }],
            "path": ["query", "user", "name"],
        });
        assert_eq!(error.to_json(), expected);
        assert_eq!(serde_json::to_value(error).unwrap(), expected);
    }

    #[test]
    fn error_without_location() {
        let error = ValidationError {
            message: "Somewhere",
            location: None,
            path: &[],
        };
        assert_eq!(
            serde_json::to_string(&error).unwrap(),
            r#"{"message":"Somewhere","locations":[],"path":[]}"#
        );
    }

    #[test]
    fn errors_of_a_run() {
        let ctx = ASTContext::new();
        let schema = build_schema(&ctx);
        let document = parse(&ctx, "query Q {\n  user(id: 1, x: 2) { id }\n}");
        let errors = validate(&ctx, document, &schema).unwrap();
        assert_eq!(serde_json::to_value(&errors).unwrap(), errors_to_value(&errors));
        assert_eq!(
            errors_to_value(&errors),
            json!([{
                "message": "Field 'user' doesn't accept argument 'x'",
                "locations": [{ "line": 2, "column": 3 }],
                "path": ["query Q", "user", "x"],
            }])
        );
    }
}
