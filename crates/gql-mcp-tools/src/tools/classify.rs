use apollo_compiler::{Schema, ast::Type, schema::ExtendedType};
use serde::Serialize;

use crate::errors::ToolError;

/// The kind of value a tool argument accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgKind {
    String,
    Number,
    Boolean,
    Array,
    Object,
    Enum,
}

impl ArgKind {
    /// The JSON schema `type` used for this kind. Enums are transported as strings.
    pub fn property_type(self) -> &'static str {
        match self {
            ArgKind::String | ArgKind::Enum => "string",
            ArgKind::Number => "number",
            ArgKind::Boolean => "boolean",
            ArgKind::Array => "array",
            ArgKind::Object => "object",
        }
    }
}

/// Classify a type reference used as an argument or input field.
///
/// Lists are always arrays, whatever their element type. Custom scalars,
/// interfaces and unions cannot be expressed as tool arguments.
pub(crate) fn classify(ty: &Type, schema: &Schema) -> Result<ArgKind, ToolError> {
    if ty.is_list() {
        return Ok(ArgKind::Array);
    }

    let name = ty.inner_named_type();
    match name.as_str() {
        "String" | "ID" | "DateTime" => Ok(ArgKind::String),
        "Int" | "Float" => Ok(ArgKind::Number),
        "Boolean" => Ok(ArgKind::Boolean),
        _ => {
            let unsupported = |kind| ToolError::UnsupportedArgumentType {
                type_name: name.clone(),
                kind,
            };
            match schema.types.get(name) {
                Some(ExtendedType::Enum(_)) => Ok(ArgKind::Enum),
                Some(ExtendedType::Object(_) | ExtendedType::InputObject(_)) => Ok(ArgKind::Object),
                Some(ExtendedType::Scalar(_)) => Err(unsupported("scalar")),
                Some(ExtendedType::Interface(_)) => Err(unsupported("interface")),
                Some(ExtendedType::Union(_)) => Err(unsupported("union")),
                None => Err(ToolError::unknown_type(name)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apollo_compiler::{Name, validation::Valid};
    use rstest::{fixture, rstest};

    #[fixture]
    fn schema() -> Valid<Schema> {
        Schema::parse_and_validate(
            r#"
            scalar DateTime
            scalar JSON
            enum Genre { FICTION POETRY }
            input BookInput { title: String }
            type Book { title: String }
            interface Node { id: ID! }
            union Item = Book
            type Query { ping: String }
            "#,
            "schema.graphql",
        )
        .unwrap()
    }

    fn named(name: &str) -> Type {
        Type::Named(Name::new(name).unwrap())
    }

    #[rstest]
    #[case("String", ArgKind::String)]
    #[case("ID", ArgKind::String)]
    #[case("DateTime", ArgKind::String)]
    #[case("Int", ArgKind::Number)]
    #[case("Float", ArgKind::Number)]
    #[case("Boolean", ArgKind::Boolean)]
    #[case("Genre", ArgKind::Enum)]
    #[case("BookInput", ArgKind::Object)]
    #[case("Book", ArgKind::Object)]
    fn classifies_named_types(
        schema: Valid<Schema>,
        #[case] type_name: &str,
        #[case] expected: ArgKind,
    ) {
        assert_eq!(classify(&named(type_name), &schema).unwrap(), expected);
    }

    #[rstest]
    #[case(named("Int").list())]
    #[case(named("Genre").non_null().list().non_null())]
    #[case(named("BookInput").list().list())]
    fn lists_are_arrays(schema: Valid<Schema>, #[case] ty: Type) {
        assert_eq!(classify(&ty, &schema).unwrap(), ArgKind::Array);
    }

    #[rstest]
    #[case("JSON", "scalar")]
    #[case("Node", "interface")]
    #[case("Item", "union")]
    fn rejects_unsupported_types(
        schema: Valid<Schema>,
        #[case] type_name: &str,
        #[case] expected_kind: &str,
    ) {
        let err = classify(&named(type_name), &schema).unwrap_err();

        assert!(matches!(
            err,
            ToolError::UnsupportedArgumentType { kind, .. } if kind == expected_kind
        ));
    }

    #[rstest]
    fn rejects_unknown_types(schema: Valid<Schema>) {
        let err = classify(&named("Missing"), &schema).unwrap_err();

        assert_eq!(err.to_string(), "Type Missing not found in schema");
    }

    #[test]
    fn enum_is_transported_as_string() {
        assert_eq!(ArgKind::Enum.property_type(), "string");
        assert_eq!(ArgKind::Array.property_type(), "array");
    }
}
