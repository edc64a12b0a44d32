//! Tool argument resolution
//!
//! Object and array arguments carry a JSON-schema-like description of their
//! shape, rendered as compact JSON text. Every entry is keyed by field name
//! and looks like `{"type": ..., "description": ..., "properties": ...}`,
//! where `properties`, `enum` and `items` only appear for object, enum and
//! array fields respectively.

use apollo_compiler::{
    Name, Schema,
    ast::{InputValueDefinition, Type},
};
use serde_json::{Map, Value};

use super::classify::{ArgKind, classify};
use super::fields::{SchemaField, fields_of};
use super::{ToolArg, lookup, single_line};
use crate::errors::ToolError;

/// Resolve a field argument into a tool argument
pub(crate) fn resolve(argument: &InputValueDefinition, schema: &Schema) -> Result<ToolArg, ToolError> {
    let ty: &Type = &argument.ty;
    let kind = classify(ty, schema)?;

    let mut tool_arg = ToolArg {
        name: argument.name.to_string(),
        description: single_line(argument.description.as_deref()),
        kind,
        required: ty.is_non_null(),
        enum_values: Vec::new(),
        properties: String::new(),
        items: String::new(),
    };

    let mut renderer = PropertyRenderer::new(schema);
    match kind {
        ArgKind::String | ArgKind::Number | ArgKind::Boolean => {}
        ArgKind::Object => {
            let properties = renderer
                .object_properties(ty.inner_named_type())?
                .unwrap_or_default();
            tool_arg.properties = Value::Object(properties).to_string();
        }
        ArgKind::Array => {
            let items = renderer.element(ty)?;
            tool_arg.items = Value::Object(items).to_string();
        }
        ArgKind::Enum => {
            tool_arg.enum_values = enum_values(schema, ty.inner_named_type())?;
        }
    }

    Ok(tool_arg)
}

/// The declared values of an enum, in declaration order
fn enum_values(schema: &Schema, name: &Name) -> Result<Vec<String>, ToolError> {
    schema
        .get_enum(name)
        .map(|definition| definition.values.keys().map(Name::to_string).collect())
        .ok_or_else(|| ToolError::unknown_type(name))
}

/// Renders property maps for input types, tracking the input objects being
/// expanded so that recursive inputs terminate.
struct PropertyRenderer<'a> {
    schema: &'a Schema,
    expanding: Vec<Name>,
}

impl<'a> PropertyRenderer<'a> {
    fn new(schema: &'a Schema) -> Self {
        Self {
            schema,
            expanding: Vec::new(),
        }
    }

    /// The property map of an object type, or `None` when the type is
    /// already being expanded further up.
    fn object_properties(&mut self, name: &Name) -> Result<Option<Map<String, Value>>, ToolError> {
        if self.expanding.contains(name) {
            return Ok(None);
        }

        let schema = self.schema;
        let fields = fields_of(lookup(schema, name)?);

        self.expanding.push(name.clone());
        let properties = self.properties(&fields);
        self.expanding.pop();

        properties.map(Some)
    }

    fn properties(&mut self, fields: &[SchemaField<'_>]) -> Result<Map<String, Value>, ToolError> {
        let mut properties = Map::new();
        for field in fields {
            let property = self.property(field.ty, field.description)?;
            properties.insert(field.name.to_string(), Value::Object(property));
        }
        Ok(properties)
    }

    fn property(&mut self, ty: &Type, description: Option<&str>) -> Result<Map<String, Value>, ToolError> {
        let kind = classify(ty, self.schema)?;

        let mut property = Map::new();
        property.insert("type".to_string(), kind.property_type().into());
        if let Some(description) = description.filter(|description| !description.is_empty()) {
            property.insert(
                "description".to_string(),
                single_line(Some(description)).into(),
            );
        }

        match kind {
            ArgKind::String | ArgKind::Number | ArgKind::Boolean => {}
            ArgKind::Object => {
                if let Some(properties) = self.object_properties(ty.inner_named_type())? {
                    property.insert("properties".to_string(), Value::Object(properties));
                }
            }
            ArgKind::Enum => {
                let values = enum_values(self.schema, ty.inner_named_type())?;
                property.insert("enum".to_string(), values.into());
            }
            ArgKind::Array => {
                property.insert("items".to_string(), Value::Object(self.element(ty)?));
            }
        }

        Ok(property)
    }

    /// The schema of a list's innermost element, without a name or description
    fn element(&mut self, list: &Type) -> Result<Map<String, Value>, ToolError> {
        let element = Type::Named(list.inner_named_type().clone());
        self.property(&element, None)
    }
}
