//! Tools
//!
//! This module compiles the root fields of a GraphQL schema into MCP tool
//! descriptors. Every field of the Query and Mutation root types becomes one
//! [`Tool`] carrying typed arguments and a ready-to-send operation document
//! that selects every reachable field of the result type.

mod arguments;
mod classify;
mod cycles;
mod fields;
mod query;

use apollo_compiler::{
    Name, Schema,
    ast::{FieldDefinition, OperationType},
    schema::ExtendedType,
};
use serde::{Serialize, Serializer};
use tracing::{debug, info};

use crate::errors::ToolError;

pub use classify::ArgKind;
pub use cycles::CycleTable;

/// Root fields that belong to GraphQL introspection and never become tools
const INTROSPECTION_FIELDS: [&str; 2] = ["__schema", "__type"];

/// An invocable action derived from a single root field
#[derive(Debug, Clone, Serialize)]
pub struct Tool {
    /// The name of the root field
    pub name: String,

    /// The field description, flattened onto a single line
    pub description: String,

    /// The root type the field was declared on
    #[serde(serialize_with = "serialize_operation_type")]
    pub operation: OperationType,

    /// One entry per field argument, in declaration order
    pub args: Vec<ToolArg>,

    /// The GraphQL document to send when the tool is invoked
    pub query: String,
}

/// A single tool argument.
///
/// `properties` holds the rendered property map of an [`ArgKind::Object`]
/// argument, `items` the rendered element schema of an [`ArgKind::Array`]
/// argument and `enum_values` the allowed values of an [`ArgKind::Enum`]
/// argument. At most one of them is populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolArg {
    pub name: String,
    pub description: String,
    pub kind: ArgKind,
    pub required: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub properties: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub items: String,
}

/// Compile every root query and mutation field of a schema into a tool.
///
/// Query fields come first, then mutation fields, each in declaration order.
/// Any unresolvable or unsupported type aborts the whole run.
pub fn tools_for_schema(schema: &Schema) -> Result<Vec<Tool>, ToolError> {
    let cycles = CycleTable::build(schema);

    let mut tools = Vec::new();
    for operation in [OperationType::Query, OperationType::Mutation] {
        let Some(root) = schema
            .root_operation(operation)
            .and_then(|name| schema.get_object(name))
        else {
            continue;
        };

        for field in root.fields.values() {
            if INTROSPECTION_FIELDS.contains(&field.name.as_str()) {
                continue;
            }
            tools.push(tool_from_field(&field.node, operation, schema, &cycles)?);
        }
    }

    info!(count = tools.len(), "Compiled tools from schema");
    Ok(tools)
}

fn tool_from_field(
    field: &FieldDefinition,
    operation: OperationType,
    schema: &Schema,
    cycles: &CycleTable,
) -> Result<Tool, ToolError> {
    let args = field
        .arguments
        .iter()
        .map(|argument| arguments::resolve(argument, schema))
        .collect::<Result<Vec<_>, _>>()?;
    let query = query::operation_document(field, operation, schema, cycles)?;

    debug!(
        tool = field.name.as_str(),
        operation = operation_keyword(operation),
        args = args.len(),
        characters = query.len(),
        "Generated tool"
    );

    Ok(Tool {
        name: field.name.to_string(),
        description: single_line(field.description.as_deref()),
        operation,
        args,
        query,
    })
}

/// The keyword that opens an operation document of the given type
pub(crate) fn operation_keyword(operation: OperationType) -> &'static str {
    match operation {
        OperationType::Query => "query",
        OperationType::Mutation => "mutation",
        OperationType::Subscription => "subscription",
    }
}

fn serialize_operation_type<S: Serializer>(
    operation: &OperationType,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(operation_keyword(*operation))
}

/// Replace every newline of a description with a space
pub(crate) fn single_line(description: Option<&str>) -> String {
    description
        .map(|description| description.replace('\n', " "))
        .unwrap_or_default()
}

/// Look up a named type, failing when the schema does not define it
pub(crate) fn lookup<'a>(schema: &'a Schema, name: &Name) -> Result<&'a ExtendedType, ToolError> {
    schema
        .types
        .get(name)
        .ok_or_else(|| ToolError::unknown_type(name))
}
