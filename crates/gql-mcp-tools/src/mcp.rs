//! MCP projection
//!
//! Turns compiled tools into MCP tool definitions whose input schema lists
//! one property per argument.

use rmcp::model::{JsonObject, Tool as McpTool};
use serde_json::Value;

use crate::errors::ToolError;
use crate::tools::{Tool, ToolArg};

impl Tool {
    /// The JSON schema of the tool's input object
    pub fn input_schema(&self) -> Result<JsonObject, ToolError> {
        let mut properties = JsonObject::new();
        let mut required = Vec::new();
        for arg in &self.args {
            properties.insert(arg.name.clone(), Value::Object(self.arg_schema(arg)?));
            if arg.required {
                required.push(Value::from(arg.name.clone()));
            }
        }

        let mut schema = JsonObject::new();
        schema.insert("type".to_string(), "object".into());
        schema.insert("properties".to_string(), Value::Object(properties));
        if !required.is_empty() {
            schema.insert("required".to_string(), Value::Array(required));
        }
        Ok(schema)
    }

    /// Convert into an MCP tool definition
    pub fn to_mcp_tool(&self) -> Result<McpTool, ToolError> {
        Ok(McpTool::new(
            self.name.clone(),
            self.description.clone(),
            self.input_schema()?,
        ))
    }

    fn arg_schema(&self, arg: &ToolArg) -> Result<JsonObject, ToolError> {
        let mut schema = JsonObject::new();
        schema.insert("type".to_string(), arg.kind.property_type().into());
        if !arg.description.is_empty() {
            schema.insert("description".to_string(), arg.description.clone().into());
        }
        if !arg.enum_values.is_empty() {
            schema.insert("enum".to_string(), arg.enum_values.clone().into());
        }
        if !arg.properties.is_empty() {
            schema.insert("properties".to_string(), self.parse(arg, &arg.properties)?);
        }
        if !arg.items.is_empty() {
            schema.insert("items".to_string(), self.parse(arg, &arg.items)?);
        }
        Ok(schema)
    }

    fn parse(&self, arg: &ToolArg, rendered: &str) -> Result<Value, ToolError> {
        serde_json::from_str(rendered).map_err(|source| ToolError::InvalidArgumentSchema {
            tool: self.name.clone(),
            argument: arg.name.clone(),
            source,
        })
    }
}
