use apollo_compiler::Name;

/// An error raised while compiling a schema into tools.
///
/// Every variant means the schema is inconsistent or uses a construct that
/// cannot be expressed as a tool argument. None of them are recoverable: the
/// generation run for the schema is aborted and nothing is emitted.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Type {type_name} not found in schema")]
    UnknownType { type_name: Name },

    #[error("Type {type_name} ({kind}) cannot be used as a tool argument")]
    UnsupportedArgumentType {
        type_name: Name,
        kind: &'static str,
    },

    #[error("Argument {argument} of tool {tool} has an invalid JSON schema: {source}")]
    InvalidArgumentSchema {
        tool: String,
        argument: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ToolError {
    pub(crate) fn unknown_type(type_name: &Name) -> Self {
        ToolError::UnknownType {
            type_name: type_name.clone(),
        }
    }
}
