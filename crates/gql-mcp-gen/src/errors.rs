use std::fmt;
use std::path::PathBuf;

use apollo_compiler::{Schema, validation::WithErrors};
use gql_mcp_tools::ToolError;

/// Formats schema diagnostics one per line, without ariadne's source
/// rendering, which can split multi-byte characters.
struct SafeWithErrors<'a>(&'a WithErrors<Schema>);

impl fmt::Display for SafeWithErrors<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let errors = &self.0.errors;

        if errors.is_empty() {
            return write!(f, "Unknown error");
        }

        writeln!(f, "GraphQL validation errors:")?;
        for (i, diagnostic) in errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, diagnostic.error)?;
        }

        Ok(())
    }
}

/// An error while generating the tool manifest for one schema
#[derive(Debug, thiserror::Error)]
pub enum GenError {
    #[error("Could not read schema directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not read schema file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No .graphql or .graphqls files found in {0}")]
    NoSchemaFiles(PathBuf),

    #[error("Invalid GraphQL schema in {path}: {}", SafeWithErrors(.errors))]
    GraphQLSchema {
        path: PathBuf,
        errors: Box<WithErrors<Schema>>,
    },

    #[error(transparent)]
    Tool(#[from] ToolError),

    #[error("Could not serialize tools: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Could not write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
