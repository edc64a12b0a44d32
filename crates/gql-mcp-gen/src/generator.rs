//! Tool manifest generation

use std::path::{Path, PathBuf};

use apollo_compiler::Schema;
use gql_mcp_tools::{Tool, tools_for_schema};
use rmcp::model::JsonObject;
use serde::Serialize;
use tracing::{debug, info};

use crate::errors::GenError;
use crate::schema_source::load_schema;

/// File name of the manifest written to each output directory
pub const MANIFEST_FILE: &str = "tools.json";

/// A tool as written to the manifest, alongside its MCP input schema
#[derive(Debug, Serialize)]
struct ManifestEntry<'a> {
    #[serde(flatten)]
    tool: &'a Tool,
    input_schema: JsonObject,
}

/// Generates the tool manifest of a single schema directory
pub struct Generator {
    name: String,
    dir: PathBuf,
    output: PathBuf,
}

impl Generator {
    pub fn new(name: impl Into<String>, dir: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            dir: dir.into(),
            output: output.into(),
        }
    }

    /// Load the schema, compile its tools and write the manifest.
    ///
    /// Nothing is written unless every tool compiles.
    pub fn run(&self) -> Result<Vec<Tool>, GenError> {
        info!(schema = %self.name, dir = %self.dir.display(), "Loading schema");
        let schema = load_schema(&self.dir)?;

        let tools = self.compile(&schema)?;
        let path = write_manifest(&self.output, &tools)?;

        info!(
            schema = %self.name,
            tools = tools.len(),
            path = %path.display(),
            "Wrote tool manifest"
        );
        Ok(tools)
    }

    fn compile(&self, schema: &Schema) -> Result<Vec<Tool>, GenError> {
        let tools = tools_for_schema(schema)?;
        for tool in &tools {
            debug!(schema = %self.name, tool = %tool.name, "Compiled tool");
        }
        Ok(tools)
    }
}

/// Write `tools` as pretty JSON to the manifest file in `output`, creating the
/// directory when needed
pub fn write_manifest(output: &Path, tools: &[Tool]) -> Result<PathBuf, GenError> {
    let entries = tools
        .iter()
        .map(|tool| {
            Ok(ManifestEntry {
                tool,
                input_schema: tool.input_schema()?,
            })
        })
        .collect::<Result<Vec<_>, GenError>>()?;
    let json = serde_json::to_string_pretty(&entries)?;

    let path = output.join(MANIFEST_FILE);
    let write_error = |source| GenError::Write {
        path: path.clone(),
        source,
    };
    std::fs::create_dir_all(output).map_err(write_error)?;
    std::fs::write(&path, json).map_err(write_error)?;

    Ok(path)
}
