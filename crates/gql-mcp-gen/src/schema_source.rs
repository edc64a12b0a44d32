//! Schema source loading
//!
//! A schema lives in a directory of SDL files. The files are concatenated in
//! file name order, federation directives are stripped and the result is
//! validated as a single schema.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use apollo_compiler::{Schema, validation::Valid};
use regex::Regex;
use tracing::{debug, warn};

use crate::errors::GenError;

/// File extensions recognised as GraphQL SDL
const SCHEMA_EXTENSIONS: [&str; 2] = ["graphql", "graphqls"];

#[allow(clippy::expect_used)]
static FEDERATION_DIRECTIVE_RE: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"@key\s*\([^)]*\)|@key\b|@external\b")
        .expect("FEDERATION_DIRECTIVE_RE is a valid regex")
});

/// Load and validate the schema stored in `dir`
pub fn load_schema(dir: &Path) -> Result<Valid<Schema>, GenError> {
    let files = schema_files(dir)?;
    if files.is_empty() {
        return Err(GenError::NoSchemaFiles(dir.to_path_buf()));
    }

    let mut sdl = String::new();
    for file in &files {
        debug!(path = %file.display(), "Reading schema file");
        let contents = std::fs::read_to_string(file).map_err(|source| GenError::ReadFile {
            path: file.clone(),
            source,
        })?;
        sdl.push_str(&contents);
        sdl.push('\n');
    }

    let sdl = strip_federation_directives(&sdl);
    Schema::parse_and_validate(sdl.into_owned(), dir).map_err(|errors| GenError::GraphQLSchema {
        path: dir.to_path_buf(),
        errors: Box::new(errors),
    })
}

/// The SDL files directly inside `dir`, sorted by file name
fn schema_files(dir: &Path) -> Result<Vec<PathBuf>, GenError> {
    let read_dir_error = |source| GenError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_dir_error)? {
        let path = entry.map_err(read_dir_error)?.path();
        if !path.is_file() {
            continue;
        }

        let is_schema = path
            .extension()
            .and_then(|extension| extension.to_str())
            .is_some_and(|extension| SCHEMA_EXTENSIONS.contains(&extension));
        if is_schema {
            files.push(path);
        } else {
            warn!(path = %path.display(), "Skipping non-schema file");
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Remove `@key(...)` and `@external`, which are declared by a federation
/// gateway rather than by the subgraph schema itself.
fn strip_federation_directives(sdl: &str) -> Cow<'_, str> {
    FEDERATION_DIRECTIVE_RE.replace_all(sdl, "")
}
