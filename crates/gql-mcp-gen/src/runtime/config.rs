use std::path::PathBuf;

use serde::Deserialize;

use super::logging::Logging;

/// Configuration for the generator
#[derive(Debug, Deserialize)]
pub struct Config {
    /// The schemas to generate tools for, processed in order
    #[serde(default)]
    pub schemas: Vec<SchemaConfig>,

    /// Logging configuration
    #[serde(default)]
    pub logging: Logging,
}

/// A single schema and where its manifest goes
#[derive(Debug, Deserialize)]
pub struct SchemaConfig {
    /// Label used in logs
    pub name: String,

    /// Directory holding the `.graphql` / `.graphqls` files
    pub dir: PathBuf,

    /// Directory receiving the generated manifest
    pub output: PathBuf,
}
