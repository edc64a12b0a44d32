//! Generates MCP tool manifests from directories of GraphQL schema files

pub mod errors;
pub mod generator;
pub mod schema_source;

pub use errors::GenError;
pub use generator::Generator;
