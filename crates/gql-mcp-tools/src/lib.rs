#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod errors;
pub mod mcp;
pub mod tools;

pub use errors::ToolError;
pub use tools::{ArgKind, CycleTable, Tool, ToolArg, tools_for_schema};
