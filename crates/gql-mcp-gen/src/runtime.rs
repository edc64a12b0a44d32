//! Runtime utilities
//!
//! This module is only used by the main binary and provides helper code
//! related to runtime configuration.

mod config;
pub mod logging;

use std::path::Path;

pub use config::Config;
use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};

/// Separator to use when drilling down into nested options in the env figment
const ENV_NESTED_SEPARATOR: &str = "__";

/// Prefix of the environment variables that override the config file
const ENV_PREFIX: &str = "GQL_MCP_";

/// Read in a config from a YAML file, filling in any missing values from the environment.
///
/// A missing file is treated as empty, so the whole config can come from the environment.
#[allow(clippy::result_large_err)]
pub fn read_config(yaml_path: impl AsRef<Path>) -> Result<Config, figment::Error> {
    Figment::new()
        .join(Env::prefixed(ENV_PREFIX).split(ENV_NESTED_SEPARATOR))
        .join(Yaml::file(yaml_path))
        .extract()
}

#[cfg(test)]
mod test {
    use super::read_config;
    use std::path::PathBuf;
    use tracing::Level;

    #[test]
    fn it_reads_schemas_from_file() {
        let config = r#"
            schemas:
              - name: bookstore
                dir: ./schema
                output: ./generated
              - name: inventory
                dir: ./inventory/schema
                output: ./inventory/generated
        "#;

        figment::Jail::expect_with(move |jail| {
            let path = ".gql-gen-mcp.yaml";
            jail.create_file(path, config)?;

            let config = read_config(path)?;

            let names: Vec<_> = config.schemas.iter().map(|s| s.name.as_str()).collect();
            assert_eq!(names, ["bookstore", "inventory"]);
            assert_eq!(config.schemas[0].dir, PathBuf::from("./schema"));
            assert_eq!(config.schemas[1].output, PathBuf::from("./inventory/generated"));
            assert_eq!(config.logging.level, Level::INFO);
            Ok(())
        });
    }

    #[test]
    fn it_prioritizes_env_vars() {
        let config = "
            schemas: []
            logging:
              level: info
        ";

        figment::Jail::expect_with(move |jail| {
            let path = "config.yaml";

            jail.create_file(path, config)?;
            jail.set_env("GQL_MCP_LOGGING__LEVEL", "debug");

            let config = read_config(path)?;

            assert_eq!(config.logging.level, Level::DEBUG);
            Ok(())
        });
    }

    #[test]
    fn it_reads_from_env_without_a_file() {
        figment::Jail::expect_with(move |jail| {
            jail.set_env("GQL_MCP_LOGGING__FORMAT", "json");

            let config = read_config("missing.yaml")?;

            assert!(config.schemas.is_empty());
            insta::assert_debug_snapshot!(config.logging, @r"
            Logging {
                level: Level(
                    Info,
                ),
                format: Json,
            }
            ");
            Ok(())
        });
    }

    #[test]
    fn it_rejects_a_schema_without_output() {
        let config = "
            schemas:
              - name: bookstore
                dir: ./schema
        ";

        figment::Jail::expect_with(move |jail| {
            let path = "config.yaml";
            jail.create_file(path, config)?;

            let err = read_config(path).unwrap_err();

            assert!(err.to_string().contains("output"));
            Ok(())
        });
    }
}
