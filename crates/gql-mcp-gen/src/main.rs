use std::io::IsTerminal as _;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use gql_mcp_gen::Generator;
use runtime::logging::LoggingLayerBuilder;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod runtime;

/// Clap styling
const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

/// Arguments to the generator
#[derive(Debug, Parser)]
#[command(
    version,
    styles = STYLES,
    about = "Generate MCP tools from GraphQL schemas",
)]
struct Args {
    /// Path to the config file
    #[arg(long, short = 'c', env = "GQL_MCP_CONFIG", default_value = ".gql-gen-mcp.yaml")]
    config: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = runtime::read_config(&args.config)
        .with_context(|| format!("Could not read config {}", args.config.display()))?;

    let logging_layer = LoggingLayerBuilder::new()
        .with_ansi_enabled(std::io::stderr().is_terminal())
        .build(&config.logging);
    tracing_subscriber::registry()
        .with(logging_layer)
        .with(config.logging.env_filter())
        .try_init()?;

    if config.schemas.is_empty() {
        warn!(config = %args.config.display(), "No schemas configured");
    }

    for schema in &config.schemas {
        Generator::new(&schema.name, &schema.dir, &schema.output)
            .run()
            .with_context(|| format!("Could not generate tools for schema {}", schema.name))?;
    }

    info!(schemas = config.schemas.len(), "Generation complete");
    Ok(())
}
