//! Logging config and utilities
//!
//! This module is only used by the main binary and provides logging config structures and setup
//! helper functions

mod defaults;
mod format_style;
mod parsers;

pub use format_style::FormatStyle;
use serde::Deserialize;
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{EnvFilter, Layer as LayerTrait, Registry};

/// Logging related options
#[derive(Debug, Deserialize)]
pub struct Logging {
    /// The log level to use for tracing
    #[serde(
        default = "defaults::log_level",
        deserialize_with = "parsers::from_str"
    )]
    pub level: Level,

    #[serde(default)]
    pub format: FormatStyle,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
            format: Default::default(),
        }
    }
}

pub type LoggingLayer = Box<dyn LayerTrait<Registry> + Send + Sync>;

pub struct LoggingLayerBuilder {
    writer: Option<BoxMakeWriter>,
    ansi_enabled: bool,
}

impl LoggingLayerBuilder {
    pub fn new() -> Self {
        Self {
            writer: None,
            ansi_enabled: false,
        }
    }

    // Used by unit tests to capture output. Without one, logs go to stderr.
    #[allow(dead_code)]
    pub fn with_writer<W>(mut self, mw: W) -> Self
    where
        W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
    {
        self.writer = Some(BoxMakeWriter::new(mw));
        self
    }

    pub fn with_ansi_enabled(mut self, enabled: bool) -> Self {
        self.ansi_enabled = enabled;
        self
    }

    pub fn build(self, logging: &Logging) -> LoggingLayer {
        let writer = self
            .writer
            .unwrap_or_else(|| BoxMakeWriter::new(std::io::stderr));

        let layer = tracing_subscriber::fmt::layer();
        match logging.format {
            FormatStyle::Full => layer
                .with_writer(writer)
                .with_ansi(self.ansi_enabled)
                .with_target(false)
                .boxed(),
            FormatStyle::Compact => layer
                .compact()
                .with_writer(writer)
                .with_ansi(self.ansi_enabled)
                .with_target(false)
                .boxed(),
            FormatStyle::Json => layer
                .json()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false)
                .boxed(),
            FormatStyle::Pretty => layer
                .pretty()
                .with_writer(writer)
                .with_ansi(self.ansi_enabled)
                .with_target(false)
                .boxed(),
        }
    }
}

impl Logging {
    /// The configured level, overridden per target by `RUST_LOG`
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::from_default_env().add_directive(self.level.into())
    }
}
