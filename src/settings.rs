// Process settings read from the environment.

use tracing_subscriber::EnvFilter;

use crate::generator::GeneratorOptions;
use crate::types::{DEFAULT_HEADER_COMMENT, DEFAULT_PROPERTIES_LOCATION};

pub mod envvars {
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
    pub const PROPERTIES_LOCATION: &str = "GRIDGEN_PROPERTIES_LOCATION";
    pub const HEADER_COMMENT: &str = "GRIDGEN_HEADER_COMMENT";
}

const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub properties_location: String,
    pub header_comment: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            properties_location: DEFAULT_PROPERTIES_LOCATION.to_string(),
            header_comment: DEFAULT_HEADER_COMMENT.to_string(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from `lookup`; unset or blank values keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self {
            properties_location: value(envvars::PROPERTIES_LOCATION)
                .unwrap_or(defaults.properties_location),
            header_comment: value(envvars::HEADER_COMMENT).unwrap_or(defaults.header_comment),
        }
    }

    pub fn generator_options(&self) -> GeneratorOptions {
        GeneratorOptions {
            properties_location: self.properties_location.clone(),
            header_comment: self.header_comment.clone(),
        }
    }
}

/// Initialize tracing subscriber writing to stderr.
///
/// Respects RUST_LOG if set, or LOG_LEVEL. Defaults to "info".
/// Stdout is reserved for the MCP transport.
pub fn init_tracing() {
    let log_level =
        std::env::var(envvars::LOG_LEVEL).unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&log_level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .compact()
        .init();
}
