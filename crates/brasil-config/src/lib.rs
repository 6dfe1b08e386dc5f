#![allow(clippy::must_use_candidate)]

mod env;
pub mod http;
mod loader;
pub mod log;
pub mod server;
pub mod sources;

use serde::Deserialize;

pub use http::*;
pub use log::*;
pub use server::*;
pub use sources::*;

/// Environment variable consulted for the transparency API key when the
/// configuration file does not set one
pub const TRANSPARENCY_API_KEY_ENV: &str = "TRANSPARENCY_API_KEY";

/// Top-level MCP Brasil configuration
///
/// Every section is optional; an empty file (or no file at all) yields a
/// configuration that talks to the public upstream endpoints.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// MCP server identity
    #[serde(default)]
    pub server: ServerConfig,
    /// Outbound HTTP settings shared by all sources
    #[serde(default)]
    pub http: HttpConfig,
    /// Log output
    #[serde(default)]
    pub log: LogConfig,
    /// Per-source upstream settings
    #[serde(default)]
    pub sources: SourcesConfig,
}
