use std::path::PathBuf;

use clap::Parser;

/// MCP Brasil
#[derive(Debug, Parser)]
#[command(name = "mcp-brasil", about = "MCP server for Brazilian government open data", version)]
pub struct Args {
    /// Path to a TOML configuration file (defaults are used when omitted)
    #[arg(short, long, env = "BRASIL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log filter directive, overriding `log.filter` (e.g. `brasil_bcb=debug`)
    #[arg(long, env = "BRASIL_LOG")]
    pub log_filter: Option<String>,
}
