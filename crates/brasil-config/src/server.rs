use serde::Deserialize;

/// Identity the MCP server reports to clients
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Server name in the MCP handshake
    #[serde(default = "default_name")]
    pub name: String,
    /// Optional instructions shown to the calling agent
    #[serde(default)]
    pub instructions: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            instructions: None,
        }
    }
}

fn default_name() -> String {
    "MCP Brasil".to_string()
}
