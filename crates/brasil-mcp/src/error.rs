use brasil_core::SourceError;
use rmcp::ErrorData;
use thiserror::Error;

/// Failure of a single tool call
#[derive(Debug, Error)]
pub enum ToolError {
    /// No tool with this name is registered
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// Arguments did not match the tool's input schema
    #[error("invalid arguments for {tool}: {message}")]
    InvalidArguments { tool: String, message: String },

    /// The adapter behind the tool failed
    #[error(transparent)]
    Source(#[from] SourceError),
}

impl ToolError {
    /// Protocol-level error, for failures the caller must fix in the request itself
    ///
    /// Returns `None` for adapter failures, which are reported inside the tool result.
    pub fn to_protocol_error(&self) -> Option<ErrorData> {
        match self {
            Self::UnknownTool(_) | Self::InvalidArguments { .. } => {
                Some(ErrorData::invalid_params(self.to_string(), None))
            }
            Self::Source(_) => None,
        }
    }
}
