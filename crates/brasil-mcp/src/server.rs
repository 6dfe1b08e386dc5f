use std::sync::Arc;

use brasil_config::Config;
use brasil_core::SourceError;
use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, Implementation, ListResourcesResult, ListToolsResult,
    PaginatedRequestParam, ProtocolVersion, ReadResourceRequestParam, ReadResourceResult, ServerCapabilities,
    ServerInfo, Tool,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData, RoleServer, ServerHandler};

use crate::{
    docs,
    error::ToolError,
    tools::{CATALOG, ToolSpec, Toolbox},
};

/// MCP server exposing the Brazilian open-data tools
#[derive(Debug, Clone)]
pub struct BrasilServer {
    toolbox: Arc<Toolbox>,
    tools: Arc<[Tool]>,
    name: String,
    instructions: Option<String>,
}

impl BrasilServer {
    /// Build the adapters and the tool catalog from configuration
    pub fn new(config: &Config) -> Result<Self, SourceError> {
        let toolbox = Toolbox::new(config)?;

        tracing::info!(
            tools = CATALOG.len(),
            transparency_key = toolbox.transparencia().has_api_key(),
            "MCP server initialized"
        );

        Ok(Self {
            toolbox: Arc::new(toolbox),
            tools: CATALOG.iter().map(ToolSpec::to_tool).collect(),
            name: config.server.name.clone(),
            instructions: config.server.instructions.clone(),
        })
    }

    /// Run one tool call and shape the outcome for the client
    ///
    /// Adapter failures become an error result the agent can read; unknown
    /// tools and malformed arguments are protocol errors.
    async fn run_tool(
        &self,
        request: CallToolRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        let name = request.name;
        let arguments = request.arguments.unwrap_or_default();

        tracing::debug!(tool = %name, "tool call");

        let outcome = self.toolbox.call_cancellable(&name, arguments, &context.ct).await;

        match outcome {
            Ok(envelope) => {
                let text = serde_json::to_string_pretty(&envelope)
                    .map_err(|e| ErrorData::internal_error(format!("encoding result: {e}"), None))?;
                Ok(CallToolResult::success(vec![Content::text(text)]))
            }
            Err(error) => {
                if let Some(protocol) = error.to_protocol_error() {
                    tracing::debug!(tool = %name, "rejected tool call: {error}");
                    return Err(protocol);
                }

                if let ToolError::Source(source) = &error {
                    tracing::warn!(tool = %name, kind = source.kind(), "tool call failed: {error}");
                }
                Ok(CallToolResult::error(vec![Content::text(format!("Error: {error}"))]))
            }
        }
    }
}

impl ServerHandler for BrasilServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().enable_resources().build(),
            server_info: Implementation {
                name: self.name.clone(),
                version: env!("CARGO_PKG_VERSION").to_owned(),
                ..Implementation::from_build_env()
            },
            instructions: self.instructions.clone(),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult::with_all_items(self.tools.to_vec()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        self.run_tool(request, context).await
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, ErrorData> {
        Ok(ListResourcesResult::with_all_items(vec![docs::resource()]))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, ErrorData> {
        if request.uri != docs::DOCS_URI {
            return Err(ErrorData::resource_not_found(
                format!("unknown resource: {}", request.uri),
                None,
            ));
        }

        Ok(ReadResourceResult {
            contents: vec![docs::contents()],
        })
    }
}
