//! In-process MCP client connected to `BrasilServer` over an in-memory pipe

use brasil_config::Config;
use brasil_mcp::BrasilServer;
use rmcp::model::{CallToolRequest, CallToolRequestParam, CallToolResult, ClientRequest, RawContent};
use rmcp::service::{PeerRequestOptions, RequestHandle, RoleClient, RunningService, ServiceError, ServiceExt as _};
use serde_json::Value;

/// A running server with a connected client
pub struct TestServer {
    client: RunningService<RoleClient, ()>,
}

impl TestServer {
    pub async fn start(config: Config) -> anyhow::Result<Self> {
        let server = BrasilServer::new(&config)?;
        let (server_io, client_io) = tokio::io::duplex(4096);

        tokio::spawn(async move {
            if let Ok(service) = server.serve(server_io).await {
                service.waiting().await.ok();
            }
        });

        let client = ().serve(client_io).await?;

        Ok(Self { client })
    }

    pub fn client(&self) -> &RunningService<RoleClient, ()> {
        &self.client
    }

    /// Call a tool; `arguments` must be a JSON object or null
    pub async fn call(&self, name: &str, arguments: Value) -> Result<CallToolResult, ServiceError> {
        self.client.call_tool(request(name, arguments)).await
    }

    /// Send a tool call without waiting for it, keeping a handle to cancel it
    pub async fn start_call(&self, name: &str, arguments: Value) -> Result<RequestHandle<RoleClient>, ServiceError> {
        let request = ClientRequest::CallToolRequest(CallToolRequest::new(request(name, arguments)));
        self.client
            .send_cancellable_request(request, PeerRequestOptions::no_options())
            .await
    }

    /// Call a tool that must succeed and parse its JSON text
    pub async fn call_json(&self, name: &str, arguments: Value) -> Value {
        let result = self.call(name, arguments).await.expect("tool call");
        assert_ne!(result.is_error, Some(true), "{name} failed: {}", text(&result));
        serde_json::from_str(&text(&result)).expect("tool result is JSON")
    }
}

fn request(name: &str, arguments: Value) -> CallToolRequestParam {
    let arguments = match arguments {
        Value::Object(map) => Some(map),
        _ => None,
    };

    CallToolRequestParam {
        name: name.to_owned().into(),
        arguments,
    }
}

/// Concatenated text content of a tool result
pub fn text(result: &CallToolResult) -> String {
    result
        .content
        .iter()
        .filter_map(|c| match &c.raw {
            RawContent::Text(t) => Some(t.text.as_str()),
            _ => None,
        })
        .collect()
}
