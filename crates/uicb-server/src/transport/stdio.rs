//! Stdio Transport for MCP

use rmcp::ServiceExt;
use rmcp::transport::stdio;
use tracing::info;

use crate::UiComponentsServer;

/// Extension trait adding stdio serving to the server
pub trait StdioServerExt {
    /// Serve over stdin/stdout until the client disconnects
    #[allow(async_fn_in_trait)]
    async fn serve_stdio(self) -> Result<(), Box<dyn std::error::Error>>;
}

impl StdioServerExt for UiComponentsServer {
    async fn serve_stdio(self) -> Result<(), Box<dyn std::error::Error>> {
        info!("Starting MCP protocol server on stdio transport");

        let service = self
            .serve(stdio())
            .await
            .map_err(|e| format!("Failed to start MCP service: {e:?}"))?;

        info!("MCP server started, waiting for requests");
        service
            .waiting()
            .await
            .map_err(|e| format!("MCP service error: {e:?}"))?;

        info!("MCP server shutdown complete");
        Ok(())
    }
}
