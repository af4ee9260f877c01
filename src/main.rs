//! gridgen MCP server: generate Spring XML configuration for data-grid clusters.

mod catalog;
mod generator;
mod settings;
mod tools;
mod types;

use rmcp::{
    handler::server::ServerHandler,
    model::{CallToolResult, Content},
    tool, tool_handler, tool_router,
    transport::stdio,
    ServiceExt,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::generator::GeneratorOptions;
use crate::settings::Settings;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
struct ClusterXmlParams {
    /// Cluster description as a JSON or YAML document
    cluster_config: String,
    /// Near cache configuration as a JSON or YAML document; makes the output a client node configuration (optional)
    #[serde(default)]
    client_near_config: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
struct CacheXmlParams {
    /// Cache description as a JSON or YAML document
    cache_config: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
struct ClusterParams {
    /// Cluster description as a JSON or YAML document
    cluster_config: String,
}

#[derive(Clone)]
struct GridGenMcpService {
    tool_router: rmcp::handler::server::tool::ToolRouter<Self>,
    options: GeneratorOptions,
}

#[tool_router]
impl GridGenMcpService {
    fn new(options: GeneratorOptions) -> Self {
        Self {
            tool_router: Self::tool_router(),
            options,
        }
    }

    #[tool(description = "Generate the Spring XML configuration of a cluster, optionally as a client node with a near cache")]
    async fn generate_cluster_xml(
        &self,
        params: rmcp::handler::server::wrapper::Parameters<ClusterXmlParams>,
    ) -> Result<CallToolResult, rmcp::ErrorData> {
        let p = params.0;
        match tools::cluster_xml::generate_cluster_xml(
            &p.cluster_config,
            p.client_near_config.as_deref(),
            &self.options,
        ) {
            Ok(out) => Ok(CallToolResult::success(vec![Content::text(out)])),
            Err(e) => {
                tracing::warn!(error = %e, "generate_cluster_xml failed");
                Ok(CallToolResult::error(vec![Content::text(e)]))
            }
        }
    }

    #[tool(description = "Generate a single CacheConfiguration bean from a cache description")]
    async fn generate_cache_xml(
        &self,
        params: rmcp::handler::server::wrapper::Parameters<CacheXmlParams>,
    ) -> Result<CallToolResult, rmcp::ErrorData> {
        match tools::cluster_xml::generate_cache_xml(&params.0.cache_config) {
            Ok(out) => Ok(CallToolResult::success(vec![Content::text(out)])),
            Err(e) => {
                tracing::warn!(error = %e, "generate_cache_xml failed");
                Ok(CallToolResult::error(vec![Content::text(e)]))
            }
        }
    }

    #[tool(description = "Generate the properties file template with JDBC url/username/password keys for every data source")]
    async fn generate_secret_properties(
        &self,
        params: rmcp::handler::server::wrapper::Parameters<ClusterParams>,
    ) -> Result<CallToolResult, rmcp::ErrorData> {
        match tools::cluster_xml::generate_secret_properties(&params.0.cluster_config) {
            Ok(out) => Ok(CallToolResult::success(vec![Content::text(out)])),
            Err(e) => {
                tracing::warn!(error = %e, "generate_secret_properties failed");
                Ok(CallToolResult::error(vec![Content::text(e)]))
            }
        }
    }

    #[tool(description = "Validate a cluster description (discovery settings, swap space, cache store consistency)")]
    async fn validate_cluster_config(
        &self,
        params: rmcp::handler::server::wrapper::Parameters<ClusterParams>,
    ) -> Result<CallToolResult, rmcp::ErrorData> {
        match tools::cluster_xml::validate_cluster_config(&params.0.cluster_config) {
            Ok(()) => Ok(CallToolResult::success(vec![Content::text("Configuration is valid.")])),
            Err(errors) => Ok(CallToolResult::error(vec![Content::text(format!(
                "Validation errors:\n{}",
                errors.join("\n")
            ))])),
        }
    }

    #[tool(description = "List event groups accepted in includeEventTypes with their member events")]
    async fn list_event_groups(&self) -> Result<CallToolResult, rmcp::ErrorData> {
        let out = tools::reference::list_event_groups_json();
        Ok(CallToolResult::success(vec![Content::text(out)]))
    }

    #[tool(description = "List short Java class names, JDBC dialects and the classes behind every configuration kind")]
    async fn list_known_classes(&self) -> Result<CallToolResult, rmcp::ErrorData> {
        let out = tools::reference::list_known_classes_json();
        Ok(CallToolResult::success(vec![Content::text(out)]))
    }

    #[tool(description = "JSON Schema of the cluster description accepted by the generator tools")]
    async fn cluster_config_schema(&self) -> Result<CallToolResult, rmcp::ErrorData> {
        let out = tools::reference::cluster_config_schema_json();
        Ok(CallToolResult::success(vec![Content::text(out)]))
    }
}

#[tool_handler]
impl ServerHandler for GridGenMcpService {
    fn get_info(&self) -> rmcp::model::ServerInfo {
        rmcp::model::ServerInfo::new(
            rmcp::model::ServerCapabilities::builder()
                .enable_tools()
                .build(),
        )
        .with_instructions(
            "MCP for data-grid clusters: generate Spring XML configuration from cluster descriptions.",
        )
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    settings::init_tracing();

    let settings = Settings::from_env();
    tracing::info!(
        properties_location = %settings.properties_location,
        "starting gridgen MCP server"
    );

    let service = GridGenMcpService::new(settings.generator_options());
    let transport = stdio();
    let server = service.serve(transport).await?;
    server.waiting().await?;
    Ok(())
}
