//! Daemon entry point for the ExerciseDB MCP server.
//!
//! Loads configuration from the environment, builds the cached upstream
//! catalog, and serves the MCP protocol over stdio and/or streamable HTTP.

mod config;

use exdb_core::catalog::ExerciseCatalog;
use exdb_core::fetch::{HttpFetcher, HttpFetcherConfig};
use exdb_mcp::server::{McpHttpServerConfig, serve_stdio, serve_streamable_http};
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::config::ExdbConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Logs go to stderr; stdout belongs to the stdio MCP transport.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = ExdbConfig::from_args()?;
    let fetcher_config = HttpFetcherConfig::new(config.api_key.clone())
        .with_api_host(config.api_host.clone())
        .with_timeout(config.http_timeout);
    let fetcher = HttpFetcher::new(fetcher_config)?;

    let mut catalog = ExerciseCatalog::new(fetcher);
    if !config.cache {
        catalog = catalog.without_cache();
    }

    if config.mcp_serve {
        let http_catalog = catalog.clone();
        let http_config = McpHttpServerConfig::new(config.mcp_http_addr);
        if config.enable_stdio {
            tokio::spawn(async move {
                if let Err(err) = serve_streamable_http(http_catalog, http_config).await {
                    error!("MCP HTTP server exited: {err}");
                }
            });
        } else {
            serve_streamable_http(http_catalog, http_config).await?;
            return Ok(());
        }
    }

    if config.enable_stdio {
        serve_stdio(catalog).await?;
    }
    Ok(())
}
