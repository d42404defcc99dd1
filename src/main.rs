use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use fieldscope::config::Config;
use fieldscope::fields::cache::DynamicFieldCache;
use fieldscope::fields::fusion::FusionLayer;
use fieldscope::fields::suggest::SuggestionEngine;
use fieldscope::mcp::server::{McpContext, McpServer};
use fieldscope::tracker::TrackerClient;
use fieldscope::tracker::http::HttpTracker;

#[derive(Parser)]
#[command(name = "fieldscope", version, about = "Field schema MCP server for remote issue trackers")]
struct Cli {
    /// Path to the JSON config file (default: ./fieldscope.json)
    #[arg(short, long, default_value = "")]
    config: String,

    /// Serve the static catalog only, never query the tracker
    #[arg(long)]
    no_dynamic: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Stdout carries the MCP transport, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // 1. Load config
    let mut config = Config::load(&cli.config)?;
    if cli.no_dynamic {
        config.dynamic_discovery_enabled = false;
    }
    config.validate().context("invalid configuration")?;
    let config = Arc::new(config);

    // 2. Init tracker client
    let tracker: Arc<dyn TrackerClient> = Arc::new(
        HttpTracker::new(
            &config.tracker.base_url,
            &config.tracker.email,
            &config.tracker.api_token,
        )
        .context("failed to build tracker client")?,
    );

    // 3. Init field resolution core
    let cache = Arc::new(DynamicFieldCache::new(
        tracker,
        config.cache_ttl_seconds,
        config.cache_max_entries,
    ));
    let fusion = Arc::new(FusionLayer::new(cache.clone()));
    let engine = Arc::new(SuggestionEngine::new(config.similarity_threshold));

    // 4. Init MCP Context
    let mcp_ctx = McpContext {
        fusion,
        cache,
        engine,
        config,
    };

    // 5. Start Server
    let server = McpServer::new(mcp_ctx);
    server.start().await?;

    Ok(())
}
