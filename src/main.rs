use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fact_cache::{
    config::Config, services::FactsService, sources::UselessFactsSource, web::WebServer,
};

#[derive(Parser)]
#[command(name = "fact-cache")]
#[command(version)]
#[command(about = "Random fact proxy with shortened links and access statistics")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Listening IP address
    #[arg(short = 'H', long, value_name = "IP")]
    host: Option<String>,

    /// Listening port
    #[arg(short, long, value_name = "PORT")]
    port: Option<u16>,

    /// Log level
    #[arg(short = 'v', long, default_value = "info")]
    log_level: String,

    /// Maximum number of cached facts (overrides config file)
    #[arg(long, value_name = "N")]
    cache_size: Option<usize>,

    /// Upstream random fact endpoint (overrides config file)
    #[arg(long, value_name = "URL")]
    remote_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_filter = if cli.log_level == "trace" {
        format!("fact_cache={},tower_http=trace", cli.log_level)
    } else {
        format!("fact_cache={}", cli.log_level)
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting fact cache v{}", env!("CARGO_PKG_VERSION"));

    let mut config = Config::load_from_file(&cli.config)?;
    info!("Configuration loaded from: {}", cli.config);

    if let Some(host) = cli.host {
        config.web.host = host;
    }
    if let Some(port) = cli.port {
        config.web.port = port;
    }
    if let Some(cache_size) = cli.cache_size {
        config.facts.cache_size = cache_size;
    }
    if let Some(remote_url) = cli.remote_url {
        config.facts.remote_url = remote_url;
    }
    config.validate()?;

    let source = Arc::new(UselessFactsSource::new(&config.facts)?);
    info!(
        "Upstream: {} (max retries {}, request timeout {})",
        source.remote_url(),
        config.facts.max_retries,
        humantime::format_duration(config.facts.request_timeout)
    );

    let facts_service = Arc::new(FactsService::from_config(source, &config.facts)?);
    info!("Fact cache initialized with capacity {}", config.facts.cache_size);

    let web_server = WebServer::new(config, facts_service)?;
    let (server_ready_tx, server_ready_rx) = tokio::sync::oneshot::channel();

    let server_handle = tokio::spawn(async move { web_server.serve_with_signal(server_ready_tx).await });

    match server_ready_rx.await {
        Ok(Ok(())) => info!("Web server is ready"),
        Ok(Err(bind_error)) => {
            tracing::error!("Failed to bind web server: {}", bind_error);
            return Err(bind_error);
        }
        Err(_) => {
            return Err(anyhow::anyhow!(
                "Web server task exited before reporting readiness"
            ));
        }
    }

    server_handle.await??;
    info!("Shutdown complete");
    Ok(())
}
