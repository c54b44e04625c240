//! Web layer module
//!
//! HTTP interface for the fact cache. Handlers are thin and delegate to
//! [`FactsService`]; errors are plain-text bodies and successes are JSON.
//!
//! Routes:
//! - `POST /facts` fetch a new fact
//! - `GET /facts` list cached facts (`limit`, `offset`)
//! - `GET /facts/{fingerprint}` resolve a fact and count the access
//! - `GET /facts/{fingerprint}/redirect` redirect to the original permalink
//! - `GET /admin/statistics` access counters
//! - `GET /health` service health
//! - `GET /docs` Swagger UI over `/api/openapi.json`

use anyhow::Result;
use axum::{
    Router,
    routing::get,
};
use chrono::{DateTime, Utc};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::oneshot;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::Config, services::FactsService};

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod utils;

pub use extractors::{PageParams, RequestContext};
pub use responses::handle_error;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub facts_service: Arc<FactsService>,
    pub config: Config,
    pub start_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: Config, facts_service: Arc<FactsService>) -> Self {
        Self {
            facts_service,
            config,
            start_time: Utc::now(),
        }
    }
}

/// Build the application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route(
            "/facts",
            get(handlers::facts::list_facts).post(handlers::facts::create_fact),
        )
        .route("/facts/{fingerprint}", get(handlers::facts::get_fact))
        .route(
            "/facts/{fingerprint}/redirect",
            get(handlers::facts::redirect_to_permalink),
        )
        .route(
            "/admin/statistics",
            get(handlers::admin::get_statistics),
        )
        .merge(SwaggerUi::new("/docs").url("/api/openapi.json", openapi::ApiDoc::openapi()))
        // Middleware (applied in reverse order)
        .layer(CorsLayer::permissive())
        .layer(CatchPanicLayer::new())
        .layer(axum::middleware::from_fn(
            middleware::request_logging_middleware,
        ))
        .with_state(state)
}

/// Web server configuration and setup
pub struct WebServer {
    app: Router,
    addr: SocketAddr,
}

impl WebServer {
    pub fn new(config: Config, facts_service: Arc<FactsService>) -> Result<Self> {
        let addr: SocketAddr = format!("{}:{}", config.web.host, config.web.port).parse()?;
        let app = create_router(AppState::new(config, facts_service));

        Ok(Self { app, addr })
    }

    /// Bind, report readiness (or the bind failure) on `ready_signal`, then
    /// serve until SIGTERM or SIGINT.
    pub async fn serve_with_signal(self, ready_signal: oneshot::Sender<Result<()>>) -> Result<()> {
        let listener = match tokio::net::TcpListener::bind(&self.addr).await {
            Ok(listener) => listener,
            Err(bind_error) => {
                let message = format!("Failed to bind to {}: {}", self.addr, bind_error);
                let _ = ready_signal.send(Err(anyhow::anyhow!("{}", message)));
                return Err(anyhow::anyhow!("{}", message));
            }
        };

        let _ = ready_signal.send(Ok(()));
        info!("Listening on {}", self.addr);

        axum::serve(listener, self.app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Web server stopped");
        Ok(())
    }

    pub fn host(&self) -> String {
        self.addr.ip().to_string()
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        match (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
        ) {
            (Ok(mut sigterm), Ok(mut sigint)) => {
                tokio::select! {
                    _ = sigterm.recv() => info!("Received SIGTERM, shutting down gracefully"),
                    _ = sigint.recv() => info!("Received SIGINT (Ctrl+C), shutting down gracefully"),
                }
            }
            _ => {
                tracing::warn!("Failed to install signal handlers, falling back to Ctrl+C");
                ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    ctrl_c().await;
}

async fn ctrl_c() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl+C, shutting down gracefully"),
        Err(e) => {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
