//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the contact and health handlers
//! - Wire up middleware (request ID, tracing, CORS, deadline, body limit, panic guard)
//! - Bind server to listener
//! - Stop cleanly on the shutdown broadcast

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    middleware,
    routing::{any, get},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::{CorsConfig, RelayConfig};
use crate::http::contact::{health, submit_contact};
use crate::http::response::{handle_panic, request_deadline};
use crate::tracker::{Forwarder, GitHubIssueClient, IssueSink, IssueTemplate, TrackerError};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub forwarder: Arc<Forwarder>,
    pub max_payload_chars: usize,
}

/// HTTP server for the contact relay.
pub struct HttpServer {
    router: Router,
    config: RelayConfig,
}

impl HttpServer {
    /// Create a server that forwards to the given sink.
    pub fn new(config: RelayConfig, sink: Arc<dyn IssueSink>) -> Self {
        let forwarder = Forwarder::new(sink, IssueTemplate::from(&config.tracker));
        let state = AppState {
            forwarder: Arc::new(forwarder),
            max_payload_chars: config.limits.max_payload_chars,
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Create a server that forwards to the configured GitHub repository.
    pub fn from_config(config: RelayConfig) -> Result<Self, TrackerError> {
        let client = GitHubIssueClient::new(&config.tracker, &config.timeouts)?;
        Ok(Self::new(config, Arc::new(client)))
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &RelayConfig, state: AppState) -> Router {
        Router::new()
            .route(&config.listener.contact_path, any(submit_contact))
            .route("/health", get(health))
            .layer(DefaultBodyLimit::max(config.limits.max_body_bytes))
            .with_state(state)
            .layer(CatchPanicLayer::custom(handle_panic))
            .layer(middleware::from_fn_with_state(
                Duration::from_secs(config.timeouts.request_secs),
                request_deadline,
            ))
            .layer(cors_layer(&config.cors))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            contact_path = %self.config.listener.contact_path,
            repository = %self.config.tracker.repository,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    if config.allowed_origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}
