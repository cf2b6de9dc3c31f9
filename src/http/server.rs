//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the static handlers and the invoke endpoint
//! - Guard the static origin with the edge filter middleware
//! - Wire up middleware (trace, timeout, request ID)
//! - Swap in a new handler set when a reloaded config arrives
//! - Shut down gracefully on the shutdown broadcast

use std::sync::Arc;
use std::time::Duration;

use arc_swap::ArcSwap;
use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{any, post},
    Json, Router,
};
use tokio::net::TcpListener;
use tokio::sync::{broadcast, mpsc};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::{ConfigError, EdgeConfig};
use crate::edge::{Decision, EdgeEvent};
use crate::handlers::{HandlerResponse, HandlerSet};
use crate::http::middleware::edge_filter_middleware;
use crate::http::request::X_REQUEST_ID;
use crate::observability::metrics;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub handlers: Arc<ArcSwap<HandlerSet>>,
}

/// HTTP gateway hosting the edge handlers.
pub struct HttpServer {
    router: Router,
    config: EdgeConfig,
    handlers: Arc<ArcSwap<HandlerSet>>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: EdgeConfig) -> Result<Self, ConfigError> {
        let handlers = Arc::new(ArcSwap::from_pointee(HandlerSet::from_config(&config)?));
        let state = AppState {
            handlers: handlers.clone(),
        };

        let router = Self::build_router(&config, state);
        Ok(Self {
            router,
            config,
            handlers,
        })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &EdgeConfig, state: AppState) -> Router {
        let origin: Router = Router::new()
            .fallback_service(ServeDir::new(&config.origin.root))
            .layer(middleware::from_fn_with_state(state.clone(), edge_filter_middleware));

        Router::new()
            .route("/_edge/cors", any(cors_handler))
            .route("/_edge/apply-cookie", any(cookie_handler))
            .route("/_edge/invoke", post(invoke_handler))
            .with_state(state)
            .fallback_service(origin)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuid))
    }

    /// The router, for serving it on another transport or driving it in-process.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &EdgeConfig {
        &self.config
    }

    /// Run the server until `shutdown` fires.
    ///
    /// Configs received on `config_updates` replace the filter, CORS and
    /// cookie handlers. Listener, timeout and origin settings need a restart.
    pub async fn run(
        self,
        listener: TcpListener,
        mut config_updates: mpsc::UnboundedReceiver<EdgeConfig>,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, origin = %self.config.origin.root, "HTTP server starting");

        let handlers = self.handlers.clone();
        let reload = tokio::spawn(async move {
            while let Some(config) = config_updates.recv().await {
                match HandlerSet::from_config(&config) {
                    Ok(set) => {
                        handlers.store(Arc::new(set));
                        tracing::info!("Handlers reloaded");
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Rejected reloaded config, keeping current handlers");
                    }
                }
            }
        });

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        reload.abort();
        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

async fn cors_handler(State(state): State<AppState>) -> HandlerResponse {
    let response = state.handlers.load().cors.respond();
    metrics::record_handler("cors", response.status_code);
    response
}

async fn cookie_handler(State(state): State<AppState>) -> Response {
    match state.handlers.load().cookie.respond() {
        Ok(response) => {
            metrics::record_handler("apply_cookie", response.status_code);
            response.into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to encode cookie grant");
            metrics::record_handler("apply_cookie", 500);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Run the filter over an edge event and return its decision as JSON.
async fn invoke_handler(State(state): State<AppState>, Json(event): Json<EdgeEvent>) -> Json<Decision> {
    Json(state.handlers.load().filter.handle_event(event))
}
