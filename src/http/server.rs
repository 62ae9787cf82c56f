//! HTTP server exposing the aggregated health signal.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::prober::Aggregator;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<Aggregator>,
}

/// HTTP server for the prober.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server serving rounds from the given aggregator.
    pub fn new(aggregator: Arc<Aggregator>) -> Self {
        let state = AppState { aggregator };
        Self { router: Self::build_router(state) }
    }

    /// Build the axum router. Both probe paths serve the same round.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/liveness", any(health_handler))
            .route("/readiness", any(health_handler))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    /// The route table, for in-process testing without a listener.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");
        axum::serve(listener, self.router).await
    }
}

/// One fresh probe round per request; no body parsing, no caching.
async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let result = state.aggregator.run_round().await;
    if result.healthy {
        (StatusCode::OK, "OK".to_string())
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, result.failures.concat())
    }
}
