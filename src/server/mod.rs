use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use tracing::{debug, info};

use crate::assignment::registry::AlgorithmCatalog;

pub mod api;
pub mod routes;

/// Shared, read-only server state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: AlgorithmCatalog,
}

impl AppState {
    pub fn new(catalog: AlgorithmCatalog) -> Self {
        Self { catalog }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AlgorithmCatalog::standard())
    }
}

/// Every request goes through [routes::route_request]; axum only handles transport.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new().fallback(dispatch).with_state(state)
}

async fn dispatch(
    State(state): State<Arc<AppState>>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    let path = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());
    let body = String::from_utf8_lossy(&body);
    let response = routes::route_request(&state, method.as_str(), path, &body);
    debug!(%method, path, status = response.status_code, "request handled");
    response.into_response()
}

pub fn run_server(bind_addr: &str) -> std::io::Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let listener = tokio::net::TcpListener::bind(bind_addr).await?;
        info!("rallypoint server listening on http://{bind_addr}");
        axum::serve(listener, router(Arc::new(AppState::default()))).await
    })
}
