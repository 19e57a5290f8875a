/// Route handlers, one module per page.
pub mod detail;
pub mod landing;
pub mod results;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use drwho_common::backend::BackendClient;

#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<BackendClient>,
}

/// Assemble the application router. `/results` and `/search-results` are
/// aliases for the same page.
pub fn router(backend: Arc<BackendClient>) -> Router {
    Router::new()
        .route("/", get(landing::show))
        .route("/results", get(results::show))
        .route("/search-results", get(results::show))
        .route("/professor/{id}", get(detail::show))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { backend })
}
