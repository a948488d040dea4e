use std::sync::Arc;

use axum::Router;
use tower_http::compression::{CompressionLayer, CompressionLevel};
use tower_http::trace::TraceLayer;

use crate::core::contact::{ContactApiState, contact_api_router};
use crate::core::portfolio::{PortfolioApiState, portfolio_api_router};
use crate::core::storage::Storage;

/// Build the full HTTP application around one shared store
pub fn app(storage: Arc<dyn Storage>) -> Router {
    Router::new()
        .merge(portfolio_api_router(PortfolioApiState {
            storage: Arc::clone(&storage),
        }))
        .merge(contact_api_router(ContactApiState { storage }))
        // One span per request: method, path, status and latency
        .layer(TraceLayer::new_for_http())
        .layer(
            CompressionLayer::new()
                .br(true)
                .gzip(true)
                .quality(CompressionLevel::Best),
        )
}
