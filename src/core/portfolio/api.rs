//! Portfolio API endpoints
//!
//! Provides REST API endpoints for the portfolio gallery:
//! - GET /api/portfolio - List all portfolio items (trailing slash accepted)
//! - GET /api/portfolio/:category - List items in one category

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use std::sync::Arc;

use crate::core::error::ApiError;
use crate::core::models::PortfolioItem;
use crate::core::storage::Storage;

const FETCH_FAILED: &str = "Failed to fetch portfolio items";

/// Portfolio API state containing the shared store
#[derive(Clone)]
pub struct PortfolioApiState {
    pub storage: Arc<dyn Storage>,
}

/// Create the portfolio API router
pub fn portfolio_api_router(state: PortfolioApiState) -> Router {
    let state = Arc::new(state);

    Router::new()
        .route("/api/portfolio", get(list_portfolio_handler))
        .route("/api/portfolio/", get(list_portfolio_handler))
        .route("/api/portfolio/{category}", get(list_by_category_handler))
        .with_state(state)
}

/// GET /api/portfolio
async fn list_portfolio_handler(
    State(state): State<Arc<PortfolioApiState>>,
) -> Result<Json<Vec<PortfolioItem>>, ApiError> {
    let items = state
        .storage
        .get_portfolio_items()
        .await
        .map_err(ApiError::internal(FETCH_FAILED))?;

    Ok(Json(items))
}

/// GET /api/portfolio/:category
/// An unknown category is an empty list, not a 404
async fn list_by_category_handler(
    State(state): State<Arc<PortfolioApiState>>,
    Path(category): Path<String>,
) -> Result<Json<Vec<PortfolioItem>>, ApiError> {
    let items = state
        .storage
        .get_portfolio_items_by_category(&category)
        .await
        .map_err(ApiError::internal(FETCH_FAILED))?;

    tracing::debug!(category = %category, count = items.len(), "Portfolio items filtered");

    Ok(Json(items))
}
