//! Portfolio module
//!
//! Read-only REST API over the portfolio gallery:
//! - Full list of items
//! - Items filtered by category

pub mod api;

pub use api::{PortfolioApiState, portfolio_api_router};
