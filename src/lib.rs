//! Folio - Personal Portfolio Backend
//!
//! HTTP API behind a personal portfolio site: serves the portfolio gallery
//! and accepts contact form submissions, backed by an in-memory store.

pub mod app;
pub mod core;
pub mod server;
