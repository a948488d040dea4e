//! Core domain models, storage and API handlers for the portfolio backend

pub mod config;
pub mod contact;
pub mod error;
pub mod models;
pub mod portfolio;
pub mod storage;
pub mod validation;

pub use models::*;
