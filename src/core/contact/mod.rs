//! Contact module
//!
//! REST API for the public contact form: accepts submissions and lists the
//! messages received so far.

pub mod api;

pub use api::{CONTACT_CONFIRMATION, ContactApiState, ContactCreatedResponse, contact_api_router};
