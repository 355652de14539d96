//! Certivault API Library
//!
//! HTTP handlers, authentication, and application setup for the
//! certificate issuance and verification service.

mod api_doc;
pub mod constants;
mod handlers;
mod telemetry;
mod utils;

pub mod auth;
pub mod error;
pub mod setup;
pub mod state;

pub use error::ErrorResponse;
pub use state::AppState;
