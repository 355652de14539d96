//! Certivault Core Library
//!
//! This crate provides core domain models, error types, configuration and the
//! store traits shared across all Certivault components.

pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod store_backend;

// Re-export commonly used types
pub use config::{BaseConfig, CertivaultConfig, Config};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use store::{CertificateStore, IssuerStore};
pub use store_backend::StoreBackend;
