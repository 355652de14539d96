//! Certivault data access layer
//!
//! PostgreSQL repositories built on sqlx, plus an in-memory store that
//! implements the same store traits for local runs and tests.

pub mod db;
pub mod memory;

pub use db::{CertificateRepository, IssuerRepository};
pub use memory::MemoryStore;
