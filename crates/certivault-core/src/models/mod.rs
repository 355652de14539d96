//! Data models for the application
//!
//! Each sub-module represents a specific feature area.

mod certificate;
mod import;
mod issuer;

pub use certificate::*;
pub use import::*;
pub use issuer::*;
