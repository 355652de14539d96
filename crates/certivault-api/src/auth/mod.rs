//! Issuer authentication: bearer JWTs and bcrypt password hashes.

pub mod jwt;
pub mod middleware;
pub mod models;
pub mod password;
