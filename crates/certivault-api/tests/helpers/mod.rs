//! Test helpers: build AppState and router for integration tests.
//!
//! The app runs against the in-memory store, so no database is needed:
//! `cargo test -p certivault-api`.

pub mod auth;

use axum_test::TestServer;
use certivault_api::setup::routes;
use certivault_api::state::AppState;
use certivault_core::{BaseConfig, CertivaultConfig, Config, StoreBackend};
use certivault_db::MemoryStore;
use std::sync::Arc;

pub const TEST_JWT_SECRET: &str = "test-jwt-secret-at-least-32-characters-long";

/// Small enough that the oversized-upload test stays cheap.
pub const TEST_MAX_UPLOAD_BYTES: usize = 64 * 1024;

pub fn test_config() -> Config {
    Config(Box::new(CertivaultConfig {
        base: BaseConfig {
            server_port: 0,
            cors_origins: vec!["*".to_string()],
            db_max_connections: 1,
            db_timeout_seconds: 5,
            jwt_secret: TEST_JWT_SECRET.to_string(),
            jwt_expiry_hours: 1,
            environment: "test".to_string(),
        },
        store_backend: StoreBackend::Memory,
        database_url: None,
        // Minimum cost keeps hashing fast in tests.
        bcrypt_cost: 4,
        max_upload_size_bytes: TEST_MAX_UPLOAD_BYTES,
    }))
}

/// Test application: server plus the store behind it.
pub struct TestApp {
    pub server: TestServer,
    pub store: MemoryStore,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

/// Setup a test app with a fresh in-memory store.
pub fn setup_test_app() -> TestApp {
    let config = test_config();
    config.validate().expect("test config must be valid");

    let store = MemoryStore::new();
    let state = Arc::new(AppState::new(
        config.clone(),
        Arc::new(store.clone()),
        Arc::new(store.clone()),
    ));

    let router = routes::setup_routes(&config, state).expect("Failed to build router");
    let server = TestServer::new(router).expect("Failed to start test server");

    TestApp { server, store }
}
