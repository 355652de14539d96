use axum_test::TestServer;
use serde_json::{json, Value};
use uuid::Uuid;

/// Registered issuer with a bearer token for requests.
pub struct TestIssuer {
    pub id: Uuid,
    pub token: String,
}

impl TestIssuer {
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

pub const TEST_EMAIL: &str = "admin@acme.test";
pub const TEST_PASSWORD: &str = "TestPassword123!";

/// Sign up an issuer through the API.
pub async fn register_test_issuer(client: &TestServer, email: Option<&str>) -> TestIssuer {
    let email = email.unwrap_or(TEST_EMAIL);

    let response = client
        .post("/api/auth/signup")
        .json(&json!({
            "organizationName": "Acme Academy",
            "adminName": "Ada Admin",
            "email": email,
            "password": TEST_PASSWORD,
        }))
        .await;
    assert_eq!(response.status_code(), 200, "signup failed: {}", response.text());

    let body: Value = response.json();
    let id = body["user"]["id"]
        .as_str()
        .and_then(|s| Uuid::parse_str(s).ok())
        .expect("signup response carries the issuer id");

    TestIssuer {
        id,
        token: body["token"].as_str().expect("token").to_string(),
    }
}
