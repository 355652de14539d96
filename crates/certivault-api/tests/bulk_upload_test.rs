//! Bulk CSV import API integration tests.
//!
//! Run with: `cargo test -p certivault-api --test bulk_upload_test`

mod helpers;

use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use certivault_api::auth::jwt::JwtService;
use certivault_core::CertificateStore;
use helpers::auth::{register_test_issuer, TestIssuer};
use helpers::{setup_test_app, TEST_JWT_SECRET, TEST_MAX_UPLOAD_BYTES};
use serde_json::Value;
use uuid::Uuid;

const HEADER: &str = "Name,Certificate ID,Issue Date,Course/Program,Email";

fn csv_form(csv: &str) -> MultipartForm {
    MultipartForm::new().add_part(
        "csvFile",
        Part::text(csv.to_string())
            .file_name("certificates.csv")
            .mime_type("text/csv"),
    )
}

async fn upload(client: &TestServer, issuer: &TestIssuer, csv: &str) -> Value {
    let response = client
        .post("/api/certificates/bulk-upload")
        .add_header("Authorization", issuer.bearer())
        .multipart(csv_form(csv))
        .await;
    assert_eq!(response.status_code(), 200, "upload failed: {}", response.text());
    response.json()
}

#[tokio::test]
async fn test_bulk_upload_reports_duplicate_in_same_file() {
    let app = setup_test_app();
    let client = app.client();
    let issuer = register_test_issuer(client, None).await;

    let csv = format!(
        "{}\nAlice,CERT-1,2024-01-15,Course A,alice@x.com\nBob,CERT-1,2024-01-16,Course B,\n",
        HEADER
    );
    let result = upload(client, &issuer, &csv).await;

    assert_eq!(result["total"], 2);
    assert_eq!(result["successful"], 1);
    assert_eq!(result["failed"], 1);
    assert_eq!(result["errors"][0]["row"], 3);
    assert_eq!(
        result["errors"][0]["message"],
        "Certificate ID 'CERT-1' already exists"
    );

    let verified: Value = client.get("/api/certificates/verify/CERT-1").await.json();
    assert_eq!(verified["name"], "Alice");
    assert_eq!(verified["email"], "alice@x.com");
}

#[tokio::test]
async fn test_bulk_upload_mixed_rows_continue_on_error() {
    let app = setup_test_app();
    let client = app.client();
    let issuer = register_test_issuer(client, None).await;

    let csv = [
        HEADER,
        "Carol,CERT-9,not-a-date,Course C",
        "Dan,CERT-8,2024-01-01",
        ",CERT-7,2024-01-01,Course D",
        "\"Eve\",\"CERT-6\",\"2024-02-29\",\"Course E\"",
    ]
    .join("\r\n");
    let result = upload(client, &issuer, &csv).await;

    assert_eq!(result["total"], 4);
    assert_eq!(result["successful"], 1);
    assert_eq!(result["failed"], 3);

    let errors = result["errors"].as_array().expect("errors array");
    let rows: Vec<i64> = errors.iter().filter_map(|e| e["row"].as_i64()).collect();
    assert_eq!(rows, vec![2, 3, 4]);
    assert_eq!(errors[0]["message"], "Invalid date format. Use YYYY-MM-DD");
    assert_eq!(
        errors[1]["message"],
        "Insufficient columns. Expected: Name, Certificate ID, Issue Date, Course/Program, Email"
    );
    assert_eq!(errors[2]["message"], "Missing required fields");

    let eve = client.get("/api/certificates/verify/CERT-6").await;
    assert_eq!(eve.status_code(), 200);
    let eve: Value = eve.json();
    assert_eq!(eve["name"], "Eve");
    assert_eq!(eve["issueDate"], "2024-02-29");
    assert!(eve["email"].is_null());

    for rejected in ["CERT-9", "CERT-8", "CERT-7"] {
        let response = client
            .get(&format!("/api/certificates/verify/{}", rejected))
            .await;
        assert_eq!(response.status_code(), 404);
    }
}

#[tokio::test]
async fn test_bulk_upload_resubmission_is_all_duplicates() {
    let app = setup_test_app();
    let client = app.client();
    let issuer = register_test_issuer(client, None).await;

    let csv = format!(
        "{}\nAlice,CERT-1,2024-01-15,Course A\nBob,CERT-2,2024-01-16,Course B\n",
        HEADER
    );
    let first = upload(client, &issuer, &csv).await;
    assert_eq!(first["successful"], 2);

    let second = upload(client, &issuer, &csv).await;
    assert_eq!(second["total"], 2);
    assert_eq!(second["successful"], 0);
    assert_eq!(second["failed"], 2);

    let stats: Value = client
        .get("/api/certificates/stats")
        .add_header("Authorization", issuer.bearer())
        .await
        .json();
    assert_eq!(stats["totalCertificates"], 2);
}

#[tokio::test]
async fn test_bulk_upload_rejects_other_issuers_certificate_id() {
    let app = setup_test_app();
    let client = app.client();
    let ada = register_test_issuer(client, Some("ada@acme.test")).await;
    let bob = register_test_issuer(client, Some("bob@acme.test")).await;

    let csv = format!("{}\nAlice,SHARED-1,2024-01-15,Course A\n", HEADER);
    assert_eq!(upload(client, &ada, &csv).await["successful"], 1);

    let result = upload(client, &bob, &csv).await;
    assert_eq!(result["successful"], 0);
    assert_eq!(
        result["errors"][0]["message"],
        "Certificate ID 'SHARED-1' already exists"
    );
}

#[tokio::test]
async fn test_bulk_upload_request_level_errors() {
    let app = setup_test_app();
    let client = app.client();
    let issuer = register_test_issuer(client, None).await;

    let unauthenticated = client
        .post("/api/certificates/bulk-upload")
        .multipart(csv_form("a\nb"))
        .await;
    assert_eq!(unauthenticated.status_code(), 401);

    let no_file = client
        .post("/api/certificates/bulk-upload")
        .add_header("Authorization", issuer.bearer())
        .multipart(MultipartForm::new().add_text("note", "no file here"))
        .await;
    assert_eq!(no_file.status_code(), 400);
    assert_eq!(no_file.json::<Value>()["message"], "No CSV file provided");

    let header_only = client
        .post("/api/certificates/bulk-upload")
        .add_header("Authorization", issuer.bearer())
        .multipart(csv_form(&format!("{}\n\n   \n", HEADER)))
        .await;
    assert_eq!(header_only.status_code(), 400);
    assert_eq!(
        header_only.json::<Value>()["message"],
        "CSV file must contain at least a header and one data row"
    );
}

#[tokio::test]
async fn test_bulk_upload_unknown_issuer() {
    let app = setup_test_app();
    let client = app.client();

    // Well-formed token for an issuer that was never registered.
    let token = JwtService::new(TEST_JWT_SECRET, 1)
        .issue_token(Uuid::new_v4(), "ghost@acme.test")
        .expect("token");

    let response = client
        .post("/api/certificates/bulk-upload")
        .add_header("Authorization", format!("Bearer {}", token))
        .multipart(csv_form(&format!(
            "{}\nAlice,CERT-1,2024-01-15,Course A\n",
            HEADER
        )))
        .await;

    assert_eq!(response.status_code(), 404);
    assert_eq!(response.json::<Value>()["message"], "User not found");
}

#[tokio::test]
async fn test_bulk_upload_too_large() {
    let app = setup_test_app();
    let client = app.client();
    let issuer = register_test_issuer(client, None).await;

    let row = "Alice,CERT-1,2024-01-15,Course A,alice@x.com\n";
    let csv = format!("{}\n{}", HEADER, row.repeat(TEST_MAX_UPLOAD_BYTES / row.len() + 1));

    let response = client
        .post("/api/certificates/bulk-upload")
        .add_header("Authorization", issuer.bearer())
        .multipart(csv_form(&csv))
        .await;

    assert_eq!(response.status_code(), 413);
    let stored = app
        .store
        .count_by_creator(issuer.id, None)
        .await
        .expect("count");
    assert_eq!(stored, 0);
}

#[tokio::test]
async fn test_csv_template_download() {
    let app = setup_test_app();

    let response = app
        .client()
        .get("/api/certificates/bulk-upload/template")
        .await;

    assert_eq!(response.status_code(), 200);
    let content_type = response.header("content-type");
    assert!(content_type.to_str().unwrap_or_default().starts_with("text/csv"));
    let disposition = response.header("content-disposition");
    assert!(disposition
        .to_str()
        .unwrap_or_default()
        .contains("certificate_template.csv"));
    assert!(response.text().starts_with(HEADER));
}
