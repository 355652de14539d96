//! API constants
//!
//! Route prefixes and the downloadable CSV template.

/// Served OpenAPI document, also the RapiDoc source.
pub const OPENAPI_PATH: &str = "/api/openapi.json";

pub const DOCS_PATH: &str = "/docs";

pub const AUTH_PREFIX: &str = "/api/auth";

pub const CERTIFICATES_PREFIX: &str = "/api/certificates";

/// Multipart field carrying the bulk upload file.
pub const CSV_FILE_FIELD: &str = "csvFile";

pub const CSV_TEMPLATE_FILENAME: &str = "certificate_template.csv";

pub const CSV_TEMPLATE: &str = "Name,Certificate ID,Issue Date,Course/Program,Email
John Doe,CERT-2024-001,2024-01-15,Web Development,john@example.com
Jane Smith,CERT-2024-002,2024-01-16,Data Science,jane@example.com";
