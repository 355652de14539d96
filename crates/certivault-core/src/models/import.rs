use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Outcome of one bulk import call.
///
/// `successful + failed == total` always holds; `errors` is in row order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct ImportResult {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
    pub errors: Vec<ImportRowError>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct ImportRowError {
    /// 1-based line number in the uploaded file, counting the header as line 1.
    pub row: usize,
    pub message: String,
}

impl ImportResult {
    pub fn new(total: usize) -> Self {
        ImportResult {
            total,
            ..Default::default()
        }
    }

    pub fn record_success(&mut self) {
        self.successful += 1;
    }

    pub fn record_failure(&mut self, row: usize, message: impl Into<String>) {
        self.failed += 1;
        self.errors.push(ImportRowError {
            row,
            message: message.into(),
        });
    }
}
