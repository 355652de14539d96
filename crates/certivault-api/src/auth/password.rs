//! Password hashing. bcrypt is CPU-bound, so it runs on the blocking pool.

use certivault_core::AppError;

pub async fn hash_password(password: String, cost: u32) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| AppError::Internal(format!("Password hashing task failed: {}", e)))?
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
}

/// Returns false for a mismatch or an unparseable hash.
pub async fn verify_password(password: String, hash: String) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash).unwrap_or(false))
        .await
        .map_err(|e| AppError::Internal(format!("Password verification task failed: {}", e)))
}
