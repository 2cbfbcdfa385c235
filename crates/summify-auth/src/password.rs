// Password hashing and verification

use bcrypt::{hash, verify, DEFAULT_COST};
use summify_commons::{ApiError, ApiResult};

/// Bcrypt cost factor used for stored credentials.
pub const BCRYPT_COST: u32 = DEFAULT_COST;

/// Hash a password with bcrypt.
///
/// Runs on the blocking thread pool; bcrypt is CPU-bound by design and must
/// not stall the async runtime.
pub async fn hash_password(password: &str, cost: Option<u32>) -> ApiResult<String> {
    let password = password.to_string();
    let cost = cost.unwrap_or(BCRYPT_COST);

    tokio::task::spawn_blocking(move || {
        hash(password, cost).map_err(|e| ApiError::internal(format!("password hashing: {}", e)))
    })
    .await
    .map_err(|e| ApiError::internal(format!("hashing task join: {}", e)))?
}

/// Verify a password against a stored bcrypt hash.
pub async fn verify_password(password: &str, stored_hash: &str) -> ApiResult<bool> {
    let password = password.to_string();
    let stored_hash = stored_hash.to_string();

    tokio::task::spawn_blocking(move || {
        verify(password, &stored_hash)
            .map_err(|e| ApiError::internal(format!("password verification: {}", e)))
    })
    .await
    .map_err(|e| ApiError::internal(format!("verification task join: {}", e)))?
}
