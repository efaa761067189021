//! Admin API key provisioning.
//!
//! The admin surface is useless on a fresh database until at least one key
//! exists, so startup provisions one when the table is empty. Additional
//! keys are inserted operationally (the table only ever stores hashes).

use crate::{db::DbPool, error::AppError, utils};

/// Ensure at least one active admin API key exists.
///
/// # Process
///
/// 1. Count rows in `api_keys`
/// 2. If any exist, do nothing
/// 3. Otherwise generate a random key, store its SHA-256 hash, and log the
///    plaintext once
///
/// The plaintext key is only ever visible in this log line; it cannot be
/// recovered from the database afterwards.
pub async fn ensure_bootstrap_key(pool: &DbPool) -> Result<(), AppError> {
    let key_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM api_keys")
        .fetch_one(pool)
        .await?;

    if key_count > 0 {
        return Ok(());
    }

    // Generate secure random key (32 bytes = 64 hex chars)
    let key = utils::generate_api_key();
    let key_hash = utils::hash_api_key(&key);

    sqlx::query("INSERT INTO api_keys (key_hash, service_name) VALUES ($1, $2)")
        .bind(&key_hash)
        .bind("bootstrap-admin")
        .execute(pool)
        .await?;

    tracing::warn!(
        "No API keys configured; generated bootstrap admin key (shown once): {}",
        key
    );

    Ok(())
}
