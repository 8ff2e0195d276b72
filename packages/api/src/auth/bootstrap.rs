use sqlx::PgPool;

use super::{hash_password, AuthError};
use crate::settings::AdminSettings;

/// Create the configured admin account if it does not exist yet. Returns
/// whether a row was inserted. An existing account keeps its password.
pub async fn ensure_admin(pool: &PgPool, admin: &AdminSettings) -> Result<bool, AuthError> {
    let (Some(email), Some(password)) = (&admin.email, &admin.password) else {
        tracing::info!("No admin account configured, skipping bootstrap");
        return Ok(false);
    };
    let email = email.trim().to_lowercase();
    let hash = hash_password(password)?;

    let inserted = sqlx::query(
        "INSERT INTO admin_users (email, password_hash) VALUES ($1, $2) ON CONFLICT (email) DO NOTHING",
    )
    .bind(&email)
    .bind(&hash)
    .execute(pool)
    .await?
    .rows_affected()
        > 0;

    if inserted {
        tracing::info!("Created admin account {}", email);
    }
    Ok(inserted)
}
