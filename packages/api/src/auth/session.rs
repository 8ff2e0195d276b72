//! Admin session keys.

use tower_sessions::Session;
use uuid::Uuid;

use super::AuthError;
use crate::models::AdminUser;

/// Key for storing the admin id in the session.
pub const SESSION_ADMIN_ID_KEY: &str = "admin_id";

/// The admin id carried by this session, if any.
pub async fn current_admin_id(session: &Session) -> Result<Option<Uuid>, AuthError> {
    let id: Option<String> = session.get(SESSION_ADMIN_ID_KEY).await?;
    Ok(id.and_then(|id| Uuid::parse_str(&id).ok()))
}

/// Bind `admin` to the session under a fresh session id.
pub async fn sign_in(session: &Session, admin: &AdminUser) -> Result<(), AuthError> {
    session.cycle_id().await?;
    session
        .insert(SESSION_ADMIN_ID_KEY, admin.id.to_string())
        .await?;
    Ok(())
}
