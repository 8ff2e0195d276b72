//! # Admin account
//!
//! [`AdminUser`] is the full `admin_users` row and never leaves the server.
//! [`AdminInfo`] is what the client learns about the signed-in admin: enough
//! to render the dashboard header, nothing that could be replayed.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct AdminUser {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl AdminUser {
    pub fn to_info(&self) -> AdminInfo {
        AdminInfo {
            id: self.id.to_string(),
            email: self.email.clone(),
        }
    }
}

/// The signed-in admin, safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminInfo {
    pub id: String,
    pub email: String,
}
