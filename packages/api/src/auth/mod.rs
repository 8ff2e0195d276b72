//! Admin authentication: password hashing, session keys, start-up account
//! bootstrap and the table access policy.

#[cfg(feature = "server")]
mod bootstrap;
#[cfg(feature = "server")]
mod password;
mod policy;
#[cfg(feature = "server")]
mod session;

#[cfg(feature = "server")]
pub use bootstrap::ensure_admin;
#[cfg(feature = "server")]
pub use password::{hash_password, verify_password};
pub use policy::{authorize, Operation};
#[cfg(feature = "server")]
pub use session::{current_admin_id, sign_in, SESSION_ADMIN_ID_KEY};

#[cfg(feature = "server")]
#[derive(thiserror::Error, Debug)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Password hashing failed: {0}")]
    Hash(String),

    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
