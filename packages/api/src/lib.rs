//! # API crate: fullstack server functions for the portfolio
//!
//! Defines every Dioxus server function the web client calls, plus the
//! server-side modules behind them.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | partly `server` | Table access policy; password hashing, admin session keys and account bootstrap (server) |
//! | [`db`] | `server` | PostgreSQL pool (lazy `OnceCell` singleton), [`db::PgStore`], embedded migrations |
//! | [`email`] | `server` | Contact notification composition and the transactional email transport |
//! | [`functions`] | `server` | The `send-contact-email` HTTP function (axum router) |
//! | [`models`] | none | Admin account model and its client-safe projection |
//! | [`settings`] | `server` | Layered configuration (`config` crate) |
//!
//! ## Server functions exposed here
//!
//! Each is annotated with `#[get(...)]` or `#[post(...)]` and compiled twice:
//! with full server logic behind `#[cfg(feature = "server")]`, and as a thin
//! client stub that forwards the call over HTTP.
//!
//! - **Authentication**: `get_current_user`, `login_password`, `logout`
//! - **Content store**: `store_select`, `store_insert`, `store_update`, `store_delete`

use content::{Filter, Select, Table};
use dioxus::prelude::*;
use serde_json::Value;

pub mod auth;
pub mod db;
#[cfg(feature = "server")]
pub mod email;
#[cfg(feature = "server")]
pub mod functions;
pub mod models;
#[cfg(feature = "server")]
pub mod settings;

pub use models::AdminInfo;

/// Resolve the caller's access to `table` and open the store.
#[cfg(feature = "server")]
async fn open_store(
    session: &tower_sessions::Session,
    table: Table,
    op: auth::Operation,
) -> Result<db::PgStore, ServerFnError> {
    let signed_in = auth::current_admin_id(session)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?
        .is_some();

    auth::authorize(table, op, signed_in).map_err(|e| {
        tracing::warn!("Rejected {:?} on {} for anonymous caller", op, table.name());
        ServerFnError::new(e.to_string())
    })?;

    let pool = db::get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(db::PgStore::new(pool.clone()))
}

/// Get the signed-in admin from the session.
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session)]
pub async fn get_current_user() -> Result<Option<AdminInfo>, ServerFnError> {
    use crate::models::AdminUser;

    let Some(admin_id) = auth::current_admin_id(&session)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?
    else {
        return Ok(None);
    };

    let pool = db::get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let admin: Option<AdminUser> = sqlx::query_as("SELECT * FROM admin_users WHERE id = $1")
        .bind(admin_id)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(admin.map(|a| a.to_info()))
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_current_user() -> Result<Option<AdminInfo>, ServerFnError> {
    Ok(None)
}

/// Log in with email and password.
#[cfg(feature = "server")]
#[post("/api/auth/login-password", session: tower_sessions::Session)]
pub async fn login_password(email: String, password: String) -> Result<AdminInfo, ServerFnError> {
    use crate::models::AdminUser;

    let email = email.trim().to_lowercase();

    let pool = db::get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let admin: Option<AdminUser> = sqlx::query_as("SELECT * FROM admin_users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(admin) = admin else {
        return Err(ServerFnError::new(auth::AuthError::InvalidCredentials.to_string()));
    };

    let valid = auth::verify_password(&password, &admin.password_hash)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if !valid {
        tracing::warn!("Failed login for {}", email);
        return Err(ServerFnError::new(auth::AuthError::InvalidCredentials.to_string()));
    }

    auth::sign_in(&session, &admin)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!("Admin {} signed in", admin.email);
    Ok(admin.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/login-password")]
pub async fn login_password(email: String, password: String) -> Result<AdminInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log out by clearing the session.
#[cfg(feature = "server")]
#[post("/api/auth/logout", session: tower_sessions::Session)]
pub async fn logout() -> Result<(), ServerFnError> {
    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    Ok(())
}

/// Read rows of `table`.
#[cfg(feature = "server")]
#[post("/api/store/select", session: tower_sessions::Session)]
pub async fn store_select(table: Table, query: Select) -> Result<Vec<Value>, ServerFnError> {
    use content::ContentStore;

    let store = open_store(&session, table, auth::Operation::Read).await?;
    store
        .select(table, &query)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[post("/api/store/select")]
pub async fn store_select(table: Table, query: Select) -> Result<Vec<Value>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Insert new rows into `table`.
#[cfg(feature = "server")]
#[post("/api/store/insert", session: tower_sessions::Session)]
pub async fn store_insert(table: Table, rows: Vec<Value>) -> Result<(), ServerFnError> {
    use content::ContentStore;

    let store = open_store(&session, table, auth::Operation::Insert).await?;
    store
        .insert(table, rows)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[post("/api/store/insert")]
pub async fn store_insert(table: Table, rows: Vec<Value>) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Patch every row of `table` matching `filter`.
#[cfg(feature = "server")]
#[post("/api/store/update", session: tower_sessions::Session)]
pub async fn store_update(table: Table, filter: Filter, patch: Value) -> Result<(), ServerFnError> {
    use content::ContentStore;

    let store = open_store(&session, table, auth::Operation::Update).await?;
    store
        .update(table, &filter, patch)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[post("/api/store/update")]
pub async fn store_update(table: Table, filter: Filter, patch: Value) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Delete every row of `table` matching `filter`.
#[cfg(feature = "server")]
#[post("/api/store/delete", session: tower_sessions::Session)]
pub async fn store_delete(table: Table, filter: Filter) -> Result<(), ServerFnError> {
    use content::ContentStore;

    let store = open_store(&session, table, auth::Operation::Delete).await?;
    store
        .delete(table, &filter)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[post("/api/store/delete")]
pub async fn store_delete(table: Table, filter: Filter) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
