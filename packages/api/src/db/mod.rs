//! # Database module: PostgreSQL pool and content store
//!
//! Entirely gated behind `#[cfg(feature = "server")]` so client (WASM) builds
//! never pull in SQLx or Tokio networking code.
//!
//! - [`get_pool`]: lazy, process-wide `&'static PgPool` (a
//!   [`tokio::sync::OnceCell`] singleton) configured from
//!   [`Settings`](crate::settings::Settings), up to 5 connections by default.
//! - [`PgStore`]: the [`content::ContentStore`] the server functions run
//!   against.
//! - [`MIGRATOR`]: embedded migrations from `packages/api/migrations`.

#[cfg(feature = "server")]
mod pg_store;
#[cfg(feature = "server")]
mod pool;

#[cfg(feature = "server")]
pub use pg_store::PgStore;
#[cfg(feature = "server")]
pub use pool::get_pool;

#[cfg(feature = "server")]
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
