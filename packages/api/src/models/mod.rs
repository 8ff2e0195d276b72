//! Data models owned by the API crate.
//!
//! Content records live in the `content` crate; only the admin account is
//! defined here.

mod admin;

#[cfg(feature = "server")]
pub use admin::AdminUser;
pub use admin::AdminInfo;
