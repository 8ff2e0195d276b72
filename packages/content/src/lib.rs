pub mod contact;
pub mod editor;
pub mod filter;
pub mod models;
pub mod query;
pub mod repo;

mod memory;
pub use memory::MemoryStore;

#[cfg(test)]
mod testing;

pub use contact::{ContactError, Notifier};
pub use editor::{singleton_notice, Mode, Saved, WriteOp};
pub use models::{About, AboutDraft, ContactMessage, NewsDraft, NewsItem, Project, ProjectDraft, Record};
pub use query::{Filter, Order, ReadMode, Select, Table};
pub use repo::{Content, ContentStore, StoreError};
