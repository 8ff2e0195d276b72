//! # Content repository over an abstract store
//!
//! [`ContentStore`] is the raw table protocol: JSON rows in, JSON rows out. It
//! has one implementation per place the data lives: [`crate::MemoryStore`]
//! for tests, the Postgres store on the server, and the server-function
//! client in the browser.
//!
//! [`Content`] wraps a store and speaks in records: it serialises drafts,
//! deserialises rows, applies the query's [`ReadMode`](crate::ReadMode), and
//! names the handful of queries the views actually issue.

use std::future::Future;

use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{About, ContactMessage, NewsItem, Project, Record};
use crate::query::{Filter, Select, Table};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("No rows returned")]
    NotFound,

    #[error("Expected at most one row, got {0}")]
    MultipleRows(usize),

    #[error("Unknown column `{column}` on table `{table}`")]
    UnknownColumn { table: &'static str, column: String },

    #[error("Not authorized")]
    Unauthorized,

    #[error("Malformed row: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("{0}")]
    Remote(String),
}

/// Async interface to a table-oriented content store.
pub trait ContentStore {
    fn select(
        &self,
        table: Table,
        query: &Select,
    ) -> impl Future<Output = Result<Vec<Value>, StoreError>>;
    fn insert(
        &self,
        table: Table,
        rows: Vec<Value>,
    ) -> impl Future<Output = Result<(), StoreError>>;
    fn update(
        &self,
        table: Table,
        filter: &Filter,
        patch: Value,
    ) -> impl Future<Output = Result<(), StoreError>>;
    fn delete(
        &self,
        table: Table,
        filter: &Filter,
    ) -> impl Future<Output = Result<(), StoreError>>;
}

/// Typed access to the portfolio tables.
pub struct Content<S: ContentStore> {
    store: S,
}

impl<S: ContentStore> Content<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Run a select and decode the rows as `R`.
    pub async fn fetch<R: Record>(&self, query: &Select) -> Result<Vec<R>, StoreError> {
        let rows = self.store.select(R::TABLE, query).await?;
        let rows = query.mode.shape(rows)?;
        rows.into_iter()
            .map(|row| serde_json::from_value(row).map_err(StoreError::from))
            .collect()
    }

    pub async fn insert<R: Record>(&self, draft: &R::Draft) -> Result<(), StoreError> {
        let row = serde_json::to_value(draft)?;
        self.store.insert(R::TABLE, vec![row]).await
    }

    pub async fn update<R: Record>(&self, id: Uuid, draft: &R::Draft) -> Result<(), StoreError> {
        let patch = serde_json::to_value(draft)?;
        self.store.update(R::TABLE, &Filter::id(id), patch).await
    }

    pub async fn delete<R: Record>(&self, id: Uuid) -> Result<(), StoreError> {
        self.store.delete(R::TABLE, &Filter::id(id)).await
    }

    /// All projects, in store order (public view).
    pub async fn projects(&self) -> Result<Vec<Project>, StoreError> {
        self.fetch(&Select::all()).await
    }

    /// All projects, newest first (admin view).
    pub async fn projects_newest_first(&self) -> Result<Vec<Project>, StoreError> {
        self.fetch(&Select::all().order_by("created_at", false)).await
    }

    /// One project by id; [`StoreError::NotFound`] when absent.
    pub async fn project(&self, id: Uuid) -> Result<Project, StoreError> {
        let mut rows: Vec<Project> = self.fetch(&Select::all().eq("id", id).single()).await?;
        rows.pop().ok_or(StoreError::NotFound)
    }

    /// The about singleton, if it has been created.
    pub async fn about(&self) -> Result<Option<About>, StoreError> {
        let mut rows: Vec<About> = self.fetch(&Select::all().maybe_single()).await?;
        Ok(rows.pop())
    }

    /// News items, most recently published first.
    pub async fn news(&self) -> Result<Vec<NewsItem>, StoreError> {
        self.fetch(&Select::all().order_by("published_at", false)).await
    }

    /// Store a contact-form submission.
    pub async fn insert_message(&self, message: &ContactMessage) -> Result<(), StoreError> {
        let row = serde_json::to_value(message)?;
        self.store.insert(Table::Messages, vec![row]).await
    }
}
