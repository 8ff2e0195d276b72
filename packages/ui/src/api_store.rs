//! Browser-side [`ContentStore`] backed by the store server functions.

use content::{Content, ContentStore, Filter, Select, StoreError, Table};
use serde_json::Value;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ApiStore;

fn remote(e: impl std::fmt::Display) -> StoreError {
    StoreError::Remote(e.to_string())
}

impl ContentStore for ApiStore {
    async fn select(&self, table: Table, query: &Select) -> Result<Vec<Value>, StoreError> {
        api::store_select(table, query.clone()).await.map_err(remote)
    }

    async fn insert(&self, table: Table, rows: Vec<Value>) -> Result<(), StoreError> {
        api::store_insert(table, rows).await.map_err(remote)
    }

    async fn update(&self, table: Table, filter: &Filter, patch: Value) -> Result<(), StoreError> {
        api::store_update(table, filter.clone(), patch)
            .await
            .map_err(remote)
    }

    async fn delete(&self, table: Table, filter: &Filter) -> Result<(), StoreError> {
        api::store_delete(table, filter.clone()).await.map_err(remote)
    }
}

/// Typed content access for views.
pub fn content() -> Content<ApiStore> {
    Content::new(ApiStore)
}
