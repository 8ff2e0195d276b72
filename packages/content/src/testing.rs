//! Recording store for workflow tests.

use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::memory::MemoryStore;
use crate::query::{Filter, Select, Table};
use crate::repo::{ContentStore, StoreError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Select(Table),
    Insert(Table, usize),
    /// Table and filter value.
    Update(Table, String),
    Delete(Table, String),
}

/// Wraps a [`MemoryStore`] and records every call made through it.
#[derive(Clone, Default)]
pub struct SpyStore {
    inner: MemoryStore,
    calls: Arc<Mutex<Vec<Call>>>,
    fail_writes: bool,
}

impl SpyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every insert/update/delete fails with a remote error.
    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn inner(&self) -> &MemoryStore {
        &self.inner
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| pred(c)).count()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn record(&self, call: Call) -> Result<(), StoreError> {
        let is_write = !matches!(call, Call::Select(_));
        self.calls.lock().unwrap().push(call);
        if is_write && self.fail_writes {
            return Err(StoreError::Remote("write rejected".into()));
        }
        Ok(())
    }
}

impl ContentStore for SpyStore {
    async fn select(&self, table: Table, query: &Select) -> Result<Vec<Value>, StoreError> {
        self.record(Call::Select(table))?;
        self.inner.select(table, query).await
    }

    async fn insert(&self, table: Table, rows: Vec<Value>) -> Result<(), StoreError> {
        self.record(Call::Insert(table, rows.len()))?;
        self.inner.insert(table, rows).await
    }

    async fn update(&self, table: Table, filter: &Filter, patch: Value) -> Result<(), StoreError> {
        self.record(Call::Update(table, filter.value.clone()))?;
        self.inner.update(table, filter, patch).await
    }

    async fn delete(&self, table: Table, filter: &Filter) -> Result<(), StoreError> {
        self.record(Call::Delete(table, filter.value.clone()))?;
        self.inner.delete(table, filter).await
    }
}
