use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{SecondsFormat, Utc};
use serde_json::Value;
use uuid::Uuid;

use crate::query::{Filter, Select, Table};
use crate::repo::{ContentStore, StoreError};

/// In-memory ContentStore for tests and local previews.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<HashMap<Table, Vec<Value>>>>,
}

fn now() -> Value {
    Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true))
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every row currently in `table`.
    pub fn rows(&self, table: Table) -> Vec<Value> {
        self.tables
            .lock()
            .unwrap()
            .get(&table)
            .cloned()
            .unwrap_or_default()
    }

    /// Place a fully formed row, bypassing id and timestamp assignment.
    pub fn seed(&self, table: Table, row: Value) {
        self.tables.lock().unwrap().entry(table).or_default().push(row);
    }
}

impl ContentStore for MemoryStore {
    async fn select(&self, table: Table, query: &Select) -> Result<Vec<Value>, StoreError> {
        query.validate(table)?;
        let mut rows: Vec<Value> = self
            .rows(table)
            .into_iter()
            .filter(|row| query.filter.as_ref().map_or(true, |f| f.matches(row)))
            .collect();
        if let Some(order) = &query.order {
            rows.sort_by(|a, b| order.compare(a, b));
        }
        Ok(rows)
    }

    async fn insert(&self, table: Table, rows: Vec<Value>) -> Result<(), StoreError> {
        let stamp = now();
        let mut prepared = Vec::with_capacity(rows.len());
        for row in rows {
            let Value::Object(fields) = row else {
                return Err(StoreError::Remote("Insert expects JSON objects".into()));
            };
            let mut record = serde_json::Map::new();
            for (key, value) in fields {
                let column = table.writable_column(&key)?;
                record.insert(column.to_string(), value);
            }
            record.insert("id".into(), Value::String(Uuid::new_v4().to_string()));
            if table.has_created_at() {
                record.insert("created_at".into(), stamp.clone());
            }
            if table.has_updated_at() {
                record.insert("updated_at".into(), stamp.clone());
            }
            prepared.push(Value::Object(record));
        }
        self.tables
            .lock()
            .unwrap()
            .entry(table)
            .or_default()
            .extend(prepared);
        Ok(())
    }

    async fn update(&self, table: Table, filter: &Filter, patch: Value) -> Result<(), StoreError> {
        filter.column_for(table)?;
        let Value::Object(fields) = patch else {
            return Err(StoreError::Remote("Update expects a JSON object".into()));
        };
        for key in fields.keys() {
            table.writable_column(key)?;
        }
        let mut tables = self.tables.lock().unwrap();
        for row in tables.entry(table).or_default().iter_mut() {
            if !filter.matches(row) {
                continue;
            }
            if let Value::Object(record) = row {
                for (key, value) in &fields {
                    record.insert(key.clone(), value.clone());
                }
                if table.has_updated_at() {
                    record.insert("updated_at".into(), now());
                }
            }
        }
        Ok(())
    }

    async fn delete(&self, table: Table, filter: &Filter) -> Result<(), StoreError> {
        filter.column_for(table)?;
        self.tables
            .lock()
            .unwrap()
            .entry(table)
            .or_default()
            .retain(|row| !filter.matches(row));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AboutDraft, ContactMessage, NewsDraft, Project, ProjectDraft, Record};
    use crate::repo::Content;
    use serde_json::json;

    fn draft(title: &str, tags: &[&str]) -> ProjectDraft {
        ProjectDraft {
            title: title.to_string(),
            description: format!("{title} description"),
            image: format!("https://img/{title}.png"),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            github: None,
            live_url: None,
        }
    }

    #[tokio::test]
    async fn test_insert_and_list_projects() {
        let content = Content::new(MemoryStore::new());

        // Initially empty
        assert!(content.projects().await.unwrap().is_empty());

        content.insert::<Project>(&draft("folio", &["rust"])).await.unwrap();

        let projects = content.projects().await.unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].title, "folio");
        assert_eq!(projects[0].tags, vec!["rust"]);
        assert_eq!(projects[0].created_at, projects[0].updated_at);
    }

    #[tokio::test]
    async fn test_update_keeps_identity() {
        let content = Content::new(MemoryStore::new());
        content.insert::<Project>(&draft("old", &[])).await.unwrap();
        let before = content.projects().await.unwrap().remove(0);

        let mut changed = before.draft();
        changed.title = "new".into();
        content.update::<Project>(before.id, &changed).await.unwrap();

        let after = content.project(before.id).await.unwrap();
        assert_eq!(after.id, before.id);
        assert_eq!(after.title, "new");
        assert_eq!(after.created_at, before.created_at);
    }

    #[tokio::test]
    async fn test_get_missing_project() {
        let content = Content::new(MemoryStore::new());
        let missing = content.project(Uuid::new_v4()).await;
        assert!(matches!(missing, Err(StoreError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_project() {
        let content = Content::new(MemoryStore::new());
        content.insert::<Project>(&draft("first", &[])).await.unwrap();
        content.insert::<Project>(&draft("second", &[])).await.unwrap();

        let first = content
            .projects()
            .await
            .unwrap()
            .into_iter()
            .find(|p| p.title == "first")
            .unwrap();
        content.delete::<Project>(first.id).await.unwrap();

        let projects = content.projects().await.unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].title, "second");
    }

    #[tokio::test]
    async fn test_about_singleton() {
        let content = Content::new(MemoryStore::new());
        assert_eq!(content.about().await.unwrap(), None);

        let draft = AboutDraft {
            name: "Ada".into(),
            email: "ada@x.com".into(),
            ..AboutDraft::default()
        };
        content.insert::<crate::models::About>(&draft).await.unwrap();
        let about = content.about().await.unwrap().unwrap();
        assert_eq!(about.name, "Ada");
        assert_eq!(about.cv_url, None);

        // A second row breaks the singleton contract
        content.insert::<crate::models::About>(&draft).await.unwrap();
        assert!(matches!(
            content.about().await,
            Err(StoreError::MultipleRows(2))
        ));
    }

    #[tokio::test]
    async fn test_news_ordered_newest_first() {
        let store = MemoryStore::new();
        let content = Content::new(store.clone());
        for (title, at) in [
            ("old", "2024-01-01T00:00:00Z"),
            ("new", "2024-05-01T00:00:00Z"),
            ("mid", "2024-03-01T00:00:00Z"),
        ] {
            let draft = NewsDraft {
                title: title.into(),
                published_at: at.parse().unwrap(),
                ..NewsDraft::default()
            };
            content.insert::<crate::models::NewsItem>(&draft).await.unwrap();
        }
        let titles: Vec<String> = content
            .news()
            .await
            .unwrap()
            .into_iter()
            .map(|n| n.title)
            .collect();
        assert_eq!(titles, vec!["new", "mid", "old"]);
    }

    #[tokio::test]
    async fn test_news_order_within_one_second() {
        let content = Content::new(MemoryStore::new());
        for (title, at) in [
            ("earlier", "2024-05-01T00:00:00Z"),
            ("later", "2024-05-01T00:00:00.500Z"),
        ] {
            let draft = NewsDraft {
                title: title.into(),
                published_at: at.parse().unwrap(),
                ..NewsDraft::default()
            };
            content.insert::<crate::models::NewsItem>(&draft).await.unwrap();
        }
        let titles: Vec<String> = content
            .news()
            .await
            .unwrap()
            .into_iter()
            .map(|n| n.title)
            .collect();
        assert_eq!(titles, vec!["later", "earlier"]);
    }

    #[tokio::test]
    async fn test_messages_are_stored_verbatim() {
        let store = MemoryStore::new();
        let content = Content::new(store.clone());
        let message = ContactMessage {
            name: "A".into(),
            email: "a@x.com".into(),
            subject: "S".into(),
            message: "M".into(),
        };
        content.insert_message(&message).await.unwrap();

        let rows = store.rows(Table::Messages);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["subject"], "S");
        assert!(rows[0]["id"].is_string());
        assert!(rows[0].get("updated_at").is_none());
    }

    #[tokio::test]
    async fn test_rejects_unknown_columns() {
        let store = MemoryStore::new();
        let err = store
            .insert(Table::Projects, vec![json!({"title": "t", "owner": "me"})])
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::UnknownColumn { column, .. } if column == "owner"));

        let err = store
            .update(Table::Projects, &Filter::eq("id", "x"), json!({"id": "y"}))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::UnknownColumn { .. }));
    }

    #[tokio::test]
    async fn test_refetch_is_idempotent() {
        let content = Content::new(MemoryStore::new());
        content.insert::<Project>(&draft("a", &["x"])).await.unwrap();
        content.insert::<Project>(&draft("b", &["y"])).await.unwrap();
        let first = content.projects().await.unwrap();
        let second = content.projects().await.unwrap();
        assert_eq!(first, second);
    }
}
