//! Postgres implementation of the content store protocol.
//!
//! Rows travel as `jsonb`: reads use `to_jsonb(t)` and writes go through
//! `jsonb_populate_record`, so the column types live in the schema only.
//! Identifiers spliced into SQL always come from the table allowlist, never
//! from the request; values are always bound parameters.

use content::{ContentStore, Filter, Select, StoreError, Table};
use serde_json::{Map, Value};
use sqlx::PgPool;

#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn remote(e: sqlx::Error) -> StoreError {
    tracing::error!("Content store query failed: {}", e);
    StoreError::Remote(e.to_string())
}

fn as_object(table: Table, value: Value) -> Result<Map<String, Value>, StoreError> {
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(StoreError::Remote(format!(
            "Expected a JSON object for `{}`",
            table.name()
        ))),
    }
}

/// Columns of a write payload, checked against the writable allowlist.
fn write_columns(table: Table, row: &Map<String, Value>) -> Result<Vec<&'static str>, StoreError> {
    row.keys().map(|key| table.writable_column(key)).collect()
}

pub(crate) fn select_sql(table: Table, query: &Select) -> Result<String, StoreError> {
    let mut sql = format!("SELECT to_jsonb(t) FROM {} t", table.name());
    if let Some(filter) = &query.filter {
        sql.push_str(&format!(" WHERE t.{}::text = $1", filter.column_for(table)?));
    }
    if let Some(order) = &query.order {
        let direction = if order.ascending { "ASC" } else { "DESC" };
        sql.push_str(&format!(
            " ORDER BY t.{} {} NULLS LAST",
            order.column_for(table)?,
            direction
        ));
    }
    Ok(sql)
}

pub(crate) fn insert_sql(table: Table, columns: &[&str]) -> String {
    let list = columns.join(", ");
    format!(
        "INSERT INTO {table} ({list}) SELECT {list} FROM jsonb_populate_record(NULL::{table}, $1)",
        table = table.name(),
    )
}

pub(crate) fn update_sql(table: Table, columns: &[&str], filter_column: &str) -> String {
    let mut assignments: Vec<String> = columns.iter().map(|c| format!("{c} = r.{c}")).collect();
    if table.has_updated_at() {
        assignments.push("updated_at = now()".to_string());
    }
    format!(
        "UPDATE {table} AS t SET {set} FROM jsonb_populate_record(NULL::{table}, $1) AS r WHERE t.{filter_column}::text = $2",
        table = table.name(),
        set = assignments.join(", "),
    )
}

pub(crate) fn delete_sql(table: Table, filter_column: &str) -> String {
    format!("DELETE FROM {} WHERE {}::text = $1", table.name(), filter_column)
}

impl ContentStore for PgStore {
    async fn select(&self, table: Table, query: &Select) -> Result<Vec<Value>, StoreError> {
        let sql = select_sql(table, query)?;
        let mut statement = sqlx::query_scalar::<_, Value>(&sql);
        if let Some(filter) = &query.filter {
            statement = statement.bind(filter.value.clone());
        }
        statement.fetch_all(&self.pool).await.map_err(remote)
    }

    async fn insert(&self, table: Table, rows: Vec<Value>) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await.map_err(remote)?;
        for row in rows {
            let row = as_object(table, row)?;
            let columns = write_columns(table, &row)?;
            if columns.is_empty() {
                sqlx::query(&format!("INSERT INTO {} DEFAULT VALUES", table.name()))
                    .execute(&mut *tx)
                    .await
                    .map_err(remote)?;
                continue;
            }
            sqlx::query(&insert_sql(table, &columns))
                .bind(Value::Object(row))
                .execute(&mut *tx)
                .await
                .map_err(remote)?;
        }
        tx.commit().await.map_err(remote)
    }

    async fn update(&self, table: Table, filter: &Filter, patch: Value) -> Result<(), StoreError> {
        let filter_column = filter.column_for(table)?;
        let patch = as_object(table, patch)?;
        let columns = write_columns(table, &patch)?;
        if columns.is_empty() && !table.has_updated_at() {
            return Ok(());
        }
        let result = sqlx::query(&update_sql(table, &columns, filter_column))
            .bind(Value::Object(patch))
            .bind(filter.value.clone())
            .execute(&self.pool)
            .await
            .map_err(remote)?;
        tracing::debug!(table = table.name(), rows = result.rows_affected(), "Updated rows");
        Ok(())
    }

    async fn delete(&self, table: Table, filter: &Filter) -> Result<(), StoreError> {
        let filter_column = filter.column_for(table)?;
        let result = sqlx::query(&delete_sql(table, filter_column))
            .bind(filter.value.clone())
            .execute(&self.pool)
            .await
            .map_err(remote)?;
        tracing::debug!(table = table.name(), rows = result.rows_affected(), "Deleted rows");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_select_sql() {
        let sql = select_sql(Table::TechNews, &Select::all().order_by("published_at", false)).unwrap();
        assert_eq!(
            sql,
            "SELECT to_jsonb(t) FROM tech_news t ORDER BY t.published_at DESC NULLS LAST"
        );

        let sql = select_sql(Table::Projects, &Select::all().eq("id", "x").single()).unwrap();
        assert_eq!(sql, "SELECT to_jsonb(t) FROM projects t WHERE t.id::text = $1");
    }

    #[test]
    fn test_select_sql_rejects_foreign_columns() {
        let query = Select::all().eq("1=1 OR id", "x");
        assert!(matches!(
            select_sql(Table::Projects, &query),
            Err(StoreError::UnknownColumn { .. })
        ));
    }

    #[test]
    fn test_write_sql() {
        assert_eq!(
            insert_sql(Table::Messages, &["name", "email"]),
            "INSERT INTO messages (name, email) SELECT name, email FROM jsonb_populate_record(NULL::messages, $1)"
        );
        assert_eq!(
            update_sql(Table::Projects, &["title"], "id"),
            "UPDATE projects AS t SET title = r.title, updated_at = now() FROM jsonb_populate_record(NULL::projects, $1) AS r WHERE t.id::text = $2"
        );
        assert_eq!(
            update_sql(Table::TechNews, &["title"], "id"),
            "UPDATE tech_news AS t SET title = r.title FROM jsonb_populate_record(NULL::tech_news, $1) AS r WHERE t.id::text = $2"
        );
        assert_eq!(delete_sql(Table::About, "id"), "DELETE FROM about WHERE id::text = $1");
    }

    #[test]
    fn test_write_columns_only_writable() {
        let row = as_object(Table::Projects, json!({"title": "t", "tags": []})).unwrap();
        let mut columns = write_columns(Table::Projects, &row).unwrap();
        columns.sort();
        assert_eq!(columns, vec!["tags", "title"]);

        let row = as_object(Table::Projects, json!({"id": "forged"})).unwrap();
        assert!(write_columns(Table::Projects, &row).is_err());
        assert!(as_object(Table::Projects, json!([1])).is_err());
    }
}
