//! # Store protocol: tables and read queries
//!
//! The content store speaks a small table-oriented protocol:
//!
//! - **select**: all rows of a [`Table`], optionally narrowed by one equality
//!   [`Filter`], optionally sorted by one [`Order`], shaped by a [`ReadMode`]
//!   (`many`, `single`, `maybe_single`);
//! - **insert**: an array of new rows;
//! - **update** / **delete**: every row matching a [`Filter`].
//!
//! Column names arrive from the client as plain strings. Every backend checks
//! them against the fixed per-table allowlist in [`Table::column`] before they
//! go anywhere near SQL.

use std::cmp::Ordering;

use chrono::DateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::repo::StoreError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Table {
    Projects,
    About,
    Messages,
    TechNews,
}

impl Table {
    pub const ALL: [Table; 4] = [Table::Projects, Table::About, Table::Messages, Table::TechNews];

    pub fn name(self) -> &'static str {
        match self {
            Table::Projects => "projects",
            Table::About => "about",
            Table::Messages => "messages",
            Table::TechNews => "tech_news",
        }
    }

    /// Columns a client may write.
    pub fn writable_columns(self) -> &'static [&'static str] {
        match self {
            Table::Projects => &["title", "description", "image", "tags", "github", "live_url"],
            Table::About => &[
                "name",
                "email",
                "location",
                "bio",
                "experience",
                "profile_image",
                "cv_url",
            ],
            Table::Messages => &["name", "email", "subject", "message"],
            Table::TechNews => &["title", "description", "url", "source", "image_url", "published_at"],
        }
    }

    /// Columns maintained by the store itself.
    pub fn generated_columns(self) -> &'static [&'static str] {
        match self {
            Table::Projects | Table::About => &["id", "created_at", "updated_at"],
            Table::Messages => &["id", "created_at"],
            Table::TechNews => &["id"],
        }
    }

    /// Resolve a client-supplied column name against the allowlist.
    pub fn column(self, name: &str) -> Option<&'static str> {
        self.generated_columns()
            .iter()
            .chain(self.writable_columns())
            .copied()
            .find(|c| *c == name)
    }

    pub fn has_created_at(self) -> bool {
        self.generated_columns().contains(&"created_at")
    }

    pub fn has_updated_at(self) -> bool {
        self.generated_columns().contains(&"updated_at")
    }

    /// Anyone may read this table.
    pub fn is_public_read(self) -> bool {
        !matches!(self, Table::Messages)
    }

    /// Anyone may insert into this table.
    pub fn is_public_insert(self) -> bool {
        matches!(self, Table::Messages)
    }

    /// Resolve a column a client is trying to write.
    pub fn writable_column(self, name: &str) -> Result<&'static str, StoreError> {
        self.writable_columns()
            .iter()
            .copied()
            .find(|c| *c == name)
            .ok_or_else(|| StoreError::UnknownColumn {
                table: self.name(),
                column: name.to_string(),
            })
    }

    pub(crate) fn checked_column(self, name: &str) -> Result<&'static str, StoreError> {
        self.column(name).ok_or_else(|| StoreError::UnknownColumn {
            table: self.name(),
            column: name.to_string(),
        })
    }
}

/// Equality filter: `column = value`, compared as text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    pub column: String,
    pub value: String,
}

impl Filter {
    pub fn eq(column: &str, value: impl ToString) -> Self {
        Self {
            column: column.to_string(),
            value: value.to_string(),
        }
    }

    pub fn id(id: Uuid) -> Self {
        Self::eq("id", id)
    }

    /// Validate the column for `table`, returning its canonical name.
    pub fn column_for(&self, table: Table) -> Result<&'static str, StoreError> {
        table.checked_column(&self.column)
    }

    /// Whether a JSON row satisfies this filter. `NULL` never matches.
    pub fn matches(&self, row: &Value) -> bool {
        match row.get(&self.column) {
            Some(Value::String(s)) => *s == self.value,
            Some(Value::Number(n)) => n.to_string() == self.value,
            Some(Value::Bool(b)) => b.to_string() == self.value,
            _ => false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub column: String,
    pub ascending: bool,
}

impl Order {
    pub fn column_for(&self, table: Table) -> Result<&'static str, StoreError> {
        table.checked_column(&self.column)
    }

    /// Compare two rows by this order's column. `NULL`s sort last and
    /// RFC 3339 timestamps compare as instants.
    pub fn compare(&self, a: &Value, b: &Value) -> Ordering {
        let ord = match (a.get(&self.column), b.get(&self.column)) {
            (Some(Value::Number(x)), Some(Value::Number(y))) => x
                .as_f64()
                .partial_cmp(&y.as_f64())
                .unwrap_or(Ordering::Equal),
            (Some(Value::String(x)), Some(Value::String(y))) => {
                match (DateTime::parse_from_rfc3339(x), DateTime::parse_from_rfc3339(y)) {
                    (Ok(x), Ok(y)) => x.cmp(&y),
                    _ => x.cmp(y),
                }
            }
            (Some(Value::Null) | None, Some(Value::Null) | None) => return Ordering::Equal,
            (Some(Value::Null) | None, _) => return Ordering::Greater,
            (_, Some(Value::Null) | None) => return Ordering::Less,
            (Some(x), Some(y)) => x.to_string().cmp(&y.to_string()),
        };
        if self.ascending {
            ord
        } else {
            ord.reverse()
        }
    }
}

/// How many rows a select is expected to produce.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadMode {
    #[default]
    Many,
    /// Exactly one row.
    Single,
    /// Zero or one row.
    MaybeSingle,
}

impl ReadMode {
    /// Check a result set against the mode.
    pub fn shape(self, rows: Vec<Value>) -> Result<Vec<Value>, StoreError> {
        match (self, rows.len()) {
            (ReadMode::Many, _) => Ok(rows),
            (ReadMode::Single, 0) => Err(StoreError::NotFound),
            (ReadMode::Single | ReadMode::MaybeSingle, n) if n > 1 => {
                Err(StoreError::MultipleRows(n))
            }
            _ => Ok(rows),
        }
    }
}

/// A read query against one table.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Select {
    pub filter: Option<Filter>,
    pub order: Option<Order>,
    pub mode: ReadMode,
}

impl Select {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn eq(mut self, column: &str, value: impl ToString) -> Self {
        self.filter = Some(Filter::eq(column, value));
        self
    }

    pub fn order_by(mut self, column: &str, ascending: bool) -> Self {
        self.order = Some(Order {
            column: column.to_string(),
            ascending,
        });
        self
    }

    pub fn single(mut self) -> Self {
        self.mode = ReadMode::Single;
        self
    }

    pub fn maybe_single(mut self) -> Self {
        self.mode = ReadMode::MaybeSingle;
        self
    }

    /// Validate every column the query mentions.
    pub fn validate(&self, table: Table) -> Result<(), StoreError> {
        if let Some(filter) = &self.filter {
            filter.column_for(table)?;
        }
        if let Some(order) = &self.order {
            order.column_for(table)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_column_allowlist() {
        assert_eq!(Table::Projects.column("live_url"), Some("live_url"));
        assert_eq!(Table::Projects.column("id"), Some("id"));
        assert_eq!(Table::Projects.column("id; DROP TABLE projects"), None);
        assert_eq!(Table::TechNews.column("created_at"), None);

        let bad = Select::all().order_by("password", true);
        assert!(matches!(
            bad.validate(Table::About),
            Err(StoreError::UnknownColumn { table: "about", .. })
        ));
    }

    #[test]
    fn test_access_policy() {
        assert!(Table::Projects.is_public_read());
        assert!(!Table::Messages.is_public_read());
        assert!(Table::Messages.is_public_insert());
        assert!(!Table::Projects.is_public_insert());
    }

    #[test]
    fn test_filter_matches_as_text() {
        let row = json!({"id": "abc", "n": 3, "missing": null});
        assert!(Filter::eq("id", "abc").matches(&row));
        assert!(Filter::eq("n", 3).matches(&row));
        assert!(!Filter::eq("missing", "null").matches(&row));
        assert!(!Filter::eq("nope", "abc").matches(&row));
    }

    #[test]
    fn test_order_compare() {
        let order = Order {
            column: "at".into(),
            ascending: false,
        };
        let old = json!({"at": "2024-01-01T00:00:00.000000Z"});
        let new = json!({"at": "2024-06-01T00:00:00.000000Z"});
        let none = json!({});
        assert_eq!(order.compare(&new, &old), Ordering::Less);
        assert_eq!(order.compare(&old, &none), Ordering::Less);
    }

    #[test]
    fn test_order_compare_fractional_seconds() {
        let order = Order {
            column: "at".into(),
            ascending: true,
        };
        let whole = json!({"at": "2024-05-01T00:00:00Z"});
        let half = json!({"at": "2024-05-01T00:00:00.500Z"});
        assert_eq!(order.compare(&whole, &half), Ordering::Less);
        assert_eq!(order.compare(&half, &whole), Ordering::Greater);

        let names = json!({"at": "b"});
        assert_eq!(order.compare(&json!({"at": "a"}), &names), Ordering::Less);
    }

    #[test]
    fn test_read_mode_shape() {
        let one = vec![json!({})];
        let two = vec![json!({}), json!({})];
        assert_eq!(ReadMode::Many.shape(two.clone()).unwrap().len(), 2);
        assert!(matches!(ReadMode::Single.shape(vec![]), Err(StoreError::NotFound)));
        assert_eq!(ReadMode::Single.shape(one.clone()).unwrap().len(), 1);
        assert!(ReadMode::MaybeSingle.shape(vec![]).unwrap().is_empty());
        assert!(matches!(
            ReadMode::MaybeSingle.shape(two),
            Err(StoreError::MultipleRows(2))
        ));
    }

    #[test]
    fn test_select_serializes_for_the_wire() {
        let query = Select::all().eq("id", "x").maybe_single();
        let wire = serde_json::to_value(&query).unwrap();
        assert_eq!(wire["mode"], "maybe_single");
        assert_eq!(wire["filter"]["column"], "id");
        let back: Select = serde_json::from_value(wire).unwrap();
        assert_eq!(back, query);
    }
}
