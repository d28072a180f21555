//! Pessoa record
//!
//! The column set belongs to the database schema, so a record is the row
//! itself: column name to JSON value, in the table's column order.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One row of the backing table, serialized field-for-field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pessoa(Map<String, Value>);

impl Pessoa {
    pub fn from_columns(columns: Map<String, Value>) -> Self {
        Self(columns)
    }

    /// Value of a column, `None` if the table has no such column.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.0.get(column)
    }

    /// The `id` column, when the table defines one.
    pub fn id(&self) -> Option<&Value> {
        self.get("id")
    }

    /// Column names in table order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_columns(self) -> Map<String, Value> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn alice() -> Pessoa {
        serde_json::from_value(json!({"id": 1, "name": "Alice"})).unwrap()
    }

    #[test]
    fn serializes_as_plain_object() {
        let out = serde_json::to_string(&alice()).unwrap();
        assert_eq!(out, r#"{"id":1,"name":"Alice"}"#);
    }

    #[test]
    fn keeps_column_order() {
        let row: Pessoa =
            serde_json::from_str(r#"{"zeta":1,"alpha":2,"id":3}"#).unwrap();
        let columns: Vec<_> = row.columns().collect();
        assert_eq!(columns, ["zeta", "alpha", "id"]);
    }

    #[test]
    fn accessors() {
        let row = alice();
        assert_eq!(row.id(), Some(&json!(1)));
        assert_eq!(row.get("name"), Some(&json!("Alice")));
        assert_eq!(row.get("email"), None);
        assert_eq!(row.len(), 2);
    }

    #[test]
    fn numbers_keep_their_exact_text() {
        let input = r#"{"id":123456789012345678901234567890,"saldo":1234567890.1234567891}"#;
        let row: Pessoa = serde_json::from_str(input).unwrap();

        assert_eq!(serde_json::to_string(&row).unwrap(), input);
        assert_eq!(
            row.get("saldo").map(Value::to_string).as_deref(),
            Some("1234567890.1234567891")
        );
    }

    #[test]
    fn table_without_id_column() {
        let row = Pessoa::from_columns(Map::new());
        assert!(row.is_empty());
        assert_eq!(row.id(), None);
    }
}
