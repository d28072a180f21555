//! Backing table name validation
//!
//! Identifier format: `table` or `schema.table`, each part a plain SQL
//! identifier. Names are always emitted double-quoted.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use super::ValidationError;

/// Postgres truncates identifiers past NAMEDATALEN - 1 bytes.
const MAX_IDENT_LEN: usize = 63;

/// Table the entity set maps to when nothing else is configured.
pub const DEFAULT_TABLE: &str = "Pessoa";

static IDENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("invalid identifier regex"));

/// Validated, optionally schema-qualified table name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableName {
    schema: Option<String>,
    table: String,
}

impl TableName {
    /// Parse a table name.
    ///
    /// # Rules
    /// - `table` or `schema.table`
    /// - Each part starts with a letter or underscore, then letters, digits, underscores
    /// - Each part at most 63 bytes
    ///
    /// # Example
    /// ```
    /// use pessoa_server::models::TableName;
    ///
    /// assert!(TableName::new("Pessoa").is_ok());
    /// assert!(TableName::new("dbo.Pessoa").is_ok());
    /// assert!(TableName::new("Pessoa; DROP TABLE x").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "table name" });
        }

        match s.split_once('.') {
            Some((schema, table)) => Ok(Self {
                schema: Some(validate_ident(schema)?.to_owned()),
                table: validate_ident(table)?.to_owned(),
            }),
            None => Ok(Self {
                schema: None,
                table: validate_ident(s)?.to_owned(),
            }),
        }
    }

    pub fn schema(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// The name as it appears in SQL, each part double-quoted.
    pub fn quoted(&self) -> String {
        match &self.schema {
            Some(schema) => format!("\"{}\".\"{}\"", schema, self.table),
            None => format!("\"{}\"", self.table),
        }
    }
}

fn validate_ident(part: &str) -> Result<&str, ValidationError> {
    if part.is_empty() {
        return Err(ValidationError::Empty { field: "table name" });
    }

    if part.len() > MAX_IDENT_LEN {
        return Err(ValidationError::TooLong {
            field: "table name",
            max: MAX_IDENT_LEN,
        });
    }

    if !IDENT_RE.is_match(part) {
        return Err(ValidationError::InvalidFormat {
            field: "table name",
            reason: "must be letters, digits and underscores, not starting with a digit",
        });
    }

    Ok(part)
}

impl Default for TableName {
    fn default() -> Self {
        Self {
            schema: None,
            table: DEFAULT_TABLE.to_owned(),
        }
    }
}

impl FromStr for TableName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.schema {
            Some(schema) => write!(f, "{}.{}", schema, self.table),
            None => f.write_str(&self.table),
        }
    }
}
