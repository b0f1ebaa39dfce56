//! Table schema derived from a header row.

use convoy_model::fields::{SCORE, VEHICLE_ID};

/// Table created by the database stage.
pub const DEFAULT_TABLE: &str = "convoy";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnConstraint {
    PrimaryKey,
    NotNull,
}

impl ColumnConstraint {
    fn as_sql(self) -> &'static str {
        match self {
            Self::PrimaryKey => "PRIMARY KEY",
            Self::NotNull => "NOT NULL",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: String,
    pub constraint: ColumnConstraint,
}

/// Integer columns named after the headers, plus `score`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    pub table: String,
    pub columns: Vec<ColumnDef>,
}

impl TableSchema {
    /// One integer column per header, `vehicle_id` as primary key, all others
    /// non-null, and a trailing non-null `score`.
    pub fn from_headers(table: &str, headers: &[String]) -> Self {
        let columns = headers
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(SCORE))
            .map(|name| ColumnDef {
                name: name.to_string(),
                constraint: if name == VEHICLE_ID {
                    ColumnConstraint::PrimaryKey
                } else {
                    ColumnConstraint::NotNull
                },
            })
            .collect();
        Self {
            table: table.to_string(),
            columns,
        }
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|column| column.name.as_str()).collect()
    }

    pub fn create_sql(&self) -> String {
        let columns: Vec<String> = self
            .columns
            .iter()
            .map(|column| {
                format!(
                    "{} INTEGER {}",
                    quote_identifier(&column.name),
                    column.constraint.as_sql()
                )
            })
            .collect();
        format!(
            "CREATE TABLE IF NOT EXISTS {} ({});",
            quote_identifier(&self.table),
            columns.join(", ")
        )
    }

    pub fn insert_sql(&self) -> String {
        let placeholders = vec!["?"; self.columns.len()].join(", ");
        format!(
            "INSERT INTO {} VALUES ({placeholders});",
            quote_identifier(&self.table)
        )
    }
}

/// Double-quote an SQL identifier.
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers() -> Vec<String> {
        ["vehicle_id", "engine_capacity", "fuel_consumption", "maximum_load"]
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn appends_score_and_marks_primary_key() {
        let schema = TableSchema::from_headers(DEFAULT_TABLE, &headers());
        assert_eq!(
            schema.column_names(),
            vec![
                "vehicle_id",
                "engine_capacity",
                "fuel_consumption",
                "maximum_load",
                "score"
            ]
        );
        assert_eq!(schema.columns[0].constraint, ColumnConstraint::PrimaryKey);
        assert!(
            schema.columns[1..]
                .iter()
                .all(|column| column.constraint == ColumnConstraint::NotNull)
        );
    }

    #[test]
    fn renders_create_statement() {
        let schema = TableSchema::from_headers(DEFAULT_TABLE, &headers());
        assert_eq!(
            schema.create_sql(),
            "CREATE TABLE IF NOT EXISTS \"convoy\" (\"vehicle_id\" INTEGER PRIMARY KEY, \
             \"engine_capacity\" INTEGER NOT NULL, \"fuel_consumption\" INTEGER NOT NULL, \
             \"maximum_load\" INTEGER NOT NULL, \"score\" INTEGER NOT NULL);"
        );
    }

    #[test]
    fn renders_insert_statement() {
        let schema = TableSchema::from_headers(DEFAULT_TABLE, &headers());
        assert_eq!(
            schema.insert_sql(),
            "INSERT INTO \"convoy\" VALUES (?, ?, ?, ?, ?);"
        );
    }

    #[test]
    fn quotes_embedded_quotes() {
        assert_eq!(quote_identifier("odd\"name"), "\"odd\"\"name\"");
    }
}
