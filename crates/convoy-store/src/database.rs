//! SQLite reads and writes for the fleet table.

use std::path::Path;

use rusqlite::{Connection, OpenFlags, params_from_iter};
use tracing::debug;

use convoy_model::IntegerTable;

use crate::error::{Result, StoreError};
use crate::schema::{TableSchema, quote_identifier};

/// Create the table if needed and insert every record in one transaction.
///
/// Records must already carry their trailing score. Returns the number of
/// rows inserted.
pub fn insert_records(path: &Path, schema: &TableSchema, records: &[Vec<i64>]) -> Result<usize> {
    let mut conn = Connection::open(path).map_err(|source| StoreError::database(path, source))?;
    conn.execute_batch(&schema.create_sql())
        .map_err(|source| StoreError::database(path, source))?;

    let tx = conn
        .transaction()
        .map_err(|source| StoreError::database(path, source))?;
    {
        let mut statement = tx
            .prepare(&schema.insert_sql())
            .map_err(|source| StoreError::database(path, source))?;
        for record in records {
            statement
                .execute(params_from_iter(record.iter()))
                .map_err(|source| StoreError::database(path, source))?;
        }
    }
    tx.commit()
        .map_err(|source| StoreError::database(path, source))?;
    debug!(
        path = %path.display(),
        table = %schema.table,
        rows = records.len(),
        "records inserted"
    );
    Ok(records.len())
}

/// Read every row of `table`, keeping the stored column order.
pub fn read_table(path: &Path, table: &str) -> Result<IntegerTable> {
    if !path.exists() {
        return Err(StoreError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)
        .map_err(|source| StoreError::database(path, source))?;
    if !table_exists(&conn, table).map_err(|source| StoreError::database(path, source))? {
        return Err(StoreError::MissingTable {
            table: table.to_string(),
            path: path.to_path_buf(),
        });
    }

    let mut statement = conn
        .prepare(&format!("SELECT * FROM {};", quote_identifier(table)))
        .map_err(|source| StoreError::database(path, source))?;
    let headers: Vec<String> = statement
        .column_names()
        .into_iter()
        .map(String::from)
        .collect();
    let width = headers.len();
    let rows = statement
        .query_map([], |row| {
            (0..width)
                .map(|idx| row.get::<_, i64>(idx))
                .collect::<rusqlite::Result<Vec<i64>>>()
        })
        .map_err(|source| StoreError::database(path, source))?
        .collect::<rusqlite::Result<Vec<Vec<i64>>>>()
        .map_err(|source| StoreError::database(path, source))?;
    debug!(path = %path.display(), table, rows = rows.len(), "table read");
    Ok(IntegerTable::new(headers, rows))
}

fn table_exists(conn: &Connection, table: &str) -> rusqlite::Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
        [table],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}
