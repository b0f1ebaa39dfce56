//! Fleet persistence.
//!
//! Validated vehicles are stored in a single SQLite table whose columns are
//! derived from the source header row. Every column is an integer;
//! `vehicle_id` is the primary key and a trailing `score` column is added.

mod coerce;
mod database;
mod error;
mod schema;

pub use coerce::integer_rows;
pub use database::{insert_records, read_table};
pub use error::{Result, StoreError};
pub use schema::{ColumnConstraint, ColumnDef, DEFAULT_TABLE, TableSchema, quote_identifier};
