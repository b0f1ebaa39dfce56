//! Convoy ingestion utilities.
//!
//! Reads the fleet spreadsheet and reads/writes the delimited text files that
//! carry the fleet between pipeline stages.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use convoy_ingest::{VEHICLES_SHEET, read_sheet, write_csv_table};
//!
//! let table = read_sheet(Path::new("fleet.xlsx"), VEHICLES_SHEET)?;
//! write_csv_table(Path::new("fleet.csv"), &table)?;
//! ```

mod csv_table;
mod error;
mod spreadsheet;

// === Error Types ===
pub use error::{IngestError, Result};

// === Delimited Text ===
pub use csv_table::{read_csv_table, write_csv_table};

// === Spreadsheets ===
pub use spreadsheet::{VEHICLES_SHEET, cell_text, read_sheet};
