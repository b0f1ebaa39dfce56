use std::path::Path;

use csv::{ReaderBuilder, Terminator, WriterBuilder};
use tracing::debug;

use convoy_model::TextTable;

use crate::error::{IngestError, Result};

/// Read a comma-separated file with a header row.
///
/// Cells are kept verbatim. Every record must have as many fields as the
/// header row.
pub fn read_csv_table(path: &Path) -> Result<TextTable> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let parse_error = |source| IngestError::CsvParse {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(parse_error)?;
    let headers: Vec<String> = reader
        .headers()
        .map_err(parse_error)?
        .iter()
        .map(String::from)
        .collect();
    if headers.is_empty() {
        return Err(IngestError::MissingHeader {
            path: path.to_path_buf(),
        });
    }
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(parse_error)?;
        rows.push(record.iter().map(String::from).collect());
    }
    debug!(path = %path.display(), rows = rows.len(), "csv read");
    Ok(TextTable::new(headers, rows))
}

/// Write a table as comma-separated text, header first, one record per line.
pub fn write_csv_table(path: &Path, table: &TextTable) -> Result<()> {
    let write_error = |source| IngestError::CsvWrite {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_path(path)
        .map_err(write_error)?;
    writer.write_record(&table.headers).map_err(write_error)?;
    for row in &table.rows {
        writer.write_record(row).map_err(write_error)?;
    }
    writer
        .flush()
        .map_err(|source| write_error(csv::Error::from(source)))?;
    debug!(path = %path.display(), rows = table.row_count(), "csv written");
    Ok(())
}
