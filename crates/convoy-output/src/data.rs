//! Data-interchange (JSON) export.
//!
//! A single object whose only key holds one object per vehicle, with fields
//! in header order, pretty-printed with a 4-space indent.

use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde::ser::{SerializeMap, SerializeSeq, Serializer};
use serde_json::ser::PrettyFormatter;
use tracing::debug;

use convoy_model::IntegerTable;

use crate::common::{EXPORT_ROOT, create_export_file};
use crate::error::Result;

/// Options for the data export.
#[derive(Debug, Clone)]
pub struct DataOptions {
    pub key: String,
    pub indent: usize,
}

impl Default for DataOptions {
    fn default() -> Self {
        Self {
            key: EXPORT_ROOT.to_string(),
            indent: 4,
        }
    }
}

/// Write the data export to `path`. Returns the number of vehicles written.
pub fn write_data_export(
    path: &Path,
    table: &IntegerTable,
    options: &DataOptions,
) -> Result<usize> {
    let mut writer = render_data(create_export_file(path)?, table, options)?;
    writer.flush()?;
    debug!(path = %path.display(), rows = table.row_count(), "data export written");
    Ok(table.row_count())
}

/// Render the data export into any writer and hand the writer back.
pub fn render_data<W: Write>(inner: W, table: &IntegerTable, options: &DataOptions) -> Result<W> {
    let indent = " ".repeat(options.indent);
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(inner, formatter);
    DataExport {
        key: &options.key,
        table,
    }
    .serialize(&mut serializer)?;
    Ok(serializer.into_inner())
}

struct DataExport<'a> {
    key: &'a str,
    table: &'a IntegerTable,
}

impl Serialize for DataExport<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.key, &Vehicles(self.table))?;
        map.end()
    }
}

struct Vehicles<'a>(&'a IntegerTable);

impl Serialize for Vehicles<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.row_count()))?;
        for row in &self.0.rows {
            seq.serialize_element(&Vehicle {
                headers: &self.0.headers,
                values: row,
            })?;
        }
        seq.end()
    }
}

struct Vehicle<'a> {
    headers: &'a [String],
    values: &'a [i64],
}

impl Serialize for Vehicle<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.headers.len()))?;
        for (field, value) in self.headers.iter().zip(self.values) {
            map.serialize_entry(field, value)?;
        }
        map.end()
    }
}
