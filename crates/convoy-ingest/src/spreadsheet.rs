//! Spreadsheet reading.
//!
//! Every cell is rendered as text; no numeric coercion happens here. Whole
//! floats lose their fractional part so that `25.0` stored by a spreadsheet
//! application reads back as `25`.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use tracing::debug;

use convoy_model::TextTable;

use crate::error::{IngestError, Result};

/// Sheet holding the fleet.
pub const VEHICLES_SHEET: &str = "Vehicles";

/// Largest magnitude at which an `f64` still holds every integer exactly.
const EXACT_FLOAT_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Read one sheet as a text table. The first non-blank row is the header.
pub fn read_sheet(path: &Path, sheet: &str) -> Result<TextTable> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let mut workbook = open_workbook_auto(path).map_err(|error| IngestError::Workbook {
        path: path.to_path_buf(),
        message: error.to_string(),
    })?;
    let available = workbook.sheet_names();
    if !available.iter().any(|name| name == sheet) {
        return Err(IngestError::SheetNotFound {
            sheet: sheet.to_string(),
            path: path.to_path_buf(),
            available,
        });
    }
    let range = workbook
        .worksheet_range(sheet)
        .map_err(|error| IngestError::Workbook {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?;

    let mut rows = range
        .rows()
        .map(|row| row.iter().map(cell_text).collect::<Vec<String>>())
        .filter(|row| row.iter().any(|value| !value.is_empty()));
    let Some(headers) = rows.next() else {
        return Err(IngestError::MissingHeader {
            path: path.to_path_buf(),
        });
    };
    let width = headers.len();
    let rows: Vec<Vec<String>> = rows
        .map(|mut row| {
            row.resize(width, String::new());
            row
        })
        .collect();
    debug!(
        path = %path.display(),
        sheet,
        columns = width,
        rows = rows.len(),
        "sheet read"
    );
    Ok(TextTable::new(headers, rows))
}

/// Render a spreadsheet cell as text.
pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(value) => value.clone(),
        Data::Int(value) => value.to_string(),
        Data::Float(value) => format_float(*value),
        Data::Bool(true) => "True".to_string(),
        Data::Bool(false) => "False".to_string(),
        other => other.to_string(),
    }
}

fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < EXACT_FLOAT_LIMIT {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_scalars_as_text() {
        assert_eq!(cell_text(&Data::Empty), "");
        assert_eq!(cell_text(&Data::String("12 t".to_string())), "12 t");
        assert_eq!(cell_text(&Data::Int(-4)), "-4");
        assert_eq!(cell_text(&Data::Bool(true)), "True");
    }

    #[test]
    fn whole_floats_drop_the_fraction() {
        assert_eq!(cell_text(&Data::Float(25.0)), "25");
        assert_eq!(cell_text(&Data::Float(0.0)), "0");
        assert_eq!(cell_text(&Data::Float(2.5)), "2.5");
    }
}
