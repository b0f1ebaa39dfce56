//! Shared helpers for export writers.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::{OutputError, Result};

/// Root element of the markup export and key of the data export.
pub const EXPORT_ROOT: &str = "convoy";

/// Element wrapping one vehicle in the markup export.
pub const EXPORT_ROW: &str = "vehicle";

/// Create (or truncate) an export file behind a buffered writer.
pub fn create_export_file(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).map_err(|source| OutputError::FileCreate {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufWriter::new(file))
}

/// Check whether `name` can be used as an XML element name.
///
/// Accepts ASCII names starting with a letter or underscore and continuing
/// with letters, digits, `_`, `-` or `.`.
pub fn is_valid_element_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == '_') {
        return false;
    }
    chars.all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '_' | '-' | '.'))
}

/// Fail on the first name that is not a valid element name.
pub fn ensure_element_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Result<()> {
    for name in names {
        if !is_valid_element_name(name) {
            return Err(OutputError::InvalidElementName {
                name: name.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_field_names() {
        assert!(is_valid_element_name("vehicle_id"));
        assert!(is_valid_element_name("_load"));
        assert!(is_valid_element_name("fuel.consumption-l"));
    }

    #[test]
    fn rejects_invalid_names() {
        assert!(!is_valid_element_name(""));
        assert!(!is_valid_element_name("1st"));
        assert!(!is_valid_element_name("max load"));
        assert!(!is_valid_element_name("<id>"));
    }

    #[test]
    fn reports_first_invalid_name() {
        let error = ensure_element_names(["ok", "not ok", "also bad"]).expect_err("invalid");
        assert!(matches!(error, OutputError::InvalidElementName { name } if name == "not ok"));
    }
}
