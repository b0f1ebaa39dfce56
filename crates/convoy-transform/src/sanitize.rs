//! Digit sanitizing for validated delimited files.

use convoy_model::{CellValue, TextTable};
use tracing::trace;

/// Number of cells changed during one validation pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CorrectionCounter(usize);

impl CorrectionCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(self) -> usize {
        self.0
    }

    fn increment(&mut self) {
        self.0 += 1;
    }
}

/// Keep only the digits of a cell.
///
/// Digit cells come back unchanged. Any other cell is stripped to its ASCII
/// digits, in order, and counts as one correction. A cell without digits
/// becomes the empty string.
pub fn sanitize_cell(cell: CellValue, counter: &mut CorrectionCounter) -> String {
    match cell {
        CellValue::Digits(value) => value,
        CellValue::Text(value) => {
            counter.increment();
            let digits: String = value.chars().filter(char::is_ascii_digit).collect();
            trace!(original = %value, corrected = %digits, "cell corrected");
            digits
        }
    }
}

/// Sanitize every data cell of a table. Headers are left untouched.
pub fn sanitize_table(table: &TextTable) -> (TextTable, CorrectionCounter) {
    let mut counter = CorrectionCounter::new();
    let rows = table
        .rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|raw| sanitize_cell(CellValue::parse(raw), &mut counter))
                .collect()
        })
        .collect();
    (TextTable::new(table.headers.clone(), rows), counter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_pass_through() {
        let mut counter = CorrectionCounter::new();
        assert_eq!(sanitize_cell(CellValue::parse("0450"), &mut counter), "0450");
        assert_eq!(counter.count(), 0);
    }

    #[test]
    fn text_is_stripped_and_counted() {
        let mut counter = CorrectionCounter::new();
        assert_eq!(sanitize_cell(CellValue::parse("20 tonnes"), &mut counter), "20");
        assert_eq!(sanitize_cell(CellValue::parse("1.5l"), &mut counter), "15");
        assert_eq!(counter.count(), 2);
    }

    #[test]
    fn no_digits_yields_empty() {
        let mut counter = CorrectionCounter::new();
        assert_eq!(sanitize_cell(CellValue::parse("n/a"), &mut counter), "");
        assert_eq!(sanitize_cell(CellValue::parse(""), &mut counter), "");
        assert_eq!(counter.count(), 2);
    }

    #[test]
    fn table_headers_are_not_touched() {
        let table = TextTable::new(
            vec!["vehicle_id".to_string(), "maximum_load".to_string()],
            vec![
                vec!["1".to_string(), "25t".to_string()],
                vec!["2".to_string(), "10".to_string()],
            ],
        );
        let (sanitized, counter) = sanitize_table(&table);
        assert_eq!(sanitized.headers, table.headers);
        assert_eq!(sanitized.rows[0], vec!["1", "25"]);
        assert_eq!(sanitized.rows[1], vec!["2", "10"]);
        assert_eq!(counter.count(), 1);
    }
}
