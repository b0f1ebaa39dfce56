use convoy_model::TextTable;

use crate::error::{Result, StoreError};

/// Convert every cell of a validated table to an integer.
///
/// Empty cells are rejected rather than stored as zero or null. Row numbers
/// in errors count data rows from 1.
pub fn integer_rows(table: &TextTable) -> Result<Vec<Vec<i64>>> {
    table
        .rows
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            row.iter()
                .zip(&table.headers)
                .map(|(value, column)| parse_integer(value, idx + 1, column))
                .collect()
        })
        .collect()
}

fn parse_integer(value: &str, row: usize, column: &str) -> Result<i64> {
    if value.is_empty() {
        return Err(StoreError::EmptyValue {
            row,
            column: column.to_string(),
        });
    }
    value.parse::<i64>().map_err(|_| StoreError::InvalidInteger {
        row,
        column: column.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: Vec<Vec<&str>>) -> TextTable {
        TextTable::new(
            vec!["vehicle_id".to_string(), "maximum_load".to_string()],
            rows.into_iter()
                .map(|row| row.into_iter().map(String::from).collect())
                .collect(),
        )
    }

    #[test]
    fn parses_digit_strings() {
        let rows = integer_rows(&table(vec![vec!["1", "020"], vec!["2", "7"]])).expect("rows");
        assert_eq!(rows, vec![vec![1, 20], vec![2, 7]]);
    }

    #[test]
    fn rejects_empty_cells() {
        let error = integer_rows(&table(vec![vec!["1", "5"], vec!["2", ""]])).expect_err("empty");
        match error {
            StoreError::EmptyValue { row, column } => {
                assert_eq!(row, 2);
                assert_eq!(column, "maximum_load");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_overflowing_values() {
        let error = integer_rows(&table(vec![vec!["1", "99999999999999999999"]]))
            .expect_err("overflow");
        assert!(matches!(error, StoreError::InvalidInteger { row: 1, .. }));
    }
}
