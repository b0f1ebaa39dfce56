//! Split scored vehicles between the two exports.

use convoy_model::IntegerTable;
use convoy_model::fields::SCORE;
use tracing::debug;

use crate::error::{Result, TransformError};

/// Scores above this go to the data export; the rest go to the markup export.
pub const DEFAULT_SCORE_THRESHOLD: i64 = 3;

/// Both halves of a scored table, without the score column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScorePartition {
    /// Rows scoring above the threshold.
    pub high: IntegerTable,
    /// Rows scoring at or below the threshold.
    pub low: IntegerTable,
}

/// Partition a scored table by its `score` column and drop that column.
///
/// Every row lands in exactly one half, in its original order.
pub fn partition_by_score(table: &IntegerTable, threshold: i64) -> Result<ScorePartition> {
    let score_index = table
        .column_index(SCORE)
        .ok_or(TransformError::MissingColumn { column: SCORE })?;
    let headers: Vec<String> = table
        .headers
        .iter()
        .enumerate()
        .filter(|(idx, _)| *idx != score_index)
        .map(|(_, header)| header.clone())
        .collect();
    let mut high = IntegerTable::with_headers(headers.clone());
    let mut low = IntegerTable::with_headers(headers);
    for row in &table.rows {
        let score = row[score_index];
        let fields: Vec<i64> = row
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != score_index)
            .map(|(_, value)| *value)
            .collect();
        if score > threshold {
            high.rows.push(fields);
        } else {
            low.rows.push(fields);
        }
    }
    debug!(
        threshold,
        high = high.row_count(),
        low = low.row_count(),
        "partitioned by score"
    );
    Ok(ScorePartition { high, low })
}
