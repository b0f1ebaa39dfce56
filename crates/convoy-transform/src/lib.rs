//! Record-level transforms for the convoy pipeline.
//!
//! - [`sanitize`]: strip non-digit characters from cells, counting corrections
//! - [`score`]: compute the suitability score of a vehicle
//! - [`partition`]: split scored vehicles between the two exports

pub mod error;
pub mod partition;
pub mod sanitize;
pub mod score;

pub use error::{Result, TransformError};
pub use partition::{DEFAULT_SCORE_THRESHOLD, ScorePartition, partition_by_score};
pub use sanitize::{CorrectionCounter, sanitize_cell, sanitize_table};
pub use score::{
    FUEL_BUDGET, FUEL_COST_FACTOR, HEAVY_LOAD_THRESHOLD, MAX_SCORE, MIN_SCORE, ScoreColumns,
    ScoreInput, score,
};
