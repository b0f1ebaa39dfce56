//! Vehicle suitability scoring.
//!
//! Points accumulate from a base of 1:
//!
//! | predicate                                        | points |
//! |--------------------------------------------------|--------|
//! | base                                             | 1      |
//! | `maximum_load >= 20`                             | 2      |
//! | `fuel_consumption * 4.50 <= 230`                 | 1      |
//! | `fuel_consumption * 4.50 <= 2 * engine_capacity` | 1      |
//! | `fuel_consumption * 4.50 <= engine_capacity`     | 1      |
//!
//! The last predicate implies the one before it, so a vehicle that passes
//! every check reaches 6.

use convoy_model::fields::{ENGINE_CAPACITY, FUEL_CONSUMPTION, MAXIMUM_LOAD};

use crate::error::{Result, TransformError};

/// Converts fuel consumption into the cost proxy used by every fuel predicate.
pub const FUEL_COST_FACTOR: f64 = 4.50;

/// Cost proxy budget for a single trip.
pub const FUEL_BUDGET: f64 = 230.0;

/// Minimum maximum load for a heavy vehicle.
pub const HEAVY_LOAD_THRESHOLD: i64 = 20;

pub const MIN_SCORE: i64 = 1;
pub const MAX_SCORE: i64 = 6;

/// The three fields a score depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreInput {
    pub maximum_load: i64,
    pub fuel_consumption: i64,
    pub engine_capacity: i64,
}

/// Compute the score of one vehicle.
pub fn score(input: &ScoreInput) -> i64 {
    let fuel_cost = input.fuel_consumption as f64 * FUEL_COST_FACTOR;
    let engine_capacity = input.engine_capacity as f64;
    let mut points = MIN_SCORE;
    if input.maximum_load >= HEAVY_LOAD_THRESHOLD {
        points += 2;
    }
    if fuel_cost <= FUEL_BUDGET {
        points += 1;
    }
    if fuel_cost <= 2.0 * engine_capacity {
        points += 1;
    }
    if fuel_cost <= engine_capacity {
        points += 1;
    }
    points
}

/// Positions of the scoring fields within a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreColumns {
    pub maximum_load: usize,
    pub fuel_consumption: usize,
    pub engine_capacity: usize,
}

impl ScoreColumns {
    /// Locate the scoring fields in a header row.
    pub fn locate(headers: &[String]) -> Result<Self> {
        let find = |column: &'static str| {
            headers
                .iter()
                .position(|header| header == column)
                .ok_or(TransformError::MissingColumn { column })
        };
        Ok(Self {
            maximum_load: find(MAXIMUM_LOAD)?,
            fuel_consumption: find(FUEL_CONSUMPTION)?,
            engine_capacity: find(ENGINE_CAPACITY)?,
        })
    }

    /// Pick the scoring fields out of a record.
    ///
    /// The record must come from a table whose headers produced these
    /// positions.
    pub fn input(&self, record: &[i64]) -> ScoreInput {
        ScoreInput {
            maximum_load: record[self.maximum_load],
            fuel_consumption: record[self.fuel_consumption],
            engine_capacity: record[self.engine_capacity],
        }
    }

    /// The record's fields in original order with its score appended.
    pub fn append_score(&self, mut record: Vec<i64>) -> Vec<i64> {
        let points = score(&self.input(&record));
        record.push(points);
        record
    }
}
