//! Field names with a fixed meaning in the fleet table.

/// Vehicle identity, persisted as the primary key.
pub const VEHICLE_ID: &str = "vehicle_id";
pub const MAXIMUM_LOAD: &str = "maximum_load";
pub const FUEL_CONSUMPTION: &str = "fuel_consumption";
pub const ENGINE_CAPACITY: &str = "engine_capacity";

/// Derived at the database stage; never present in source files.
pub const SCORE: &str = "score";
