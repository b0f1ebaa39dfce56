//! CLI library components for the convoy pipeline.

pub mod dispatch;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod report;

pub use dispatch::{PipelineRun, StageRecord, run_pipeline};
pub use error::{PipelineError, Result};
pub use pipeline::PipelineOptions;
pub use report::ConsoleReporter;
