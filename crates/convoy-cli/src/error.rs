//! Pipeline failure categories.

use thiserror::Error;

use convoy_ingest::IngestError;
use convoy_output::OutputError;
use convoy_store::StoreError;
use convoy_transform::TransformError;

/// Any failure that aborts a pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Input could not be read or is not shaped like a fleet table.
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// A required column is missing.
    #[error(transparent)]
    Transform(#[from] TransformError),

    /// The database could not be written or read.
    #[error(transparent)]
    Persistence(#[from] StoreError),

    /// An export file could not be written.
    #[error(transparent)]
    Export(#[from] OutputError),

    /// An outcome line could not be printed.
    #[error("failed to report outcome: {0}")]
    Report(#[from] std::io::Error),
}

impl PipelineError {
    /// Short category name used in logs.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Ingest(_) => "input",
            Self::Transform(_) => "schema",
            Self::Persistence(_) => "persistence",
            Self::Export(_) => "export",
            Self::Report(_) => "report",
        }
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
