use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    /// A field the transform depends on is absent from the header row.
    #[error("required column '{column}' not found")]
    MissingColumn { column: &'static str },
}

pub type Result<T> = std::result::Result<T, TransformError>;
