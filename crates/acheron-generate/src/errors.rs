use thiserror::Error;

/// Errors emitted by the generation engine.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("core error: {0}")]
    Core(#[from] acheron_core::Error),
    #[error("invalid pipeline: {0}")]
    InvalidPipeline(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
