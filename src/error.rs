use thiserror::Error;

/// Errors that can occur while loading transactions or writing reports
/// These are system-level errors (I/O, parsing), not data-quality issues:
/// malformed records degrade to defaults inside the pipeline instead
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV writing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
