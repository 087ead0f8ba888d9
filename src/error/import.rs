use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Import document is not valid JSON for this format: {0}")]
    MalformedJson(#[from] serde_json::Error),
    #[error("Import document is invalid: {0}")]
    InvalidDocument(String),
    #[error("Import record {index} is invalid: {reason}")]
    InvalidRecord { index: usize, reason: String },
}
