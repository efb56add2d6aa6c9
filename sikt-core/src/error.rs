use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Record decoding failed: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
