use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Key resolution failed: {0}")]
    KeyError(#[from] kodo_keys::KeyError),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Upload rejected with status {status}: {body}")]
    UploadStatus { status: u16, body: String },

    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),

    #[error("Invalid storage configuration: {0}")]
    ConfigError(String),

    #[error("Could not read image: {0}")]
    ReadError(String),
}
