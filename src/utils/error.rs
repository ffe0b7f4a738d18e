use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReceiptError {
    #[error("No receipt found for id {id}")]
    NotFound { id: String },

    #[error("Invalid receipt: {message}")]
    InvalidReceipt { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Server error: {message}")]
    ServerError { message: String },
}

impl ReceiptError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Message shown to a person at the terminal, without internal detail.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::NotFound { .. } => "receipt not found".to_string(),
            Self::InvalidReceipt { message } => format!("The receipt could not be read: {}", message),
            Self::IoError(e) => format!("File access failed: {}", e),
            Self::SerializationError(e) => format!("Malformed JSON: {}", e),
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            Self::ServerError { message } => format!("The server stopped: {}", message),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReceiptError>;
