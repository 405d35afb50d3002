use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("Unknown payment provider: {0}")]
    UnknownProvider(String),
    #[error("Payment provider already registered: {0}")]
    DuplicateProvider(String),
    #[error("Provider {provider} failed to {operation}: {reason}")]
    ProviderOperation {
        provider: String,
        operation: String,
        reason: String,
    },
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Config error: {0}")]
    ConfigError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PaymentError>;
