use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("unknown region or country: {region_id}/{country_id}")]
    InvalidSelection {
        region_id: String,
        country_id: String,
    },
    #[error("order already exists: {0}")]
    DuplicateKey(String),
    #[error("order not found: {0}")]
    NotFound(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[cfg(feature = "storage-rocksdb")]
    #[error("storage error: {0}")]
    Storage(#[from] rocksdb::Error),
}

pub type Result<T> = std::result::Result<T, PaymentError>;
