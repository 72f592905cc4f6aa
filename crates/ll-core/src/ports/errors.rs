use thiserror::Error;

#[derive(Debug, Error)]
pub enum MenuRepositoryError {
    #[error("storage error: {0}")]
    Storage(String),
}

#[derive(Debug, Error)]
pub enum MenuSourceError {
    #[error("network error: {0}")]
    Network(String),

    #[error("malformed menu document: {0}")]
    Decode(String),
}

#[derive(Debug, Error)]
pub enum ProfileStoreError {
    #[error("storage error: {0}")]
    Storage(String),
}
