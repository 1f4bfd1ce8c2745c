use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("client name is required")]
    EmptyClientName,
    #[error("invalid range: {0}")]
    InvalidRange(String),
    #[error("keyword cannot be empty")]
    EmptyKeyword,
    #[error("scrutiny origin cannot be empty")]
    EmptyScrutinyOrigin,
    #[error("invalid country code: {0}")]
    InvalidCountryCode(String),
    #[error("address region key cannot be empty")]
    EmptyRegionKey,
    #[error("duplicate address region key: {0}")]
    DuplicateRegionKey(String),
}
