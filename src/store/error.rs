use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("request to property store failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("property store returned status {status}")]
    Status { status: u16 },

    #[error("could not decode property store response: {0}")]
    Decode(String),

    #[error("invalid property store URL: {0}")]
    InvalidUrl(String),
}

impl StoreError {
    /// The store answered, but not with an OK-class status
    pub fn is_rejection(&self) -> bool {
        matches!(self, StoreError::Status { .. })
    }
}
