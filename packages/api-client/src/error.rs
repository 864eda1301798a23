//! Error types for API and storage operations.

/// Error type for backend API operations
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Authorization failed and the one-shot refresh could not recover it.
    /// Callers reset session state; the route guard handles the redirect.
    #[error("not authenticated")]
    Unauthorized,

    #[error("api error ({status}): {message}")]
    Status { status: u16, message: String },

    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Error type for the credential storage port.
///
/// Callers treat any storage failure as "no credential" after logging it;
/// these never reach rendering code.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("storage io: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupt credential record: {0}")]
    Corrupt(#[from] serde_json::Error),
}
