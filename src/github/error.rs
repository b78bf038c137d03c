use thiserror::Error;

/// Failures of a single fetch run. Every variant aborts the run; no
/// partial results are returned alongside an error.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid repository '{0}': expected owner/name")]
    InvalidRepo(String),

    #[error("repository not found: {0}")]
    NotFound(String),

    #[error("GitHub API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("GitHub API request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("failed to decode issues page {page}: {source}")]
    Decode {
        page: u32,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::NotFound(_) => Some(404),
            FetchError::Api { status, .. } => Some(*status),
            FetchError::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
