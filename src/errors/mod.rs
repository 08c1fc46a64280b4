use thiserror::Error;

/// Failures surfaced at the service boundary.
///
/// Malformed individual fields never end up here; they degrade to 0 while parsing.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("no result records found: {0}")]
    MissingInput(String),
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),
    #[error("failed to build results: {0}")]
    UnexpectedTransform(String),
}

impl ServiceError {
    pub fn upstream(url: &str, err: impl std::fmt::Display) -> Self {
        ServiceError::UpstreamUnavailable(format!("{}: {}", fetch_context(url), err))
    }

    pub fn is_missing_input(&self) -> bool {
        matches!(self, ServiceError::MissingInput(_))
    }
}

/// Add context to fetch errors
pub fn fetch_context(url: &str) -> String {
    format!("Failed to fetch from: {}", url)
}

/// Add context to parse errors
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}
