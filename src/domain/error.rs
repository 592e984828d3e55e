use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    #[error("Invalid period selector: {0:?} (expected \"this-week\" or \"last-week\")")]
    InvalidSelector(String),
    #[error("Unauthorized ({status}): check your API token")]
    Auth { status: u16 },
    #[error("Network error: {0}")]
    Network(String),
    #[error("Unexpected response shape: {0}")]
    UnexpectedResponseShape(String),
    #[error("Malformed summary: {0}")]
    MalformedSummary(String),
}
