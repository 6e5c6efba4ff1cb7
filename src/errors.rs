use thiserror::Error;

/// Error type that captures common fleet-ledger failures.
///
/// Every variant is recoverable: a failed command leaves the registry and
/// ledger exactly as they were before the attempt.
#[derive(Debug, Error)]
pub enum FleetError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("External service error: {0}")]
    ExternalService(String),
}

impl From<reqwest::Error> for FleetError {
    fn from(err: reqwest::Error) -> Self {
        Self::ExternalService(err.to_string())
    }
}

impl From<serde_json::Error> for FleetError {
    fn from(err: serde_json::Error) -> Self {
        Self::ExternalService(err.to_string())
    }
}
