use thiserror::Error;

/// Failure taxonomy of the reporting core.
///
/// `DataUnavailable` is fatal at startup; `UnknownReport` is a caller
/// error; `NotFound` is benign (the delete endpoint stays idempotent);
/// `Validation` is reserved for listing field checks and is currently
/// never produced.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("data source unavailable: {0}")]
    DataUnavailable(String),

    #[error("unknown report: {0}")]
    UnknownReport(String),

    #[error("invalid listing: {0}")]
    Validation(String),

    #[error("no food listing with id {0}")]
    NotFound(String),
}
