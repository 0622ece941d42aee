use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OracleError {
    #[error("transport error: {0}")]
    Transport(reqwest::Error),

    #[error("search service returned HTTP {0}")]
    Status(u16),

    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("no response within {0:?}")]
    Timeout(Duration),
}

pub type Result<T> = std::result::Result<T, OracleError>;
