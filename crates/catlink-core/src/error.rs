use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Malformed component: {0}")]
    MalformedComponent(String),
}

pub type Result<T> = std::result::Result<T, Error>;
