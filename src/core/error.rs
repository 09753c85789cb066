//! Error types for the pricer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PricerError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Data error: {0}")]
    Data(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Plot error: {0}")]
    Plot(String),

    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type PricerResult<T> = Result<T, PricerError>;

impl PricerError {
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// True for failures of the quote fetch itself (transport or response shape)
    pub fn is_quote_failure(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Data(_))
    }
}
