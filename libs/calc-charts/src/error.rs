//! Error types for calc-charts

use thiserror::Error;

/// Chart rendering errors
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// Statistics failure while building the summary chart
    #[error(transparent)]
    Stats(#[from] calc_engine::CalcError),
}

impl ChartError {
    pub fn empty_input(msg: impl Into<String>) -> Self {
        Self::EmptyInput(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, ChartError>;
