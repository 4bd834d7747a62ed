use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("denominator must be a positive integer, got {0}")]
    InvalidDenominator(i64),

    #[error("base must be finite and non-zero, got {0}")]
    InvalidBase(f64),

    #[error("cannot label a non-finite angle: {0}")]
    NonFiniteAngle(f64),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
