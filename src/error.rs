use thiserror::Error;

/// Errors that can occur while measuring a polygon.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum AreaError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("projection failed: {0}")]
    Projection(String),

    #[error("failed to read polygons: {0}")]
    Read(String),

    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
}

pub type Result<T> = std::result::Result<T, AreaError>;
