//! Error types for the profile API service

use std::fmt;

#[derive(Debug)]
pub enum ApiError {
    Io(Box<std::io::Error>),
    Config(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Io(err) => write!(f, "IO error: {}", err),
            ApiError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Io(err) => Some(err.as_ref()),
            ApiError::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::Io(Box::new(err))
    }
}

impl From<tracing_subscriber::filter::ParseError> for ApiError {
    fn from(err: tracing_subscriber::filter::ParseError) -> Self {
        ApiError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
