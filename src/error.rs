use thiserror::Error;

/// Rejected grid operations. Nothing in the engine fails once a grid exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("invalid grid dimensions {width}x{height}: {reason}")]
    InvalidDimension {
        width: i64,
        height: i64,
        reason: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, GridError>;
