use std::fmt;

/// Error types for filter operations
#[derive(Debug, Clone, PartialEq)]
pub enum FilterError {
    /// Window size must be at least 1
    InvalidWindowSize(usize),
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterError::InvalidWindowSize(size) => {
                write!(f, "Invalid window size: {}. Window size must be at least 1", size)
            }
        }
    }
}

impl std::error::Error for FilterError {}

/// Result type for filter operations
pub type Result<T> = std::result::Result<T, FilterError>;
