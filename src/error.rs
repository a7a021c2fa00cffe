//! Error handling for the tessera library
//!
//! One crate-wide error enum with detailed payloads for every failure a
//! container operation can report.

use thiserror::Error;

/// Main error type for the tessera library
#[derive(Error, Debug)]
pub enum TesseraError {
    /// Index out of bounds access
    #[error("Out of bounds: index {index}, size {size}")]
    OutOfBounds {
        /// The invalid index
        index: usize,
        /// The valid size/length
        size: usize,
    },

    /// Invalid range bounds (start past end, or end past size)
    #[error("Invalid range: [{start}, {end}) over size {size}")]
    InvalidRange {
        /// Range start
        start: usize,
        /// Range end (exclusive)
        end: usize,
        /// The valid size/length
        size: usize,
    },

    /// Requested element count exceeds what a size computation can express
    #[error("Capacity overflow: requested {elements} elements")]
    CapacityOverflow {
        /// Number of elements requested
        elements: usize,
    },

    /// The system allocator refused the request
    #[error("Memory allocation failed: requested {size} bytes")]
    OutOfMemory {
        /// Number of bytes requested
        size: usize,
    },

    /// Lookup key is not present
    #[error("Key not found")]
    KeyNotFound,

    /// Configuration or parameter errors
    #[error("Invalid configuration: {message}")]
    Configuration {
        /// Configuration error message
        message: String,
    },
}

impl TesseraError {
    /// Create an out of bounds error
    pub fn out_of_bounds(index: usize, size: usize) -> Self {
        Self::OutOfBounds { index, size }
    }

    /// Create an invalid range error
    pub fn invalid_range(start: usize, end: usize, size: usize) -> Self {
        Self::InvalidRange { start, end, size }
    }

    /// Create a capacity overflow error
    pub fn capacity_overflow(elements: usize) -> Self {
        Self::CapacityOverflow { elements }
    }

    /// Create an out of memory error
    pub fn out_of_memory(size: usize) -> Self {
        Self::OutOfMemory { size }
    }

    /// Create a key not found error
    pub fn key_not_found() -> Self {
        Self::KeyNotFound
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration { message: message.into() }
    }

    /// Check if this is a recoverable error
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::OutOfMemory { .. } => true,
            Self::OutOfBounds { .. } => false,
            Self::InvalidRange { .. } => false,
            Self::CapacityOverflow { .. } => false,
            Self::KeyNotFound => false,
            Self::Configuration { .. } => false,
        }
    }

    /// Get the error category for logging/metrics
    pub fn category(&self) -> &'static str {
        match self {
            Self::OutOfBounds { .. } => "bounds",
            Self::InvalidRange { .. } => "range",
            Self::CapacityOverflow { .. } => "capacity",
            Self::OutOfMemory { .. } => "memory",
            Self::KeyNotFound => "lookup",
            Self::Configuration { .. } => "config",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, TesseraError>;

/// Assert that an index is within bounds
#[inline]
pub fn check_bounds(index: usize, size: usize) -> Result<()> {
    if index >= size {
        Err(TesseraError::out_of_bounds(index, size))
    } else {
        Ok(())
    }
}

/// Assert that a half-open range is within bounds
#[inline]
pub fn check_range(start: usize, end: usize, size: usize) -> Result<()> {
    if start > end || end > size {
        Err(TesseraError::invalid_range(start, end, size))
    } else {
        Ok(())
    }
}
