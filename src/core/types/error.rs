//! Custom error types for memory access

use std::fmt;
use thiserror::Error;

/// Main error type for memory operations
#[derive(Error, Debug)]
pub enum MemoryError {
    #[error("Invalid memory address: {0}")]
    InvalidAddress(String),

    #[error("Failed to read memory at {address}: {reason}")]
    ReadFailed { address: String, reason: String },

    #[error("Buffer too small: expected {expected}, got {actual}")]
    BufferTooSmall { expected: usize, actual: usize },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("UTF-8 conversion error: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),

    #[error("UTF-16 conversion error: {0}")]
    Utf16Error(#[from] std::string::FromUtf16Error),
}

/// Result type alias for memory operations
pub type MemoryResult<T> = Result<T, MemoryError>;

impl MemoryError {
    /// Creates a read failed error
    pub fn read_failed(address: impl fmt::Display, reason: impl Into<String>) -> Self {
        MemoryError::ReadFailed {
            address: address.to_string(),
            reason: reason.into(),
        }
    }

    /// Creates a buffer too small error
    pub fn buffer_too_small(expected: usize, actual: usize) -> Self {
        MemoryError::BufferTooSmall { expected, actual }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Address;

    #[test]
    fn test_error_display() {
        let err = MemoryError::InvalidAddress("0xDEADBEEF".to_string());
        assert_eq!(err.to_string(), "Invalid memory address: 0xDEADBEEF");

        let err = MemoryError::read_failed(Address::new(0x1000), "page fault");
        assert_eq!(
            err.to_string(),
            "Failed to read memory at 0x0000000000001000: page fault"
        );
    }

    #[test]
    fn test_helper_methods() {
        let err = MemoryError::buffer_too_small(256, 128);
        match err {
            MemoryError::BufferTooSmall { expected, actual } => {
                assert_eq!(expected, 256);
                assert_eq!(actual, 128);
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_from_implementations() {
        use std::io;

        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "test");
        let mem_err: MemoryError = io_err.into();
        assert!(matches!(mem_err, MemoryError::IoError(_)));

        let utf8_err = String::from_utf8(vec![0xFF, 0xFE, 0xFD]).unwrap_err();
        let mem_err: MemoryError = utf8_err.into();
        assert!(matches!(mem_err, MemoryError::Utf8Error(_)));
    }
}
