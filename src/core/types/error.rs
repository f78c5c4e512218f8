//! Custom error types for proctap

use std::fmt;
use thiserror::Error;

/// Main error type for memory operations.
///
/// Every fallible operation reports exactly one of these; there is no retry
/// anywhere. The variants bucket OS-level causes coarsely: a `ReadFailed` does
/// not say whether the page was unmapped, protected, or the process exited.
#[derive(Error, Debug)]
pub enum MemoryError {
    #[error("Not connected to a target process")]
    NotConnected,

    #[error("Invalid memory address: {0}")]
    InvalidAddress(String),

    #[error("Process not found: {0}")]
    ProcessNotFound(String),

    #[error("Failed to read memory at {address}: {reason}")]
    ReadFailed { address: String, reason: String },

    #[error("Failed to write memory at {address}: {reason}")]
    WriteFailed { address: String, reason: String },

    #[error("Memory protection error: {0}")]
    ProtectionError(String),

    #[error("Module not found: {0}")]
    ModuleNotFound(String),

    #[error("Windows API: {0}")]
    WindowsApi(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
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

    /// Creates a write failed error
    pub fn write_failed(address: impl fmt::Display, reason: impl Into<String>) -> Self {
        MemoryError::WriteFailed {
            address: address.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MemoryError::NotConnected;
        assert_eq!(err.to_string(), "Not connected to a target process");

        let err = MemoryError::InvalidAddress("0xBAD".to_string());
        assert_eq!(err.to_string(), "Invalid memory address: 0xBAD");

        let err = MemoryError::ProcessNotFound("notepad.exe".to_string());
        assert_eq!(err.to_string(), "Process not found: notepad.exe");
    }

    #[test]
    fn test_helper_methods() {
        let err = MemoryError::read_failed("0xABCD", "invalid page");
        match err {
            MemoryError::ReadFailed { address, reason } => {
                assert_eq!(address, "0xABCD");
                assert_eq!(reason, "invalid page");
            }
            _ => panic!("Wrong error type"),
        }

        let err = MemoryError::write_failed("0xDEAD", "protected memory");
        match err {
            MemoryError::WriteFailed { address, reason } => {
                assert_eq!(address, "0xDEAD");
                assert_eq!(reason, "protected memory");
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_from_io_error() {
        use std::io;

        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "test");
        let mem_err: MemoryError = io_err.into();
        assert!(matches!(mem_err, MemoryError::IoError(_)));
    }

    #[test]
    fn test_memory_result_type() {
        fn example_function() -> MemoryResult<u32> {
            Ok(42)
        }

        fn failing_function() -> MemoryResult<u32> {
            Err(MemoryError::NotConnected)
        }

        assert_eq!(example_function().unwrap(), 42);
        assert!(failing_function().is_err());
    }
}
