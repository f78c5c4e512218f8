//! Core module containing fundamental types for proctap
//!
//! This module provides the foundational building blocks used throughout
//! the crate: address handling, process and module information, and error
//! types.

pub mod types;

// Re-export commonly used types for convenience
pub use types::{Address, MemoryError, MemoryResult, ModuleInfo, ProcessInfo};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
