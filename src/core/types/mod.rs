//! Core type definitions for proctap
//!
//! Fundamental types used throughout the crate: the address wrapper,
//! process and module information, and error types.

mod address;
mod error;
mod module_info;
mod process_info;

// Re-export all public types
pub use address::Address;
pub use error::{MemoryError, MemoryResult};
pub use module_info::ModuleInfo;
pub use process_info::ProcessInfo;

// Common type aliases
pub type ProcessId = u32;
