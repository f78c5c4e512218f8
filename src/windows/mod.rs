//! Windows API layer
//!
//! Safe wrappers around the Windows API functions the memory interface
//! needs. Unsafe FFI is contained within this module with error handling at
//! each call site.

pub mod bindings;
pub mod types;
pub mod utils;

pub use types::Handle;
