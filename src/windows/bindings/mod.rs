//! Windows API bindings
//!
//! Low-level FFI bindings to Windows system libraries. All unsafe calls the
//! crate makes live here.

pub mod kernel32;
pub mod psapi;
