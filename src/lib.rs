//! proctap — typed read/write access to the memory of another running
//! Windows process
//!
//! Attach to a process by executable name, then read and write primitives at
//! arbitrary virtual addresses through one owned [`MemoryInterface`]:
//!
//! ```no_run
//! # #[cfg(windows)] {
//! use proctap::{Address, MemoryInterface};
//!
//! let mut tap = MemoryInterface::attach("game.exe");
//! if tap.is_open() {
//!     let health_addr = Address::new(tap.base_address().as_usize() + 0x1A2B3C);
//!     if let Ok(health) = tap.read_i32(health_addr) {
//!         println!("health: {}", health);
//!     }
//!     tap.close();
//! }
//! # }
//! ```
//!
//! The typed layer is platform-independent and generic over the
//! [`ProcessVm`] seam; the Windows process plumbing behind
//! [`MemoryInterface::attach`] is gated to Windows hosts.

pub mod core;
pub mod memory;
#[cfg(windows)]
pub mod process;
#[cfg(windows)]
pub mod windows;

// Re-export main types from core module
pub use crate::core::types::{
    Address, MemoryError, MemoryResult, ModuleInfo, ProcessId, ProcessInfo,
};

pub use memory::{MemoryInterface, ProcessVm, ProtectionFlags};

#[cfg(windows)]
pub use process::{ProcessAccess, ProcessHandle};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_constants() {
        assert_eq!(crate::core::VERSION, env!("CARGO_PKG_VERSION"));
        assert_eq!(crate::core::AUTHORS, env!("CARGO_PKG_AUTHORS"));
    }

    #[test]
    fn test_address_reexport() {
        let addr = Address::new(0x1000);
        assert_eq!(addr.as_usize(), 0x1000);

        let null = Address::null();
        assert!(null.is_null());
    }

    #[test]
    fn test_module_info_reexport() {
        let module = ModuleInfo::new("game.exe".to_string(), Address::new(0x10000), 0x1000);
        assert_eq!(module.name, "game.exe");
        assert!(module.contains_address(Address::new(0x10500)));
    }

    #[test]
    fn test_process_info_reexport() {
        let process = ProcessInfo::new(1234, "test.exe".to_string());
        assert_eq!(process.pid, 1234);
        assert!(process.name_matches("TEST.EXE"));
    }

    #[test]
    fn test_memory_error_reexport() {
        let error = MemoryError::ProcessNotFound("notepad.exe".to_string());
        assert!(error.to_string().contains("Process not found"));

        let result: MemoryResult<u32> = Err(MemoryError::NotConnected);
        assert!(result.is_err());
    }

    #[test]
    fn test_process_id_alias() {
        let pid: ProcessId = 1234;
        assert_eq!(pid, 1234);
    }
}
