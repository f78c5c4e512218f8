//! Safe process handle wrapper with RAII semantics

use crate::core::types::MemoryResult;
use crate::memory::{ProcessVm, ProtectionFlags};
use crate::windows::bindings::kernel32;
use crate::windows::types::Handle;
use std::fmt;

/// Access rights for process handles
#[derive(Debug, Clone, Copy)]
pub struct ProcessAccess {
    value: u32,
}

impl ProcessAccess {
    /// Query information access
    pub const QUERY_INFORMATION: Self = Self { value: 0x0400 };
    /// Read memory access
    pub const VM_READ: Self = Self { value: 0x0010 };
    /// Write memory access
    pub const VM_WRITE: Self = Self { value: 0x0020 };
    /// Memory operations (query/protect)
    pub const VM_OPERATION: Self = Self { value: 0x0008 };

    /// Combine access rights
    pub fn combine(rights: &[Self]) -> Self {
        let mut value = 0;
        for right in rights {
            value |= right.value;
        }
        Self { value }
    }

    /// Get raw value
    pub fn value(&self) -> u32 {
        self.value
    }
}

/// An open connection to a target process.
///
/// Owns the underlying Windows handle; the handle is closed when this is
/// dropped. Implements [`ProcessVm`] so the memory interface can read, write
/// and reprotect through it.
pub struct ProcessHandle {
    handle: Handle,
    pid: u32,
    access: ProcessAccess,
}

impl ProcessHandle {
    /// Open a process with specified access rights
    pub fn open(pid: u32, access: ProcessAccess) -> MemoryResult<Self> {
        let raw_handle = kernel32::open_process(pid, access.value())?;
        Ok(ProcessHandle {
            handle: Handle::new(raw_handle),
            pid,
            access,
        })
    }

    /// Open a process with the full right set the memory interface needs:
    /// read, write, memory operations, and query (for module resolution)
    pub fn open_for_memory_access(pid: u32) -> MemoryResult<Self> {
        Self::open(
            pid,
            ProcessAccess::combine(&[
                ProcessAccess::QUERY_INFORMATION,
                ProcessAccess::VM_READ,
                ProcessAccess::VM_WRITE,
                ProcessAccess::VM_OPERATION,
            ]),
        )
    }

    /// Get the process ID
    pub fn pid(&self) -> u32 {
        self.pid
    }

    /// Get the raw handle
    ///
    /// # Safety
    /// The returned handle is only valid as long as this ProcessHandle exists
    pub unsafe fn raw(&self) -> winapi::um::winnt::HANDLE {
        self.handle.raw()
    }

    /// Get the access rights
    pub fn access(&self) -> ProcessAccess {
        self.access
    }

    /// Check if the underlying handle is non-null
    pub fn is_valid(&self) -> bool {
        !self.handle.is_null()
    }
}

impl ProcessVm for ProcessHandle {
    fn read_memory(&self, address: usize, buffer: &mut [u8]) -> MemoryResult<usize> {
        unsafe { kernel32::read_process_memory(self.handle.raw(), address, buffer) }
    }

    fn write_memory(&self, address: usize, data: &[u8]) -> MemoryResult<usize> {
        unsafe { kernel32::write_process_memory(self.handle.raw(), address, data) }
    }

    fn protect_memory(
        &self,
        address: usize,
        size: usize,
        protection: ProtectionFlags,
    ) -> MemoryResult<ProtectionFlags> {
        let old = unsafe {
            kernel32::virtual_protect_ex(self.handle.raw(), address, size, protection.raw())?
        };
        Ok(ProtectionFlags::new(old))
    }
}

impl fmt::Debug for ProcessHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessHandle")
            .field("pid", &self.pid)
            .field("access", &format!("0x{:X}", self.access.value()))
            .finish()
    }
}

impl fmt::Display for ProcessHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProcessHandle(pid={})", self.pid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_access_constants() {
        assert_eq!(ProcessAccess::QUERY_INFORMATION.value(), 0x0400);
        assert_eq!(ProcessAccess::VM_READ.value(), 0x0010);
        assert_eq!(ProcessAccess::VM_WRITE.value(), 0x0020);
        assert_eq!(ProcessAccess::VM_OPERATION.value(), 0x0008);
    }

    #[test]
    fn test_process_access_combine() {
        let combined = ProcessAccess::combine(&[ProcessAccess::VM_READ, ProcessAccess::VM_WRITE]);
        assert_eq!(combined.value(), 0x0030);

        let all_combined = ProcessAccess::combine(&[
            ProcessAccess::QUERY_INFORMATION,
            ProcessAccess::VM_READ,
            ProcessAccess::VM_WRITE,
            ProcessAccess::VM_OPERATION,
        ]);
        assert_eq!(all_combined.value(), 0x0438);
    }

    #[test]
    #[cfg_attr(miri, ignore = "FFI not supported in Miri")]
    fn test_open_invalid_process() {
        // Opening process with PID 0 should fail
        let result = ProcessHandle::open_for_memory_access(0);
        assert!(result.is_err());
    }

    #[test]
    fn test_null_handle_is_invalid() {
        let handle = ProcessHandle {
            handle: Handle::null(),
            pid: 1234,
            access: ProcessAccess::VM_READ,
        };
        assert!(!handle.is_valid());
    }

    #[test]
    #[cfg_attr(miri, ignore = "FFI not supported in Miri")]
    fn test_open_current_process() {
        let current_pid = std::process::id();

        if let Ok(handle) = ProcessHandle::open_for_memory_access(current_pid) {
            assert_eq!(handle.pid(), current_pid);
            assert!(handle.is_valid());

            // Read our own memory through the OS seam
            let value: u64 = 0xDEADBEEFCAFEBABE;
            let mut buffer = [0u8; 8];
            let address = &value as *const u64 as usize;
            handle.read_memory(address, &mut buffer).unwrap();
            assert_eq!(u64::from_le_bytes(buffer), value);
        }
    }
}
