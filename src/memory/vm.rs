//! The seam between the memory interface and the operating system

use super::protection::ProtectionFlags;
use crate::core::types::MemoryResult;

/// Raw virtual-memory access to a target process.
///
/// This is the opaque capability [`MemoryInterface`] calls into. On Windows
/// it is implemented by [`ProcessHandle`] over the kernel32 API; tests
/// implement it with an in-memory backing store.
///
/// Every call is synchronous and attempted exactly once. The byte counts
/// returned on success are informational: the interface layer treats any
/// `Ok` as a complete transfer and any `Err` as a total failure, with no
/// partial-buffer contract in between.
///
/// [`MemoryInterface`]: super::MemoryInterface
/// [`ProcessHandle`]: crate::process::ProcessHandle
pub trait ProcessVm {
    /// Read `buffer.len()` bytes starting at `address`
    fn read_memory(&self, address: usize, buffer: &mut [u8]) -> MemoryResult<usize>;

    /// Write `data.len()` bytes starting at `address`
    fn write_memory(&self, address: usize, data: &[u8]) -> MemoryResult<usize>;

    /// Change the protection of the region containing `address`, returning
    /// the protection it had before
    fn protect_memory(
        &self,
        address: usize,
        size: usize,
        protection: ProtectionFlags,
    ) -> MemoryResult<ProtectionFlags>;
}
