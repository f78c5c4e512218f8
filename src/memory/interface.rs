//! Typed memory interface over an open process connection

use super::protection::ProtectionFlags;
use super::vm::ProcessVm;
use crate::core::types::{Address, MemoryError, MemoryResult};
use tracing::debug;

/// Typed read/write access to the memory of one target process.
///
/// An instance either owns an open connection to its target or is detached.
/// Detachment is reached in three ways: construction found no matching
/// process, the OS refused to open a handle, or [`close`](Self::close) was
/// called. A detached instance is inert, not broken: every operation fails
/// with [`MemoryError::NotConnected`] without touching the OS, and callers
/// are expected to check [`is_open`](Self::is_open) after construction.
///
/// The base address of the target's main executable module is resolved once
/// at construction and never refreshed; it stays zero when detached or when
/// the module could not be resolved.
///
/// One instance is meant for single-threaded use. Nothing coordinates two
/// instances attached to the same process; concurrent writes race.
pub struct MemoryInterface<V: ProcessVm> {
    connection: Option<V>,
    base_address: Address,
}

impl<V: ProcessVm> MemoryInterface<V> {
    /// Create a detached instance with no connection and a zero base address
    pub fn detached() -> Self {
        MemoryInterface {
            connection: None,
            base_address: Address::null(),
        }
    }

    /// Assemble an interface from an already-open connection and a resolved
    /// base address
    pub fn from_parts(connection: V, base_address: Address) -> Self {
        MemoryInterface {
            connection: Some(connection),
            base_address,
        }
    }

    /// True while a connection to the target is held
    pub fn is_open(&self) -> bool {
        self.connection.is_some()
    }

    /// Base address of the target's main module, zero when unresolved
    pub fn base_address(&self) -> Address {
        self.base_address
    }

    /// Release the connection. Idempotent: closing a detached instance is a
    /// no-op. Once closed the instance stays detached for good.
    pub fn close(&mut self) {
        if let Some(connection) = self.connection.take() {
            debug!("closing connection to target process");
            drop(connection);
            self.base_address = Address::null();
        }
    }

    fn connection(&self) -> MemoryResult<&V> {
        self.connection.as_ref().ok_or(MemoryError::NotConnected)
    }

    /// Change the protection of the page containing `address` to
    /// read/write/execute.
    ///
    /// One-way: the superseded protection is discarded and there is no
    /// corresponding relock. Normally only needed before patching code.
    pub fn unlock_page(&self, address: Address) -> MemoryResult<()> {
        let connection = self.connection()?;
        let old = connection.protect_memory(
            address.as_usize(),
            1,
            ProtectionFlags::execute_read_write(),
        )?;
        debug!(%address, previous = %old, "unlocked page for read/write/execute");
        Ok(())
    }

    /// Read exactly `size` bytes starting at `address`.
    ///
    /// An OS-level failure anywhere in the range is a total failure; there
    /// is no partial-buffer result.
    pub fn read_bytes(&self, address: Address, size: usize) -> MemoryResult<Vec<u8>> {
        let connection = self.connection()?;
        let mut buffer = vec![0u8; size];
        connection.read_memory(address.as_usize(), &mut buffer)?;
        Ok(buffer)
    }

    fn read_exact<const N: usize>(&self, address: Address) -> MemoryResult<[u8; N]> {
        let connection = self.connection()?;
        let mut buffer = [0u8; N];
        connection.read_memory(address.as_usize(), &mut buffer)?;
        Ok(buffer)
    }

    /// Read one byte
    pub fn read_u8(&self, address: Address) -> MemoryResult<u8> {
        Ok(self.read_exact::<1>(address)?[0])
    }

    /// Read a little-endian 16-bit signed integer
    pub fn read_i16(&self, address: Address) -> MemoryResult<i16> {
        Ok(i16::from_le_bytes(self.read_exact(address)?))
    }

    /// Read a little-endian 32-bit signed integer
    pub fn read_i32(&self, address: Address) -> MemoryResult<i32> {
        Ok(i32::from_le_bytes(self.read_exact(address)?))
    }

    /// Read a little-endian 64-bit signed integer
    pub fn read_i64(&self, address: Address) -> MemoryResult<i64> {
        Ok(i64::from_le_bytes(self.read_exact(address)?))
    }

    /// Read a little-endian IEEE-754 single
    pub fn read_f32(&self, address: Address) -> MemoryResult<f32> {
        Ok(f32::from_le_bytes(self.read_exact(address)?))
    }

    /// Read a little-endian IEEE-754 double
    pub fn read_f64(&self, address: Address) -> MemoryResult<f64> {
        Ok(f64::from_le_bytes(self.read_exact(address)?))
    }

    /// Read a NUL-terminated string one byte at a time.
    ///
    /// Each byte is taken as a single-byte character code. The terminator is
    /// not included in the result. There is no length bound: an unterminated
    /// string keeps reading until the OS fails at an unmapped page, and that
    /// failure discards whatever had accumulated. A failed string read is a
    /// failure, never a truncated string.
    pub fn read_string(&self, address: Address) -> MemoryResult<String> {
        let mut result = String::new();
        let mut cursor = address;
        loop {
            let byte = self.read_u8(cursor)?;
            if byte == 0 {
                return Ok(result);
            }
            result.push(char::from(byte));
            cursor = cursor.offset(1);
        }
    }

    /// Write `data` starting at `address`.
    ///
    /// An OS-level failure is a total failure from the caller's perspective,
    /// even if the OS transferred part of the buffer before failing.
    pub fn write_bytes(&self, address: Address, data: &[u8]) -> MemoryResult<()> {
        let connection = self.connection()?;
        connection.write_memory(address.as_usize(), data)?;
        Ok(())
    }

    /// Write one byte
    pub fn write_u8(&self, address: Address, value: u8) -> MemoryResult<()> {
        self.write_bytes(address, &[value])
    }

    /// Write a little-endian 16-bit signed integer
    pub fn write_i16(&self, address: Address, value: i16) -> MemoryResult<()> {
        self.write_bytes(address, &value.to_le_bytes())
    }

    /// Write a little-endian 32-bit signed integer
    pub fn write_i32(&self, address: Address, value: i32) -> MemoryResult<()> {
        self.write_bytes(address, &value.to_le_bytes())
    }

    /// Write a little-endian 64-bit signed integer
    pub fn write_i64(&self, address: Address, value: i64) -> MemoryResult<()> {
        self.write_bytes(address, &value.to_le_bytes())
    }

    /// Write a little-endian IEEE-754 single
    pub fn write_f32(&self, address: Address, value: f32) -> MemoryResult<()> {
        self.write_bytes(address, &value.to_le_bytes())
    }

    /// Write a little-endian IEEE-754 double
    pub fn write_f64(&self, address: Address, value: f64) -> MemoryResult<()> {
        self.write_bytes(address, &value.to_le_bytes())
    }

    /// Write a string as single-byte character codes.
    ///
    /// Characters outside the single-byte range are truncated to their low
    /// byte. No terminating NUL is appended: overwriting a longer string in
    /// place leaves its tail intact, so callers that need a terminator must
    /// include one themselves.
    pub fn write_string(&self, address: Address, value: &str) -> MemoryResult<()> {
        let bytes: Vec<u8> = value.chars().map(|c| c as u8).collect();
        self.write_bytes(address, &bytes)
    }
}

#[cfg(windows)]
impl MemoryInterface<crate::process::ProcessHandle> {
    /// Attach to the first running process whose executable name matches
    /// `process_name` exactly.
    ///
    /// Never fails: when no process matches, the OS denies the handle, or
    /// enumeration itself errors, the result is a detached instance and the
    /// cause is logged. When the handle opens but the main module cannot be
    /// resolved, the instance is connected with a zero base address.
    pub fn attach(process_name: &str) -> Self {
        use crate::process::{self, ProcessHandle};
        use tracing::warn;

        let target = match process::find_process_by_name(process_name) {
            Ok(Some(target)) => target,
            Ok(None) => {
                debug!(process_name, "no matching process found");
                return Self::detached();
            }
            Err(err) => {
                warn!(process_name, %err, "process enumeration failed");
                return Self::detached();
            }
        };

        let handle = match ProcessHandle::open_for_memory_access(target.pid) {
            Ok(handle) => handle,
            Err(err) => {
                warn!(pid = target.pid, %err, "failed to open process handle");
                return Self::detached();
            }
        };

        let base_address = match process::main_module(&handle) {
            Ok(module) => {
                debug!(pid = target.pid, module = %module, "attached to process");
                module.base_address
            }
            Err(err) => {
                warn!(pid = target.pid, %err, "main module unresolved, base address is zero");
                Address::null()
            }
        };

        Self::from_parts(handle, base_address)
    }
}
