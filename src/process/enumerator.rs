//! Process enumeration using the Windows ToolHelp32 API

use crate::core::types::{MemoryError, MemoryResult, ProcessInfo};
use std::mem;
use winapi::shared::minwindef::FALSE;
use winapi::um::handleapi::{CloseHandle, INVALID_HANDLE_VALUE};
use winapi::um::tlhelp32::{
    CreateToolhelp32Snapshot, Process32First, Process32Next, PROCESSENTRY32, TH32CS_SNAPPROCESS,
};
use winapi::um::winnt::HANDLE;

/// Process enumerator over a ToolHelp32 snapshot
pub struct ProcessEnumerator {
    snapshot: HANDLE,
    first_called: bool,
}

impl ProcessEnumerator {
    /// Take a snapshot of the running processes
    pub fn new() -> MemoryResult<Self> {
        unsafe {
            let snapshot = CreateToolhelp32Snapshot(TH32CS_SNAPPROCESS, 0);
            if snapshot.is_null() || snapshot == INVALID_HANDLE_VALUE {
                return Err(MemoryError::WindowsApi(
                    "Failed to create process snapshot".to_string(),
                ));
            }
            Ok(ProcessEnumerator {
                snapshot,
                first_called: false,
            })
        }
    }

    fn next_process(&mut self) -> Option<ProcessInfo> {
        unsafe {
            let mut entry: PROCESSENTRY32 = mem::zeroed();
            entry.dwSize = mem::size_of::<PROCESSENTRY32>() as u32;

            let success = if !self.first_called {
                self.first_called = true;
                Process32First(self.snapshot, &mut entry)
            } else {
                Process32Next(self.snapshot, &mut entry)
            };

            if success == FALSE {
                return None;
            }

            // Convert the executable name from the fixed-size i8 array
            let name = {
                let name_bytes = &entry.szExeFile;
                let null_pos = name_bytes
                    .iter()
                    .position(|&c| c == 0)
                    .unwrap_or(name_bytes.len());
                let name_u8: Vec<u8> = name_bytes[..null_pos].iter().map(|&c| c as u8).collect();
                String::from_utf8_lossy(&name_u8).into_owned()
            };

            Some(ProcessInfo::new(entry.th32ProcessID, name))
        }
    }
}

impl Drop for ProcessEnumerator {
    fn drop(&mut self) {
        if !self.snapshot.is_null() && self.snapshot != INVALID_HANDLE_VALUE {
            unsafe {
                let _ = CloseHandle(self.snapshot);
            }
        }
    }
}

impl Iterator for ProcessEnumerator {
    type Item = ProcessInfo;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_process()
    }
}

/// Enumerate all running processes
pub fn enumerate_processes() -> MemoryResult<Vec<ProcessInfo>> {
    Ok(ProcessEnumerator::new()?.collect())
}

/// Find the first process whose executable name matches exactly.
///
/// When several processes share the name, snapshot order decides which one
/// wins.
pub fn find_process_by_name(name: &str) -> MemoryResult<Option<ProcessInfo>> {
    let mut enumerator = ProcessEnumerator::new()?;
    Ok(enumerator.find(|p| p.name_matches(name)))
}
