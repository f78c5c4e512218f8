//! Process information as reported by enumeration

use serde::{Deserialize, Serialize};
use std::fmt;

/// A running process as seen in a process snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessInfo {
    /// Process identifier
    pub pid: u32,
    /// Executable file name, e.g. "notepad.exe"
    pub name: String,
}

impl ProcessInfo {
    /// Create process info from a snapshot entry
    pub fn new(pid: u32, name: String) -> Self {
        ProcessInfo { pid, name }
    }

    /// Exact match on the executable file name.
    ///
    /// Windows file names compare case-insensitively, so "Notepad.exe"
    /// matches "notepad.exe".
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

impl fmt::Display for ProcessInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (pid {})", self.name, self.pid)
    }
}
