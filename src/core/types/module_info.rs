//! Loaded module information

use super::address::Address;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A module loaded into the target process
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleInfo {
    /// Module file name, e.g. "game.exe"
    pub name: String,
    /// Virtual address the module is loaded at
    pub base_address: Address,
    /// Size of the module image in bytes
    pub size: usize,
}

impl ModuleInfo {
    /// Create new module info
    pub fn new(name: String, base_address: Address, size: usize) -> Self {
        ModuleInfo {
            name,
            base_address,
            size,
        }
    }

    /// Check if an address falls within this module's image
    pub fn contains_address(&self, address: Address) -> bool {
        let addr = address.as_usize();
        let base = self.base_address.as_usize();
        addr >= base && addr < base + self.size
    }
}

impl fmt::Display for ModuleInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} @ {} ({} bytes)",
            self.name, self.base_address, self.size
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_info_new() {
        let module = ModuleInfo::new("game.exe".to_string(), Address::new(0x400000), 0x1000);
        assert_eq!(module.name, "game.exe");
        assert_eq!(module.base_address, Address::new(0x400000));
        assert_eq!(module.size, 0x1000);
    }

    #[test]
    fn test_contains_address() {
        let module = ModuleInfo::new("game.exe".to_string(), Address::new(0x400000), 0x1000);
        assert!(module.contains_address(Address::new(0x400000)));
        assert!(module.contains_address(Address::new(0x400FFF)));
        assert!(!module.contains_address(Address::new(0x401000)));
        assert!(!module.contains_address(Address::new(0x3FFFFF)));
    }
}
