//! Main module resolution for an open process

use crate::core::types::{MemoryResult, ModuleInfo};
use crate::process::ProcessHandle;
use crate::windows::bindings::psapi;

/// Resolve the main module (executable image) of the process behind `handle`.
///
/// Requires the handle to carry query access.
pub fn main_module(handle: &ProcessHandle) -> MemoryResult<ModuleInfo> {
    unsafe { psapi::main_module(handle.raw()) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Address;

    #[test]
    #[cfg_attr(miri, ignore = "FFI not supported in Miri")]
    fn test_main_module_of_current_process() {
        let handle = ProcessHandle::open_for_memory_access(std::process::id())
            .expect("Failed to open current process");

        let module = main_module(&handle).unwrap();
        assert!(!module.name.is_empty());
        assert!(module.size > 0);
        assert_ne!(module.base_address, Address::null());
        assert!(module.contains_address(module.base_address));
    }
}
