//! Psapi.dll bindings for module information

use crate::core::types::{Address, MemoryError, MemoryResult, ModuleInfo};
use crate::windows::utils::string_conv::wide_to_string;
use std::mem;
use winapi::shared::minwindef::{DWORD, FALSE, HMODULE, MAX_PATH};
use winapi::um::psapi::{EnumProcessModules, GetModuleBaseNameW, GetModuleInformation, MODULEINFO};
use winapi::um::winnt::HANDLE;

/// Resolve the main module (the executable image) of a process.
///
/// EnumProcessModules reports the main module first.
///
/// # Safety
/// The handle must be a valid process handle with query and read access
pub unsafe fn main_module(handle: HANDLE) -> MemoryResult<ModuleInfo> {
    let mut module: HMODULE = mem::zeroed();
    let mut cb_needed: DWORD = 0;

    let result = EnumProcessModules(
        handle,
        &mut module,
        mem::size_of::<HMODULE>() as DWORD,
        &mut cb_needed,
    );

    if result == FALSE || cb_needed == 0 {
        return Err(MemoryError::ModuleNotFound(
            "Failed to enumerate process modules".to_string(),
        ));
    }

    let mut base_name: [u16; MAX_PATH] = [0; MAX_PATH];
    let name_len = GetModuleBaseNameW(handle, module, base_name.as_mut_ptr(), MAX_PATH as DWORD);

    if name_len == 0 {
        return Err(MemoryError::WindowsApi(
            "Failed to get module base name".to_string(),
        ));
    }

    let name = wide_to_string(&base_name[..name_len as usize]);

    let mut mod_info: MODULEINFO = mem::zeroed();
    let result = GetModuleInformation(
        handle,
        module,
        &mut mod_info,
        mem::size_of::<MODULEINFO>() as DWORD,
    );

    if result == FALSE {
        return Err(MemoryError::WindowsApi(
            "Failed to get module information".to_string(),
        ));
    }

    Ok(ModuleInfo::new(
        name,
        Address::from(mod_info.lpBaseOfDll as usize),
        mod_info.SizeOfImage as usize,
    ))
}
