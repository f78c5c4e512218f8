//! String conversion utilities for Windows API

use std::ffi::OsString;
use std::os::windows::ffi::OsStringExt;

/// Convert Windows wide string (UTF-16) to Rust string
pub fn wide_to_string(wide: &[u16]) -> String {
    let len = wide.iter().position(|&c| c == 0).unwrap_or(wide.len());
    let os_string = OsString::from_wide(&wide[..len]);
    os_string.to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_to_string() {
        let wide = vec![72u16, 101, 108, 108, 111, 0];
        assert_eq!(wide_to_string(&wide), "Hello");

        // No terminator: consume the whole slice
        let wide = vec![72u16, 105];
        assert_eq!(wide_to_string(&wide), "Hi");

        assert_eq!(wide_to_string(&[]), "");
    }
}
