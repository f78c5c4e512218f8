//! Page protection flags

/// Memory protection flags in the PAGE_* encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtectionFlags {
    value: u32,
}

impl ProtectionFlags {
    // Protection constants
    pub const PAGE_NOACCESS: u32 = 0x01;
    pub const PAGE_READONLY: u32 = 0x02;
    pub const PAGE_READWRITE: u32 = 0x04;
    pub const PAGE_WRITECOPY: u32 = 0x08;
    pub const PAGE_EXECUTE: u32 = 0x10;
    pub const PAGE_EXECUTE_READ: u32 = 0x20;
    pub const PAGE_EXECUTE_READWRITE: u32 = 0x40;
    pub const PAGE_EXECUTE_WRITECOPY: u32 = 0x80;
    pub const PAGE_GUARD: u32 = 0x100;
    pub const PAGE_NOCACHE: u32 = 0x200;

    /// Create protection flags from a raw PAGE_* value
    pub const fn new(value: u32) -> Self {
        ProtectionFlags { value }
    }

    /// Read-only protection
    pub const fn read_only() -> Self {
        ProtectionFlags::new(Self::PAGE_READONLY)
    }

    /// Read-write protection
    pub const fn read_write() -> Self {
        ProtectionFlags::new(Self::PAGE_READWRITE)
    }

    /// Execute-read-write protection
    pub const fn execute_read_write() -> Self {
        ProtectionFlags::new(Self::PAGE_EXECUTE_READWRITE)
    }

    /// Check if protection allows reading
    pub const fn is_readable(&self) -> bool {
        self.value != Self::PAGE_NOACCESS && self.value != Self::PAGE_EXECUTE
    }

    /// Check if protection allows writing
    pub const fn is_writable(&self) -> bool {
        (self.value
            & (Self::PAGE_READWRITE
                | Self::PAGE_WRITECOPY
                | Self::PAGE_EXECUTE_READWRITE
                | Self::PAGE_EXECUTE_WRITECOPY))
            != 0
    }

    /// Check if protection allows execution
    pub const fn is_executable(&self) -> bool {
        (self.value
            & (Self::PAGE_EXECUTE
                | Self::PAGE_EXECUTE_READ
                | Self::PAGE_EXECUTE_READWRITE
                | Self::PAGE_EXECUTE_WRITECOPY))
            != 0
    }

    /// Check if guard page flag is set
    pub const fn is_guard(&self) -> bool {
        (self.value & Self::PAGE_GUARD) != 0
    }

    /// Check if no-cache flag is set
    pub const fn is_no_cache(&self) -> bool {
        (self.value & Self::PAGE_NOCACHE) != 0
    }

    /// Get the raw protection value
    pub const fn raw(&self) -> u32 {
        self.value
    }
}

impl std::fmt::Display for ProtectionFlags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // VirtualProtectEx reports modifier bits alongside the base
        // protection, so mask them off before matching
        let base = match self.value & 0xFF {
            Self::PAGE_NOACCESS => "NOACCESS",
            Self::PAGE_READONLY => "R",
            Self::PAGE_READWRITE => "RW",
            Self::PAGE_WRITECOPY => "WC",
            Self::PAGE_EXECUTE => "X",
            Self::PAGE_EXECUTE_READ => "RX",
            Self::PAGE_EXECUTE_READWRITE => "RWX",
            Self::PAGE_EXECUTE_WRITECOPY => "WCX",
            _ => return write!(f, "0x{:X}", self.value),
        };

        write!(f, "{}", base)?;
        if self.is_guard() {
            write!(f, "+G")?;
        }
        if self.is_no_cache() {
            write!(f, "+NC")?;
        }
        Ok(())
    }
}
