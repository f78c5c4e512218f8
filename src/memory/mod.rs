//! Typed memory access over a process connection
//!
//! This module holds the whole functional surface of the crate:
//! - [`MemoryInterface`], the owned connection with typed read/write and
//!   page-unlock operations
//! - [`ProcessVm`], the seam to the operating system's memory API
//! - [`ProtectionFlags`], page protection in the PAGE_* encoding

pub mod interface;
pub mod protection;
pub mod vm;

pub use interface::MemoryInterface;
pub use protection::ProtectionFlags;
pub use vm::ProcessVm;
