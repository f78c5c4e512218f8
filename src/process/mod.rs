//! Process management functionality for Windows
//!
//! Safe abstractions for process enumeration, handle management, and main
//! module resolution. Everything here is Windows-only; the portable memory
//! interface reaches it through the [`ProcessVm`](crate::memory::ProcessVm)
//! seam.

pub mod enumerator;
pub mod handle;
pub mod modules;

pub use enumerator::{enumerate_processes, find_process_by_name, ProcessEnumerator};
pub use handle::{ProcessAccess, ProcessHandle};
pub use modules::main_module;
