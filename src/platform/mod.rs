//! Platform-specific implementations.
//!
//! The dialog shell is Win32-only. The model layer above it is portable, so
//! option parsing, layout and interaction logic build and test everywhere.

#[cfg(target_os = "windows")]
pub mod windows;

// Re-export the current platform's modules for convenience
#[cfg(target_os = "windows")]
pub use windows::*;
