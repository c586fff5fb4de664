//! Windows implementation using Win32 and GDI.
//!
//! This module contains all Windows-specific code:
//! - The dialog window class, window procedure and modal loop
//! - Scoped GDI resource wrappers
//! - Painting of the dialog surface

pub mod dialog;
pub mod gdi;
pub mod paint;

// Re-export the dialog entry points
pub use dialog::{critical, information, question, show_message, warning};
