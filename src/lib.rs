//! A small modal message box built directly on Win32, with custom-drawn
//! buttons and status badge instead of the stock `MessageBoxW` look.
//!
//! The crate splits in two. The [`model`] layer is pure: flag parsing,
//! layout arithmetic and the interaction state machine, free of FFI so tests
//! can run as normal integration tests. The [`platform`] layer owns the
//! window class, GDI painting and the blocking modal loop, and only builds
//! on Windows.

pub mod model;
pub mod platform;

// Re-export model types for convenience
pub use model::{
    ButtonId, ButtonSet, DialogCore, DialogFlags, DialogKey, DialogOptions, DialogPhase,
    DialogResult, IconKind, Update,
};

// Re-export the dialog entry points for convenience
#[cfg(target_os = "windows")]
pub use platform::windows::{critical, information, question, show_message, warning};
