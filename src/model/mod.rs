//! Dialog domain model.
//!
//! This module contains pure business logic (no FFI dependencies):
//! request flags and derived options, geometry, the layout engine, and the
//! input state machine. The Win32 shell that puts it on screen lives in
//! `platform::windows`.

pub mod constants;
pub mod geometry;
pub mod layout;
pub mod machine;
pub mod options;

pub use geometry::{Point, Rect, Size};
pub use layout::DialogLayout;
pub use machine::{DialogCore, DialogKey, DialogPhase, Update};
pub use options::{ButtonId, ButtonSet, DialogFlags, DialogOptions, DialogResult, IconKind};
