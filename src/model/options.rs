//! Request flags and the options derived from them.
//!
//! A dialog request is a bitset ([`DialogFlags`]) in the style of the native
//! `MessageBoxW` flags. [`DialogOptions::from_flags`] resolves the bitset
//! into typed options once, before the window is created; nothing derived
//! here changes for the lifetime of the dialog.

use std::ops::{BitOr, BitOrAssign};

use super::constants::{COLOR_ACCENT, COLOR_ERROR, COLOR_WARNING};

/// Bitset selecting button set, icon badge, and window behavior.
///
/// Bits within a group are mutually exclusive by intent; when several are
/// set anyway, resolution order is fixed (see [`ButtonSet::from_flags`] and
/// [`IconKind::from_flags`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DialogFlags(u32);

impl DialogFlags {
    /// Single confirm button.
    pub const OK: Self = Self(0x0001);
    /// Confirm + dismiss buttons.
    pub const OK_CANCEL: Self = Self(0x0002);
    /// Affirmative + negative buttons.
    pub const YES_NO: Self = Self(0x0004);

    /// Informational badge.
    pub const ICON_INFO: Self = Self(0x0100);
    /// Warning badge.
    pub const ICON_WARNING: Self = Self(0x0200);
    /// Error badge.
    pub const ICON_ERROR: Self = Self(0x0400);

    /// The second button answers Enter/Space.
    pub const DEFAULT_SECOND: Self = Self(0x1000);
    /// Keep the dialog above other windows.
    pub const TOPMOST: Self = Self(0x2000);

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// True if every bit of `other` is set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// True if any bit of `other` is set in `self`.
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for DialogFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for DialogFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// The outcome a closed dialog reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogResult {
    Ok,
    Cancel,
    Yes,
    No,
}

/// Identity of a button within the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonId {
    First,
    Second,
}

/// Which buttons the dialog shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonSet {
    Ok,
    OkCancel,
    YesNo,
}

impl ButtonSet {
    /// Resolve the button-set bits. `YES_NO` wins over `OK_CANCEL` wins over
    /// `OK`; no bit at all falls back to a single OK button.
    pub fn from_flags(flags: DialogFlags) -> Self {
        if flags.intersects(DialogFlags::YES_NO) {
            Self::YesNo
        } else if flags.intersects(DialogFlags::OK_CANCEL) {
            Self::OkCancel
        } else {
            Self::Ok
        }
    }

    pub const fn has_second(self) -> bool {
        !matches!(self, Self::Ok)
    }

    /// Labels for button 1 and (if present) button 2.
    pub const fn labels(self) -> (&'static str, Option<&'static str>) {
        match self {
            Self::Ok => ("OK", None),
            Self::OkCancel => ("OK", Some("Cancel")),
            Self::YesNo => ("Yes", Some("No")),
        }
    }

    /// The positive outcome for this set (button 1).
    pub const fn confirm_result(self) -> DialogResult {
        match self {
            Self::Ok | Self::OkCancel => DialogResult::Ok,
            Self::YesNo => DialogResult::Yes,
        }
    }

    /// The dismissive outcome for this set. Single-OK dialogs still dismiss
    /// as `Cancel` (Escape closes them too).
    pub const fn dismiss_result(self) -> DialogResult {
        match self {
            Self::Ok | Self::OkCancel => DialogResult::Cancel,
            Self::YesNo => DialogResult::No,
        }
    }
}

/// Which status badge the dialog shows, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    None,
    Info,
    Warning,
    Error,
}

impl IconKind {
    /// Resolve the icon bits, checked in Info, Warning, Error order with the
    /// first match winning. Setting more than one is accepted but reported,
    /// since the caller almost certainly meant only one.
    pub fn from_flags(flags: DialogFlags) -> Self {
        let kind = if flags.intersects(DialogFlags::ICON_INFO) {
            Self::Info
        } else if flags.intersects(DialogFlags::ICON_WARNING) {
            Self::Warning
        } else if flags.intersects(DialogFlags::ICON_ERROR) {
            Self::Error
        } else {
            Self::None
        };

        let icon_bits = flags.bits() & 0x0F00;
        if icon_bits.count_ones() > 1 {
            log::warn!(
                "multiple icon flags set ({icon_bits:#06x}); using {kind:?}"
            );
        }
        kind
    }

    pub const fn is_visible(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Badge fill color.
    pub const fn color(self) -> (u8, u8, u8) {
        match self {
            Self::Warning => COLOR_WARNING,
            Self::Error => COLOR_ERROR,
            _ => COLOR_ACCENT,
        }
    }

    /// Glyph drawn centered in the badge.
    pub const fn glyph(self) -> char {
        match self {
            Self::Warning => '!',
            Self::Error => 'x',
            _ => 'i',
        }
    }
}

/// Fully resolved dialog options; immutable once derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogOptions {
    pub buttons: ButtonSet,
    pub icon: IconKind,
    pub default_button: ButtonId,
    pub topmost: bool,
}

impl DialogOptions {
    /// Derive every option from the request flags.
    ///
    /// The default button is the second one only when `DEFAULT_SECOND` is
    /// set and the set actually has a second button.
    pub fn from_flags(flags: DialogFlags) -> Self {
        let buttons = ButtonSet::from_flags(flags);
        let default_button = if buttons.has_second() && flags.contains(DialogFlags::DEFAULT_SECOND)
        {
            ButtonId::Second
        } else {
            ButtonId::First
        };

        Self {
            buttons,
            icon: IconKind::from_flags(flags),
            default_button,
            topmost: flags.contains(DialogFlags::TOPMOST),
        }
    }

    /// Result for activating button 1.
    pub const fn confirm_result(&self) -> DialogResult {
        self.buttons.confirm_result()
    }

    /// Result for activating button 2, or for dismissing the dialog.
    pub const fn dismiss_result(&self) -> DialogResult {
        self.buttons.dismiss_result()
    }

    /// Result for Enter/Space, which activate the default button.
    pub const fn default_result(&self) -> DialogResult {
        match self.default_button {
            ButtonId::First => self.confirm_result(),
            ButtonId::Second => self.dismiss_result(),
        }
    }
}
