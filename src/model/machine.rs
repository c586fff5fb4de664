//! Dialog state machine.
//!
//! One [`DialogCore`] exists per dialog invocation. It owns the resolved
//! options, the current layout, the hover state, and the one-shot result,
//! and it tells the platform shell what to do next ([`Update`]) without
//! touching any window itself. Phases move strictly `Open` → `Closing` →
//! `Closed`; once the dialog leaves `Open`, input is ignored.

use super::geometry::{Point, Size};
use super::layout::DialogLayout;
use super::options::{ButtonId, DialogOptions, DialogResult};

/// Lifecycle phase of the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogPhase {
    Open,
    Closing,
    Closed,
}

/// Keys the dialog reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKey {
    Escape,
    Enter,
    Space,
}

/// What the shell should do after feeding an event in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Update {
    /// Nothing changed.
    None,
    /// Visual state changed; schedule a repaint.
    Repaint,
    /// A result was resolved (or the dialog was dismissed); tear the window down.
    Close,
}

/// State for one dialog invocation.
#[derive(Debug, Clone)]
pub struct DialogCore {
    options: DialogOptions,
    layout: DialogLayout,
    phase: DialogPhase,
    hovered: Option<ButtonId>,
    result: Option<DialogResult>,
}

impl DialogCore {
    /// Build the core for a client area and measured body size.
    pub fn new(options: DialogOptions, client: Size, body: Size) -> Self {
        Self {
            options,
            layout: DialogLayout::compute(
                client,
                body,
                options.icon.is_visible(),
                options.buttons.has_second(),
            ),
            phase: DialogPhase::Open,
            hovered: None,
            result: None,
        }
    }

    pub fn options(&self) -> &DialogOptions {
        &self.options
    }

    pub fn layout(&self) -> &DialogLayout {
        &self.layout
    }

    pub fn phase(&self) -> DialogPhase {
        self.phase
    }

    pub fn hovered(&self) -> Option<ButtonId> {
        self.hovered
    }

    /// Recompute the layout for a new client size. Hover is re-evaluated on
    /// the next pointer move; the phase never changes here.
    pub fn resize(&mut self, client: Size, body: Size) {
        if self.phase != DialogPhase::Open {
            return;
        }
        self.layout = DialogLayout::compute(
            client,
            body,
            self.options.icon.is_visible(),
            self.options.buttons.has_second(),
        );
    }

    /// Pointer moved to `p`; updates hover.
    pub fn pointer_moved(&mut self, p: Point) -> Update {
        if self.phase != DialogPhase::Open {
            return Update::None;
        }
        let hit = self.hit_test(p);
        if hit != self.hovered {
            self.hovered = hit;
            Update::Repaint
        } else {
            Update::None
        }
    }

    /// Pointer released at `p`; resolves a result when a button was hit.
    pub fn pointer_released(&mut self, p: Point) -> Update {
        if self.phase != DialogPhase::Open {
            return Update::None;
        }
        match self.hit_test(p) {
            Some(ButtonId::First) => self.settle(self.options.confirm_result()),
            Some(ButtonId::Second) => self.settle(self.options.dismiss_result()),
            None => Update::None,
        }
    }

    /// Key pressed. Escape always dismisses; Enter and Space activate the
    /// default button.
    pub fn key_pressed(&mut self, key: DialogKey) -> Update {
        if self.phase != DialogPhase::Open {
            return Update::None;
        }
        match key {
            DialogKey::Escape => self.settle(self.options.dismiss_result()),
            DialogKey::Enter | DialogKey::Space => self.settle(self.options.default_result()),
        }
    }

    /// The dialog is being closed from outside without a button or key
    /// action (e.g. the window is destroyed externally).
    pub fn force_close(&mut self) {
        if self.phase == DialogPhase::Open {
            self.phase = DialogPhase::Closing;
        }
    }

    /// Teardown finished; the machine is terminal from here on.
    pub fn mark_closed(&mut self) {
        self.phase = DialogPhase::Closed;
    }

    /// The outcome to report to the caller. When the dialog went away
    /// without any action resolving a result, this is the dismiss
    /// equivalent for the active button set.
    pub fn final_result(&self) -> DialogResult {
        self.result.unwrap_or_else(|| self.options.dismiss_result())
    }

    /// Which button contains `p`, honoring the current button set (a second
    /// button that does not exist can never be hit).
    fn hit_test(&self, p: Point) -> Option<ButtonId> {
        if self.layout.button1.contains(p) {
            Some(ButtonId::First)
        } else if self.layout.button2.is_some_and(|r| r.contains(p)) {
            Some(ButtonId::Second)
        } else {
            None
        }
    }

    /// Record the result exactly once and start closing.
    fn settle(&mut self, result: DialogResult) -> Update {
        self.result = Some(result);
        self.phase = DialogPhase::Closing;
        Update::Close
    }
}
