//! Layout engine.
//!
//! Every rectangle the renderer and the hit tester use is computed here from
//! the current client size, the measured body-text size, and which optional
//! parts (icon badge, second button) are present. Text measurement itself
//! happens in the platform layer; this module only does arithmetic, so the
//! same inputs always produce the same rectangles.

use super::constants::*;
use super::geometry::{Point, Rect, Size};

/// Complete dialog geometry for one client size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogLayout {
    /// Title text band, inset from the client edges.
    pub title: Rect,
    /// Y of the 1px separator line under the title band.
    pub separator_y: i32,
    /// Icon badge square, when a badge is shown.
    pub icon: Option<Rect>,
    /// Word-wrapped body text box.
    pub body: Rect,
    /// First (confirm/affirmative) button.
    pub button1: Rect,
    /// Second (dismiss/negative) button, absent in single-button mode.
    pub button2: Option<Rect>,
}

impl DialogLayout {
    /// Compute the layout for a client area.
    ///
    /// `body` is the measured size of the wrapped text at this client width
    /// (see [`body_measure_width`]). The content region is as tall as the
    /// larger of text and badge, so empty text still reserves the badge
    /// height. The button row sits centered below it.
    pub fn compute(client: Size, body: Size, icon_visible: bool, two_buttons: bool) -> Self {
        let icon_offset = if icon_visible {
            ICON_SIZE + ICON_SPACING
        } else {
            0
        };

        let body_rect = Rect::new(
            PADDING + icon_offset,
            CONTENT_TOP,
            client.width - PADDING,
            CONTENT_TOP + body.height,
        );

        let icon = icon_visible.then(|| {
            Rect::from_origin(
                Point::new(PADDING, CONTENT_TOP),
                Size::new(ICON_SIZE, ICON_SIZE),
            )
        });

        let content_h = content_height(body.height, icon_visible);
        let button_top = CONTENT_TOP + content_h + BUTTON_MARGIN;

        let row_width = if two_buttons {
            BUTTON_WIDTH * 2 + BUTTON_GAP
        } else {
            BUTTON_WIDTH
        };
        let start_x = (client.width - row_width) / 2;

        let button1 = Rect::from_origin(
            Point::new(start_x, button_top),
            Size::new(BUTTON_WIDTH, BUTTON_HEIGHT),
        );
        let button2 = two_buttons.then(|| {
            Rect::from_origin(
                Point::new(start_x + BUTTON_WIDTH + BUTTON_GAP, button_top),
                Size::new(BUTTON_WIDTH, BUTTON_HEIGHT),
            )
        });

        Self {
            title: Rect::new(
                TITLE_INSET_X,
                TITLE_TOP,
                client.width - TITLE_INSET_X,
                TITLE_BOTTOM,
            ),
            separator_y: SEPARATOR_Y,
            icon,
            body: body_rect,
            button1,
            button2,
        }
    }
}

/// Width available to the wrapped body text at a given client width.
pub fn body_measure_width(client_width: i32, icon_visible: bool) -> i32 {
    let icon_offset = if icon_visible {
        ICON_SIZE + ICON_SPACING
    } else {
        0
    };
    client_width - 2 * PADDING - icon_offset
}

/// Height of the content region: the taller of body text and icon badge.
pub fn content_height(body_height: i32, icon_visible: bool) -> i32 {
    body_height.max(if icon_visible { ICON_SIZE } else { 0 })
}

/// Client size that fits the measured body exactly.
///
/// Width never shrinks below the provisional width; height is title band +
/// content + button row + margins.
pub fn ideal_client_size(body: Size, icon_visible: bool) -> Size {
    let icon_offset = if icon_visible {
        ICON_SIZE + ICON_SPACING
    } else {
        0
    };
    Size::new(
        INITIAL_CLIENT_WIDTH.max(body.width + icon_offset + 2 * PADDING),
        CONTENT_TOP + content_height(body.height, icon_visible) + BUTTON_MARGIN + BUTTON_HEIGHT
            + BOTTOM_MARGIN,
    )
}
