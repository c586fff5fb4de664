//! Dialog metrics and palette.
//!
//! Every measurement and color used by the layout engine and the renderer
//! lives here so the two stay in agreement. All lengths are in pixels of
//! the dialog's client area.

// === Provisional window size ===

/// Client width the dialog is created with; also the minimum final width.
pub const INITIAL_CLIENT_WIDTH: i32 = 480;

/// Client height the dialog is created with, replaced once the text is measured.
pub const INITIAL_CLIENT_HEIGHT: i32 = 200;

// === Spacing ===

/// Outer padding between the client edge and the content.
pub const PADDING: i32 = 16;

/// Top of the content region (body text and icon badge), below the title band.
pub const CONTENT_TOP: i32 = 50;

/// Vertical gap between the content region and the button row.
pub const BUTTON_MARGIN: i32 = 24;

/// Vertical gap below the button row.
pub const BOTTOM_MARGIN: i32 = 24;

// === Title band ===

/// Horizontal inset of the title text.
pub const TITLE_INSET_X: i32 = 12;

/// Top of the title text band.
pub const TITLE_TOP: i32 = 8;

/// Bottom of the title text band.
pub const TITLE_BOTTOM: i32 = 28;

/// Y position of the 1px separator line under the title band.
pub const SEPARATOR_Y: i32 = 34;

// === Buttons ===

/// Width of each button.
pub const BUTTON_WIDTH: i32 = 90;

/// Height of each button.
pub const BUTTON_HEIGHT: i32 = 28;

/// Gap between the two buttons in two-button modes.
pub const BUTTON_GAP: i32 = 12;

// === Icon badge ===

/// Side length of the square the circular badge is drawn in.
pub const ICON_SIZE: i32 = 48;

/// Horizontal spacing between the badge and the body text.
pub const ICON_SPACING: i32 = 12;

// === Font ===

/// Dialog font face for title, body, and button labels.
pub const FONT_FACE: &str = "Segoe UI";

/// Dialog font size in points; scaled by the surface DPI at creation time.
pub const FONT_POINT_SIZE: i32 = 10;

/// Weight of the badge glyph font (bold).
pub const BADGE_FONT_WEIGHT: i32 = 700;

// === Palette (R, G, B) ===

/// Dialog background.
pub const COLOR_BACKGROUND: (u8, u8, u8) = (255, 255, 255);

/// Title text.
pub const COLOR_TITLE_TEXT: (u8, u8, u8) = (30, 30, 30);

/// Body text.
pub const COLOR_BODY_TEXT: (u8, u8, u8) = (40, 40, 40);

/// Separator line under the title band.
pub const COLOR_SEPARATOR: (u8, u8, u8) = (230, 230, 230);

/// Button face when idle.
pub const COLOR_BUTTON_IDLE: (u8, u8, u8) = (245, 245, 245);

/// Button face under the pointer.
pub const COLOR_BUTTON_HOVER: (u8, u8, u8) = (230, 240, 255);

/// Button label text.
pub const COLOR_BUTTON_TEXT: (u8, u8, u8) = (0, 0, 0);

/// Accent used for the default-button outline and the info badge.
pub const COLOR_ACCENT: (u8, u8, u8) = (0, 120, 215);

/// Warning badge fill.
pub const COLOR_WARNING: (u8, u8, u8) = (255, 170, 0);

/// Error badge fill.
pub const COLOR_ERROR: (u8, u8, u8) = (220, 20, 60);

/// Badge glyph color.
pub const COLOR_BADGE_GLYPH: (u8, u8, u8) = (255, 255, 255);
