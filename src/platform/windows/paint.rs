//! GDI rendering for the dialog surface.
//!
//! All geometry comes precomputed from [`crate::model::DialogLayout`]; this
//! module only translates it into draw calls. Text measurement lives here too
//! because it needs a DC with the dialog font selected.

use windows::Win32::Foundation::{RECT, SIZE};
use windows::Win32::Graphics::Gdi::{
    DrawTextW, Ellipse, FillRect, FrameRect, GetStockObject, GetTextExtentPoint32W, LineTo,
    MoveToEx, Rectangle, SetBkMode, SetTextColor, TextOutW, DT_CALCRECT, DT_END_ELLIPSIS, DT_LEFT,
    DT_SINGLELINE, DT_VCENTER, DT_WORDBREAK, GRAY_BRUSH, HBRUSH, HDC, HFONT, NULL_BRUSH, NULL_PEN,
    TRANSPARENT,
};

use crate::model::constants::{
    COLOR_ACCENT, COLOR_BACKGROUND, COLOR_BADGE_GLYPH, COLOR_BODY_TEXT, COLOR_BUTTON_HOVER,
    COLOR_BUTTON_IDLE, COLOR_BUTTON_TEXT, COLOR_SEPARATOR, COLOR_TITLE_TEXT,
};
use crate::model::{ButtonId, DialogCore, IconKind, Rect, Size};

use super::gdi::{colorref, create_badge_font, OwnedBrush, OwnedPen, SelectionGuard};

fn win_rect(r: Rect) -> RECT {
    RECT {
        left: r.left,
        top: r.top,
        right: r.right,
        bottom: r.bottom,
    }
}

/// Measures word-wrapped body text at a given width with the dialog font.
pub fn measure_body_text(dc: HDC, font: HFONT, text: &mut [u16], max_width: i32) -> Size {
    let _font = SelectionGuard::select(dc, font.into());
    let mut rc = RECT {
        left: 0,
        top: 0,
        right: max_width,
        bottom: 0,
    };
    unsafe {
        DrawTextW(dc, text, &mut rc, DT_CALCRECT | DT_WORDBREAK);
    }
    Size::new(rc.right - rc.left, rc.bottom - rc.top)
}

/// Paints the whole dialog surface for one `WM_PAINT` cycle.
pub fn paint_dialog(
    dc: HDC,
    font: HFONT,
    client: Size,
    core: &DialogCore,
    title: &mut [u16],
    body: &mut [u16],
) {
    let layout = core.layout();

    let client_rc = RECT {
        left: 0,
        top: 0,
        right: client.width,
        bottom: client.height,
    };
    let background = OwnedBrush::solid(colorref(COLOR_BACKGROUND));
    unsafe {
        FillRect(dc, &client_rc, background.raw());
        SetBkMode(dc, TRANSPARENT);
    }

    let _font = SelectionGuard::select(dc, font.into());

    // Title row, single line with ellipsis.
    let mut title_rc = win_rect(layout.title);
    unsafe {
        SetTextColor(dc, colorref(COLOR_TITLE_TEXT));
        DrawTextW(
            dc,
            title,
            &mut title_rc,
            DT_SINGLELINE | DT_LEFT | DT_VCENTER | DT_END_ELLIPSIS,
        );
    }

    draw_separator(dc, layout.separator_y, client.width);

    if let Some(icon_rect) = layout.icon {
        draw_badge(dc, icon_rect, core.options().icon);
    }

    let mut body_rc = win_rect(layout.body);
    unsafe {
        SetTextColor(dc, colorref(COLOR_BODY_TEXT));
        DrawTextW(dc, body, &mut body_rc, DT_WORDBREAK);
    }

    let (label1, label2) = core.options().buttons.labels();
    draw_button(
        dc,
        layout.button1,
        label1,
        core.hovered() == Some(ButtonId::First),
        core.options().default_button == ButtonId::First,
    );
    if let (Some(rect), Some(label)) = (layout.button2, label2) {
        draw_button(
            dc,
            rect,
            label,
            core.hovered() == Some(ButtonId::Second),
            core.options().default_button == ButtonId::Second,
        );
    }
}

fn draw_separator(dc: HDC, y: i32, width: i32) {
    let pen = OwnedPen::solid(1, colorref(COLOR_SEPARATOR));
    let _pen = SelectionGuard::select(dc, pen.raw().into());
    unsafe {
        let _ = MoveToEx(dc, 0, y, None);
        let _ = LineTo(dc, width, y);
    }
}

/// Filled circle with a centered bold glyph, sized to the icon square.
fn draw_badge(dc: HDC, rect: Rect, kind: IconKind) {
    if !kind.is_visible() {
        return;
    }

    let diameter = rect.width().min(rect.height()) - 2;
    let cx = (rect.left + rect.right) / 2;
    let cy = (rect.top + rect.bottom) / 2;

    let fill = OwnedBrush::solid(colorref(kind.color()));
    {
        let _brush = SelectionGuard::select(dc, fill.raw().into());
        let _pen = SelectionGuard::select(dc, unsafe { GetStockObject(NULL_PEN) });
        unsafe {
            let _ = Ellipse(
                dc,
                cx - diameter / 2,
                cy - diameter / 2,
                cx + diameter / 2,
                cy + diameter / 2,
            );
        }
    }

    let badge_font = match create_badge_font(diameter) {
        Ok(font) => font,
        Err(err) => {
            log::warn!("badge glyph font unavailable: {err}");
            return;
        }
    };
    let _font = SelectionGuard::select(dc, badge_font.raw().into());

    let glyph = [kind.glyph() as u16];
    let mut extent = SIZE::default();
    unsafe {
        SetTextColor(dc, colorref(COLOR_BADGE_GLYPH));
        let _ = GetTextExtentPoint32W(dc, &glyph, &mut extent);
        let _ = TextOutW(dc, cx - extent.cx / 2, cy - extent.cy / 2, &glyph);
    }
}

fn draw_button(dc: HDC, rect: Rect, label: &str, hovered: bool, is_default: bool) {
    let rc = win_rect(rect);

    let fill_color = if hovered {
        COLOR_BUTTON_HOVER
    } else {
        COLOR_BUTTON_IDLE
    };
    let fill = OwnedBrush::solid(colorref(fill_color));
    unsafe {
        FillRect(dc, &rc, fill.raw());
        FrameRect(dc, &rc, HBRUSH(GetStockObject(GRAY_BRUSH).0));
    }

    // The default button carries a thicker accent outline just inside the
    // frame so Enter's target is visible at a glance.
    if is_default {
        let pen = OwnedPen::solid(2, colorref(COLOR_ACCENT));
        let _pen = SelectionGuard::select(dc, pen.raw().into());
        let _brush = SelectionGuard::select(dc, unsafe { GetStockObject(NULL_BRUSH) });
        unsafe {
            let _ = Rectangle(dc, rc.left + 1, rc.top + 1, rc.right - 1, rc.bottom - 1);
        }
    }

    let text: Vec<u16> = label.encode_utf16().collect();
    let mut extent = SIZE::default();
    unsafe {
        SetTextColor(dc, colorref(COLOR_BUTTON_TEXT));
        let _ = GetTextExtentPoint32W(dc, &text, &mut extent);
        let x = rect.left + (rect.width() - extent.cx) / 2;
        let y = rect.top + (rect.height() - extent.cy) / 2;
        let _ = TextOutW(dc, x, y, &text);
    }
}
