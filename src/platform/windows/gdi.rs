//! Scoped GDI resource management.
//!
//! Every GDI object the dialog touches is wrapped so acquisition and release
//! pair up on all exit paths: owned objects delete themselves, selections
//! restore the previous object, and device contexts are released/ended when
//! the guard goes out of scope.

use windows::core::Result;
use windows::Win32::Foundation::{COLORREF, HWND};
use windows::Win32::Graphics::Gdi::{
    BeginPaint, CreateFontIndirectW, CreatePen, CreateSolidBrush, DeleteObject, EndPaint, GetDC,
    GetDeviceCaps, ReleaseDC, SelectObject, HBRUSH, HDC, HFONT, HGDIOBJ, HPEN, LOGFONTW,
    LOGPIXELSY, PAINTSTRUCT, PS_SOLID,
};

use crate::model::constants::{BADGE_FONT_WEIGHT, FONT_FACE, FONT_POINT_SIZE};

/// Pack an (r, g, b) tuple into the 0x00BBGGRR wire format GDI expects.
pub fn colorref((r, g, b): (u8, u8, u8)) -> COLORREF {
    COLORREF(r as u32 | (g as u32) << 8 | (b as u32) << 16)
}

/// A font owned by the dialog, deleted on drop.
pub struct OwnedFont {
    raw: HFONT,
}

impl OwnedFont {
    pub fn raw(&self) -> HFONT {
        self.raw
    }
}

impl Drop for OwnedFont {
    fn drop(&mut self) {
        unsafe {
            let _ = DeleteObject(self.raw.into());
        }
    }
}

/// A solid brush, deleted on drop.
pub struct OwnedBrush {
    raw: HBRUSH,
}

impl OwnedBrush {
    pub fn solid(color: COLORREF) -> Self {
        Self {
            raw: unsafe { CreateSolidBrush(color) },
        }
    }

    pub fn raw(&self) -> HBRUSH {
        self.raw
    }
}

impl Drop for OwnedBrush {
    fn drop(&mut self) {
        unsafe {
            let _ = DeleteObject(self.raw.into());
        }
    }
}

/// A solid pen, deleted on drop.
pub struct OwnedPen {
    raw: HPEN,
}

impl OwnedPen {
    pub fn solid(width: i32, color: COLORREF) -> Self {
        Self {
            raw: unsafe { CreatePen(PS_SOLID, width, color) },
        }
    }

    pub fn raw(&self) -> HPEN {
        self.raw
    }
}

impl Drop for OwnedPen {
    fn drop(&mut self) {
        unsafe {
            let _ = DeleteObject(self.raw.into());
        }
    }
}

/// Selects an object into a DC and restores the previous one on drop.
pub struct SelectionGuard {
    dc: HDC,
    previous: HGDIOBJ,
}

impl SelectionGuard {
    pub fn select(dc: HDC, object: HGDIOBJ) -> Self {
        Self {
            dc,
            previous: unsafe { SelectObject(dc, object) },
        }
    }
}

impl Drop for SelectionGuard {
    fn drop(&mut self) {
        unsafe {
            SelectObject(self.dc, self.previous);
        }
    }
}

/// `GetDC`/`ReleaseDC` pair for a window.
pub struct WindowDc {
    hwnd: HWND,
    dc: HDC,
}

impl WindowDc {
    pub fn for_window(hwnd: HWND) -> Self {
        Self {
            hwnd,
            dc: unsafe { GetDC(Some(hwnd)) },
        }
    }

    pub fn dc(&self) -> HDC {
        self.dc
    }
}

impl Drop for WindowDc {
    fn drop(&mut self) {
        unsafe {
            ReleaseDC(Some(self.hwnd), self.dc);
        }
    }
}

/// `BeginPaint`/`EndPaint` pair for a `WM_PAINT` handler.
pub struct PaintDc {
    hwnd: HWND,
    dc: HDC,
    ps: PAINTSTRUCT,
}

impl PaintDc {
    pub fn begin(hwnd: HWND) -> Self {
        let mut ps = PAINTSTRUCT::default();
        let dc = unsafe { BeginPaint(hwnd, &mut ps) };
        Self { hwnd, dc, ps }
    }

    pub fn dc(&self) -> HDC {
        self.dc
    }
}

impl Drop for PaintDc {
    fn drop(&mut self) {
        unsafe {
            let _ = EndPaint(self.hwnd, &self.ps);
        }
    }
}

/// The dialog font: Segoe UI at 10pt, scaled to the DC's vertical DPI.
pub fn create_dialog_font(dc: HDC) -> Result<OwnedFont> {
    let dpi_y = unsafe { GetDeviceCaps(Some(dc), LOGPIXELSY) };
    let mut lf = LOGFONTW {
        lfHeight: point_size_to_height(FONT_POINT_SIZE, dpi_y),
        ..Default::default()
    };
    write_face_name(&mut lf, FONT_FACE);

    let raw = unsafe { CreateFontIndirectW(&lf) };
    if raw.is_invalid() {
        return Err(windows::core::Error::from_win32());
    }
    Ok(OwnedFont { raw })
}

/// Bold glyph font for the icon badge, sized to half the badge diameter.
pub fn create_badge_font(diameter: i32) -> Result<OwnedFont> {
    let mut lf = LOGFONTW {
        lfHeight: diameter / 2,
        lfWeight: BADGE_FONT_WEIGHT,
        ..Default::default()
    };
    write_face_name(&mut lf, FONT_FACE);

    let raw = unsafe { CreateFontIndirectW(&lf) };
    if raw.is_invalid() {
        return Err(windows::core::Error::from_win32());
    }
    Ok(OwnedFont { raw })
}

/// Logical font height for a point size at a DPI, rounded to nearest.
fn point_size_to_height(point_size: i32, dpi_y: i32) -> i32 {
    -((point_size * dpi_y + 36) / 72)
}

fn write_face_name(lf: &mut LOGFONTW, face: &str) {
    // lfFaceName is a fixed 32-slot buffer; the default zeros terminate it.
    for (dst, src) in lf.lfFaceName.iter_mut().zip(face.encode_utf16()) {
        *dst = src;
    }
}
