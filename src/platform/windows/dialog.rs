//! The dialog window: class registration, window procedure and modal loop.
//!
//! Window messages are decoded here and forwarded to [`DialogCore`], which
//! owns all interaction state. Per-window state lives in a thread-local
//! registry keyed by HWND, so the window procedure never touches raw
//! userdata pointers.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::OnceLock;

use windows::core::{w, Result, PCWSTR};
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, RECT, WPARAM};
use windows::Win32::Graphics::Gdi::{GetStockObject, InvalidateRect, HBRUSH, WHITE_BRUSH};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::Input::KeyboardAndMouse::{
    EnableWindow, SetActiveWindow, SetFocus, VIRTUAL_KEY, VK_ESCAPE, VK_RETURN, VK_SPACE,
};
use windows::Win32::UI::WindowsAndMessaging::{
    AdjustWindowRectEx, CreateWindowExW, DefWindowProcW, DestroyWindow, DispatchMessageW,
    GetClientRect, GetMessageW, GetWindowLongPtrW, GetWindowRect, IsWindow, LoadCursorW,
    PostMessageW, RegisterClassW, SetForegroundWindow, SetWindowPos, ShowWindow,
    SystemParametersInfoW, TranslateMessage, CS_HREDRAW, CS_VREDRAW, CW_USEDEFAULT, GWL_EXSTYLE,
    GWL_STYLE, IDC_ARROW, MSG, SPI_GETWORKAREA, SWP_NOACTIVATE, SWP_NOMOVE, SWP_NOSIZE,
    SWP_NOZORDER, SW_SHOW, SYSTEM_PARAMETERS_INFO_UPDATE_FLAGS, WINDOW_EX_STYLE, WINDOW_STYLE,
    WM_CLOSE, WM_DESTROY, WM_ERASEBKGND, WM_KEYDOWN, WM_LBUTTONUP, WM_MOUSEMOVE, WM_PAINT,
    WM_QUIT, WM_SIZE, WNDCLASSW, WS_CAPTION, WS_EX_DLGMODALFRAME, WS_EX_TOOLWINDOW, WS_EX_TOPMOST,
    WS_POPUP,
};

use crate::model::constants::{INITIAL_CLIENT_HEIGHT, INITIAL_CLIENT_WIDTH};
use crate::model::{
    layout, DialogCore, DialogFlags, DialogKey, DialogOptions, DialogPhase, DialogResult, Point,
    Size, Update,
};

use super::gdi::{create_dialog_font, OwnedFont, PaintDc, WindowDc};
use super::paint::{measure_body_text, paint_dialog};

const DIALOG_CLASS: PCWSTR = w!("AlertboxDialog");

static CLASS_REGISTERED: OnceLock<Result<()>> = OnceLock::new();

struct DialogSession {
    core: DialogCore,
    font: OwnedFont,
    title_text: Vec<u16>,
    body_text: Vec<u16>,
}

thread_local! {
    static OPEN_DIALOGS: RefCell<HashMap<isize, Rc<RefCell<DialogSession>>>> =
        RefCell::new(HashMap::new());
}

fn register_session(hwnd: HWND, session: Rc<RefCell<DialogSession>>) {
    OPEN_DIALOGS.with(|m| m.borrow_mut().insert(hwnd.0 as isize, session));
}

fn session_for(hwnd: HWND) -> Option<Rc<RefCell<DialogSession>>> {
    OPEN_DIALOGS.with(|m| m.borrow().get(&(hwnd.0 as isize)).cloned())
}

fn remove_session(hwnd: HWND) -> Option<Rc<RefCell<DialogSession>>> {
    OPEN_DIALOGS.with(|m| m.borrow_mut().remove(&(hwnd.0 as isize)))
}

fn dialog_open(hwnd: HWND) -> bool {
    session_for(hwnd).is_some_and(|s| s.borrow().core.phase() != DialogPhase::Closed)
}

/// Re-enables the owner when the dialog winds down, whichever way it exits.
struct OwnerGuard {
    owner: Option<HWND>,
}

impl OwnerGuard {
    fn disable(owner: Option<HWND>) -> Self {
        if let Some(owner) = owner {
            unsafe {
                let _ = EnableWindow(owner, false);
            }
        }
        Self { owner }
    }
}

impl Drop for OwnerGuard {
    fn drop(&mut self) {
        if let Some(owner) = self.owner {
            unsafe {
                let _ = EnableWindow(owner, true);
                let _ = SetActiveWindow(owner);
            }
        }
    }
}

/// Shows a modal message dialog and blocks until it resolves.
///
/// The owner, when given, is disabled for the dialog's lifetime and restored
/// afterwards. The returned value is the pressed button's result, or the
/// dismiss result when the dialog is closed any other way.
pub fn show_message(
    owner: Option<HWND>,
    text: &str,
    title: &str,
    flags: DialogFlags,
) -> Result<DialogResult> {
    ensure_dialog_class()?;

    let options = DialogOptions::from_flags(flags);
    log::debug!(
        "dialog open: buttons {:?}, icon {:?}, default {:?}, topmost {}",
        options.buttons,
        options.icon,
        options.default_button,
        options.topmost
    );

    let hinstance = unsafe { GetModuleHandleW(None)? };

    let mut ex_style = WS_EX_TOOLWINDOW | WS_EX_DLGMODALFRAME;
    if options.topmost {
        ex_style |= WS_EX_TOPMOST;
    }

    // Caption needs its own NUL-terminated buffer; the session keeps
    // unterminated slices for DrawTextW.
    let caption: Vec<u16> = title.encode_utf16().chain(std::iter::once(0)).collect();

    let hwnd = unsafe {
        CreateWindowExW(
            ex_style,
            DIALOG_CLASS,
            PCWSTR(caption.as_ptr()),
            WS_POPUP | WS_CAPTION,
            CW_USEDEFAULT,
            CW_USEDEFAULT,
            INITIAL_CLIENT_WIDTH,
            INITIAL_CLIENT_HEIGHT,
            owner,
            None,
            Some(hinstance.into()),
            None,
        )?
    };

    let session = match build_session(hwnd, options, title, text) {
        Ok(session) => session,
        Err(err) => {
            unsafe {
                let _ = DestroyWindow(hwnd);
            }
            return Err(err);
        }
    };

    register_session(hwnd, Rc::new(RefCell::new(session)));
    center_over_owner(hwnd, owner);

    let owner_guard = OwnerGuard::disable(owner);
    unsafe {
        let _ = ShowWindow(hwnd, SW_SHOW);
        let _ = SetForegroundWindow(hwnd);
        let _ = SetActiveWindow(hwnd);
        let _ = SetFocus(Some(hwnd));
    }

    let mut msg = MSG::default();
    unsafe {
        while GetMessageW(&mut msg, None, 0, 0).as_bool() {
            if !dialog_open(hwnd) {
                break;
            }
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }

    // Take the session first, releasing the registry before DestroyWindow
    // (WM_DESTROY arrives synchronously and looks the session up again).
    let session = remove_session(hwnd);
    if unsafe { IsWindow(Some(hwnd)) }.as_bool() {
        unsafe {
            let _ = DestroyWindow(hwnd);
        }
    }
    drop(owner_guard);

    let result = match session {
        Some(session) => session.borrow().core.final_result(),
        None => options.dismiss_result(),
    };
    log::debug!("dialog closed: {result:?}");
    Ok(result)
}

/// `OK` dialog with the info badge.
pub fn information(owner: Option<HWND>, text: &str, title: &str) -> Result<DialogResult> {
    show_message(owner, text, title, DialogFlags::OK | DialogFlags::ICON_INFO)
}

/// OK/Cancel dialog with the warning badge.
pub fn warning(owner: Option<HWND>, text: &str, title: &str) -> Result<DialogResult> {
    show_message(
        owner,
        text,
        title,
        DialogFlags::OK_CANCEL | DialogFlags::ICON_WARNING,
    )
}

/// `OK` dialog with the error badge.
pub fn critical(owner: Option<HWND>, text: &str, title: &str) -> Result<DialogResult> {
    show_message(owner, text, title, DialogFlags::OK | DialogFlags::ICON_ERROR)
}

/// Yes/No dialog with no badge.
pub fn question(owner: Option<HWND>, text: &str, title: &str) -> Result<DialogResult> {
    show_message(owner, text, title, DialogFlags::YES_NO)
}

fn ensure_dialog_class() -> Result<()> {
    CLASS_REGISTERED
        .get_or_init(|| unsafe {
            let hinstance = GetModuleHandleW(None)?;
            let wc = WNDCLASSW {
                style: CS_HREDRAW | CS_VREDRAW,
                lpfnWndProc: Some(dialog_wnd_proc),
                hInstance: hinstance.into(),
                hCursor: LoadCursorW(None, IDC_ARROW).unwrap_or_default(),
                hbrBackground: HBRUSH(GetStockObject(WHITE_BRUSH).0),
                lpszClassName: DIALOG_CLASS,
                ..Default::default()
            };
            if RegisterClassW(&wc) == 0 {
                let err = windows::core::Error::from_win32();
                log::error!("dialog class registration failed: {err}");
                return Err(err);
            }
            Ok(())
        })
        .clone()
}

/// Measures the text, sizes the window to fit it and builds the dialog state
/// from the client area that actually came back.
fn build_session(
    hwnd: HWND,
    options: DialogOptions,
    title: &str,
    text: &str,
) -> Result<DialogSession> {
    let title_text: Vec<u16> = title.encode_utf16().collect();
    let mut body_text: Vec<u16> = text.encode_utf16().collect();

    let dc = WindowDc::for_window(hwnd);
    let font = create_dialog_font(dc.dc())?;

    let provisional = layout::body_measure_width(INITIAL_CLIENT_WIDTH, options.icon.is_visible());
    let body = measure_body_text(dc.dc(), font.raw(), &mut body_text, provisional);
    resize_to_client(hwnd, layout::ideal_client_size(body, options.icon.is_visible()))?;

    // The granted client area can differ from the request, so measure again
    // at the width we actually got.
    let client = client_size(hwnd)?;
    let width = layout::body_measure_width(client.width, options.icon.is_visible());
    let body = measure_body_text(dc.dc(), font.raw(), &mut body_text, width);

    Ok(DialogSession {
        core: DialogCore::new(options, client, body),
        font,
        title_text,
        body_text,
    })
}

/// Grows the window frame so the client area matches the requested size.
fn resize_to_client(hwnd: HWND, client: Size) -> Result<()> {
    let style = WINDOW_STYLE(unsafe { GetWindowLongPtrW(hwnd, GWL_STYLE) } as u32);
    let ex_style = WINDOW_EX_STYLE(unsafe { GetWindowLongPtrW(hwnd, GWL_EXSTYLE) } as u32);

    let mut frame = RECT {
        left: 0,
        top: 0,
        right: client.width,
        bottom: client.height,
    };
    unsafe {
        AdjustWindowRectEx(&mut frame, style, false, ex_style)?;
        SetWindowPos(
            hwnd,
            None,
            0,
            0,
            frame.right - frame.left,
            frame.bottom - frame.top,
            SWP_NOMOVE | SWP_NOZORDER | SWP_NOACTIVATE,
        )?;
    }
    Ok(())
}

fn client_size(hwnd: HWND) -> Result<Size> {
    let mut rc = RECT::default();
    unsafe { GetClientRect(hwnd, &mut rc)? };
    Ok(Size::new(rc.right - rc.left, rc.bottom - rc.top))
}

/// Centers the window over its owner, or over the work area without one.
/// The top-left corner is clamped to the visible desktop.
fn center_over_owner(hwnd: HWND, owner: Option<HWND>) {
    let mut rc = RECT::default();
    if unsafe { GetWindowRect(hwnd, &mut rc) }.is_err() {
        return;
    }
    let width = rc.right - rc.left;
    let height = rc.bottom - rc.top;

    let mut anchor = RECT::default();
    let mut have_anchor = false;
    if let Some(owner) = owner {
        have_anchor = unsafe { GetWindowRect(owner, &mut anchor) }.is_ok();
    }
    if !have_anchor {
        let got_work_area = unsafe {
            SystemParametersInfoW(
                SPI_GETWORKAREA,
                0,
                Some(&mut anchor as *mut RECT as *mut _),
                SYSTEM_PARAMETERS_INFO_UPDATE_FLAGS(0),
            )
        };
        if got_work_area.is_err() {
            return;
        }
    }

    let x = anchor.left + (anchor.right - anchor.left - width) / 2;
    let y = anchor.top + (anchor.bottom - anchor.top - height) / 2;
    unsafe {
        let _ = SetWindowPos(
            hwnd,
            None,
            x.max(0),
            y.max(0),
            0,
            0,
            SWP_NOZORDER | SWP_NOSIZE,
        );
    }
}

fn apply_update(hwnd: HWND, update: Update) {
    match update {
        Update::None => {}
        Update::Repaint => unsafe {
            let _ = InvalidateRect(Some(hwnd), None, false);
        },
        Update::Close => unsafe {
            PostMessageW(Some(hwnd), WM_CLOSE, WPARAM(0), LPARAM(0)).ok();
        },
    }
}

fn point_from_lparam(lparam: LPARAM) -> Point {
    Point::new(
        (lparam.0 & 0xFFFF) as i16 as i32,
        ((lparam.0 >> 16) & 0xFFFF) as i16 as i32,
    )
}

fn size_from_lparam(lparam: LPARAM) -> Size {
    Size::new(
        (lparam.0 as u32 & 0xFFFF) as i32,
        ((lparam.0 as u32 >> 16) & 0xFFFF) as i32,
    )
}

unsafe extern "system" fn dialog_wnd_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    match msg {
        // The paint handler covers the whole surface.
        WM_ERASEBKGND => LRESULT(1),

        WM_PAINT => {
            let Some(session) = session_for(hwnd) else {
                return DefWindowProcW(hwnd, msg, wparam, lparam);
            };
            let paint = PaintDc::begin(hwnd);
            let client = client_size(hwnd).unwrap_or_default();
            let s = &mut *session.borrow_mut();
            paint_dialog(
                paint.dc(),
                s.font.raw(),
                client,
                &s.core,
                &mut s.title_text,
                &mut s.body_text,
            );
            LRESULT(0)
        }

        WM_SIZE => {
            if let Some(session) = session_for(hwnd) {
                let client = size_from_lparam(lparam);
                let dc = WindowDc::for_window(hwnd);
                let s = &mut *session.borrow_mut();
                let width =
                    layout::body_measure_width(client.width, s.core.options().icon.is_visible());
                let body = measure_body_text(dc.dc(), s.font.raw(), &mut s.body_text, width);
                s.core.resize(client, body);
            }
            LRESULT(0)
        }

        WM_MOUSEMOVE => {
            if let Some(session) = session_for(hwnd) {
                let update = session.borrow_mut().core.pointer_moved(point_from_lparam(lparam));
                apply_update(hwnd, update);
            }
            LRESULT(0)
        }

        WM_LBUTTONUP => {
            if let Some(session) = session_for(hwnd) {
                let update = session
                    .borrow_mut()
                    .core
                    .pointer_released(point_from_lparam(lparam));
                apply_update(hwnd, update);
            }
            LRESULT(0)
        }

        WM_KEYDOWN => {
            let vk = VIRTUAL_KEY(wparam.0 as u16);
            let key = if vk == VK_ESCAPE {
                Some(DialogKey::Escape)
            } else if vk == VK_RETURN {
                Some(DialogKey::Enter)
            } else if vk == VK_SPACE {
                Some(DialogKey::Space)
            } else {
                None
            };
            if let (Some(key), Some(session)) = (key, session_for(hwnd)) {
                let update = session.borrow_mut().core.key_pressed(key);
                apply_update(hwnd, update);
            }
            LRESULT(0)
        }

        WM_CLOSE => {
            if let Some(session) = session_for(hwnd) {
                session.borrow_mut().core.force_close();
            }
            // No borrow held here; WM_DESTROY reenters the registry.
            let _ = DestroyWindow(hwnd);
            LRESULT(0)
        }

        WM_DESTROY => {
            if let Some(session) = session_for(hwnd) {
                session.borrow_mut().core.mark_closed();
                // Wake the modal loop blocked in GetMessageW.
                PostMessageW(None, WM_QUIT, WPARAM(0), LPARAM(0)).ok();
            }
            LRESULT(0)
        }

        _ => DefWindowProcW(hwnd, msg, wparam, lparam),
    }
}
