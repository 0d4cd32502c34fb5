/*
 * `HostWindow` over a live HWND. Every method is a thin translation to the
 * corresponding Win32 call; policy (when to call, how to degrade) stays in
 * the portable core.
 */
use windows::Win32::Foundation::{
    ERROR_INVALID_WINDOW_HANDLE, GetLastError, HWND, LPARAM, RECT, WPARAM,
};
use windows::Win32::Graphics::Gdi::{GetDC, GetTextMetricsW, ReleaseDC, TEXTMETRICW, UpdateWindow};
use windows::Win32::UI::WindowsAndMessaging::{
    AdjustWindowRectEx, DestroyWindow, GetClientRect, GetWindowTextLengthW, GetWindowTextW,
    SW_HIDE, SW_SHOW, SW_SHOWDEFAULT, SendMessageW, SetWindowPos, SetWindowTextW, ShowWindow,
    SWP_NOACTIVATE, SWP_NOMOVE, SWP_NOZORDER, WINDOW_EX_STYLE, WINDOW_STYLE, WM_ERASEBKGND,
    WM_NCCALCSIZE, WS_MAXIMIZEBOX, WS_OVERLAPPEDWINDOW, WS_THICKFRAME,
};
use windows::core::HSTRING;

use crate::error::{PlatformError, Result};
use crate::host::HostWindow;
use crate::sizing::Sizing;
use crate::types::{FrameStyle, RawWindow, Rect, ShowMode, Size};

/// Decoration flags for a top-level window. Non-resizable windows lose the
/// sizing border and the maximize box but keep the rest of the frame.
pub(crate) fn window_style(style: FrameStyle) -> WINDOW_STYLE {
    if style.resizable {
        WS_OVERLAPPEDWINDOW
    } else {
        WINDOW_STYLE(WS_OVERLAPPEDWINDOW.0 & !(WS_THICKFRAME.0 | WS_MAXIMIZEBOX.0))
    }
}

fn to_native(rect: Rect) -> RECT {
    RECT {
        left: rect.left,
        top: rect.top,
        right: rect.right,
        bottom: rect.bottom,
    }
}

fn from_native(rect: RECT) -> Rect {
    Rect::new(rect.left, rect.top, rect.right, rect.bottom)
}

// Reads a window caption in full, sizing the buffer from a length query so
// long titles never truncate. Internal helper unit tested with injected
// getters.
fn read_window_text_with<FLen, FGet>(get_len: FLen, get_text: FGet) -> Result<String>
where
    FLen: Fn() -> i32,
    FGet: Fn(&mut [u16]) -> i32,
{
    let len = get_len();
    if len < 0 {
        return Err(PlatformError::OperationFailed(
            "GetWindowTextLengthW returned negative length".into(),
        ));
    }

    let mut buffer = vec![0u16; len as usize + 1];
    let copied = get_text(&mut buffer);
    if copied < 0 {
        return Err(PlatformError::OperationFailed(
            "GetWindowTextW returned negative length".into(),
        ));
    }

    buffer.truncate(copied as usize);
    Ok(String::from_utf16_lossy(&buffer))
}

pub struct Win32HostWindow {
    hwnd: HWND,
}

impl Win32HostWindow {
    pub fn new(hwnd: HWND) -> Self {
        Win32HostWindow { hwnd }
    }

    pub fn hwnd(&self) -> HWND {
        self.hwnd
    }
}

impl HostWindow for Win32HostWindow {
    fn raw(&self) -> RawWindow {
        RawWindow(self.hwnd.0 as isize)
    }

    fn show(&self, mode: ShowMode) {
        let cmd = match mode {
            ShowMode::Initial => SW_SHOWDEFAULT,
            ShowMode::Plain => SW_SHOW,
        };
        unsafe { _ = ShowWindow(self.hwnd, cmd) };
    }

    fn hide(&self) {
        unsafe { _ = ShowWindow(self.hwnd, SW_HIDE) };
    }

    fn update(&self) -> Result<()> {
        if unsafe { UpdateWindow(self.hwnd) }.as_bool() {
            Ok(())
        } else {
            let error = unsafe { GetLastError() };
            Err(PlatformError::OperationFailed(format!(
                "UpdateWindow failed: {error:?}"
            )))
        }
    }

    fn set_title(&self, title: &str) -> Result<()> {
        unsafe { SetWindowTextW(self.hwnd, &HSTRING::from(title))? };
        Ok(())
    }

    fn title(&self) -> Result<String> {
        read_window_text_with(
            || unsafe { GetWindowTextLengthW(self.hwnd) },
            |buf| unsafe { GetWindowTextW(self.hwnd, buf) },
        )
    }

    fn client_rect(&self) -> Result<Rect> {
        let mut rect = RECT::default();
        unsafe { GetClientRect(self.hwnd, &mut rect)? };
        Ok(from_native(rect))
    }

    fn set_frame_size(&self, size: Size) -> Result<()> {
        unsafe {
            SetWindowPos(
                self.hwnd,
                None,
                0,
                0,
                size.width,
                size.height,
                SWP_NOMOVE | SWP_NOZORDER | SWP_NOACTIVATE,
            )?;
        }
        Ok(())
    }

    fn frame_rect_for_client(
        &self,
        client: Rect,
        style: FrameStyle,
        has_menu: bool,
    ) -> Result<Rect> {
        let mut rect = to_native(client);
        unsafe {
            AdjustWindowRectEx(
                &mut rect,
                window_style(style),
                has_menu,
                WINDOW_EX_STYLE(0),
            )?;
        }
        Ok(from_native(rect))
    }

    fn client_top_for_frame(&self, frame: Rect) -> Result<i32> {
        // Synchronous non-client recalculation: on return the rectangle holds
        // the client area the window would assign inside `frame`, menu rows
        // included, without anything actually moving.
        let mut probe = to_native(frame);
        unsafe {
            let _ = SendMessageW(
                self.hwnd,
                WM_NCCALCSIZE,
                Some(WPARAM(0)),
                Some(LPARAM(&mut probe as *mut RECT as isize)),
            );
        }
        Ok(probe.top)
    }

    fn erase_background(&self, device_context: usize) {
        unsafe {
            let _ = SendMessageW(
                self.hwnd,
                WM_ERASEBKGND,
                Some(WPARAM(device_context)),
                None,
            );
        }
    }

    fn sizing(&self) -> Result<Sizing> {
        unsafe {
            let hdc = GetDC(Some(self.hwnd));
            if hdc.is_invalid() {
                return Err(PlatformError::OperationFailed(
                    "GetDC failed for sizing context".into(),
                ));
            }
            let mut metrics = TEXTMETRICW::default();
            let ok = GetTextMetricsW(hdc, &mut metrics).as_bool();
            ReleaseDC(Some(self.hwnd), hdc);
            if !ok {
                return Err(PlatformError::OperationFailed(
                    "GetTextMetricsW failed".into(),
                ));
            }
            Ok(Sizing::new(metrics.tmAveCharWidth, metrics.tmHeight))
        }
    }

    fn destroy(&mut self) -> Result<()> {
        unsafe {
            if DestroyWindow(self.hwnd).is_err() {
                let error = GetLastError();
                if error == ERROR_INVALID_WINDOW_HANDLE {
                    // Already gone; teardown proceeds either way.
                    log::debug!("DestroyWindow: handle {:?} already destroyed", self.hwnd);
                    return Ok(());
                }
                return Err(PlatformError::OperationFailed(format!(
                    "DestroyWindow failed: {error:?}"
                )));
            }
        }
        Ok(())
    }
}
