/*
 * Window class registration for every top-level window this crate creates.
 * Registration is idempotent per process; the class carries the shared
 * window procedure and the stock button-face background brush.
 */
use std::ffi::c_void;
use std::sync::OnceLock;

use windows::Win32::Foundation::{GetLastError, HINSTANCE};
use windows::Win32::Graphics::Gdi::HBRUSH;
use windows::Win32::UI::WindowsAndMessaging::{
    COLOR_BTNFACE, CS_HREDRAW, CS_VREDRAW, GetClassInfoExW, IDC_ARROW, IDI_APPLICATION,
    LoadCursorW, LoadIconW, RegisterClassExW, UnregisterClassW, WNDCLASSEXW,
};
use windows::core::{PCWSTR, w};

use crate::error::{PlatformError, Result as PlatformResult};
use crate::win32::proc::window_proc;

pub(crate) const WINDOW_CLASS_NAME: PCWSTR = w!("FramehostTopLevelWindow");

static CLASS_REGISTERED: OnceLock<()> = OnceLock::new();

/*
 * Registers the top-level window class if not already registered. Safe to
 * call before every window creation; the `OnceLock` latch and the
 * `GetClassInfoExW` pre-check make repeats cheap no-ops.
 */
pub fn register_window_class(h_instance: HINSTANCE) -> PlatformResult<()> {
    if CLASS_REGISTERED.get().is_some() {
        return Ok(());
    }

    unsafe {
        let mut existing = WNDCLASSEXW::default();
        if GetClassInfoExW(Some(h_instance), WINDOW_CLASS_NAME, &mut existing).is_ok() {
            log::debug!("Window class already registered");
            let _ = CLASS_REGISTERED.set(());
            return Ok(());
        }

        let wc = WNDCLASSEXW {
            cbSize: std::mem::size_of::<WNDCLASSEXW>() as u32,
            style: CS_HREDRAW | CS_VREDRAW,
            lpfnWndProc: Some(window_proc),
            cbClsExtra: 0,
            cbWndExtra: 0,
            hInstance: h_instance,
            hIcon: LoadIconW(None, IDI_APPLICATION)?,
            hCursor: LoadCursorW(None, IDC_ARROW)?,
            hbrBackground: HBRUSH((COLOR_BTNFACE.0 + 1) as *mut c_void),
            lpszMenuName: PCWSTR::null(),
            lpszClassName: WINDOW_CLASS_NAME,
            hIconSm: LoadIconW(None, IDI_APPLICATION)?,
        };

        if RegisterClassExW(&wc) == 0 {
            let error = GetLastError();
            log::error!("RegisterClassExW failed: {error:?}");
            return Err(PlatformError::InitializationFailed(format!(
                "RegisterClassExW failed: {error:?}"
            )));
        }
    }

    let _ = CLASS_REGISTERED.set(());
    log::debug!("Window class registered");
    Ok(())
}

/// Unregisters the window class. Failure is logged and not retried; windows
/// may still be alive at process shutdown and the OS cleans up regardless.
pub fn unregister_window_class(h_instance: HINSTANCE) {
    unsafe {
        if let Err(err) = UnregisterClassW(WINDOW_CLASS_NAME, Some(h_instance)) {
            log::warn!("UnregisterClassW failed: {err:?}");
        }
    }
}
