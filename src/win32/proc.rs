/*
 * Native window creation and the shared window procedure. Each HWND carries
 * its logical `WindowId` in GWLP_USERDATA (boxed at WM_NCCREATE, freed at
 * WM_NCDESTROY); a thread-local registry maps that id to the portable
 * `Window`, which makes handle-to-window recovery work from the very first
 * message and keeps untracked handles on the default path.
 */
use std::cell::RefCell;
use std::collections::HashMap;
use std::ffi::c_void;
use std::rc::Rc;

use windows::Win32::Foundation::{HINSTANCE, HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::WindowsAndMessaging::{
    CREATESTRUCTW, CW_USEDEFAULT, CreateWindowExW, DefWindowProcW, GWLP_USERDATA,
    GetWindowLongPtrW, SWP_NOSIZE, SetWindowLongPtrW, WINDOW_EX_STYLE, WINDOWPOS, WM_CLOSE,
    WM_COMMAND, WM_NCCREATE, WM_NCDESTROY, WM_PRINTCLIENT, WM_WINDOWPOSCHANGED,
    WS_CLIPCHILDREN,
};
use windows::core::HSTRING;

use crate::error::Result as PlatformResult;
use crate::menu::MenuBar;
use crate::scheduler::ResizeScheduler;
use crate::types::{WindowConfig, WindowId};
use crate::win32::host::{Win32HostWindow, window_style};
use crate::win32::window_class::{WINDOW_CLASS_NAME, register_window_class};
use crate::window::{Dispatch, Window, WindowMessage};

thread_local! {
    static WINDOWS: RefCell<HashMap<u32, Rc<RefCell<Window>>>> = RefCell::new(HashMap::new());
}

/*
 * Creates a native top-level window and binds it into a portable `Window`.
 * The requested width/height are a first approximation of the outer frame;
 * `Window::new` immediately corrects the frame so the client area matches
 * the config exactly, menu included.
 */
pub fn create_window(
    config: &WindowConfig,
    menu: Option<Box<dyn MenuBar>>,
    scheduler: ResizeScheduler,
) -> PlatformResult<Rc<RefCell<Window>>> {
    let h_instance = HINSTANCE(unsafe { GetModuleHandleW(None)? }.0);
    register_window_class(h_instance)?;

    let id = WindowId::next();
    let id_param = Box::new(id);

    let hwnd = unsafe {
        CreateWindowExW(
            WINDOW_EX_STYLE(0),
            WINDOW_CLASS_NAME,
            &HSTRING::from(config.title.as_str()),
            window_style(config.frame_style()) | WS_CLIPCHILDREN,
            CW_USEDEFAULT,
            CW_USEDEFAULT,
            config.width,
            config.height,
            None,
            None,
            Some(h_instance),
            Some(Box::into_raw(id_param) as *mut c_void),
        )
    }
    .inspect_err(|err| {
        log::error!("CreateWindowExW failed for window {id:?}: {err:?}");
    })?;

    let host = Win32HostWindow::new(hwnd);
    let window = Window::new(
        id,
        Box::new(host),
        config.frame_style(),
        menu,
        config.client_size(),
        scheduler,
    );
    let shared = Rc::new(RefCell::new(window));
    WINDOWS.with(|map| map.borrow_mut().insert(id.raw(), Rc::clone(&shared)));
    log::debug!("Window {id:?} registered for HWND {hwnd:?}");
    Ok(shared)
}

/// WM_COMMAND carries three unrelated event families; a menu selection is the
/// one with no control handle and a zero notification code.
fn menu_command_id(wparam: usize, lparam: isize) -> Option<i32> {
    if lparam == 0 && (wparam >> 16) & 0xFFFF == 0 {
        Some((wparam & 0xFFFF) as i32)
    } else {
        None
    }
}

/// Decodes a raw message into the portable dispatch vocabulary. `None` means
/// the core has no opinion and default processing applies.
unsafe fn translate_message(msg: u32, wparam: WPARAM, lparam: LPARAM) -> Option<WindowMessage> {
    match msg {
        WM_COMMAND => menu_command_id(wparam.0, lparam.0)
            .map(|command_id| WindowMessage::MenuCommand { command_id }),
        WM_WINDOWPOSCHANGED => {
            let pos = unsafe { &*(lparam.0 as *const WINDOWPOS) };
            Some(WindowMessage::PositionChanged {
                size_changed: (pos.flags.0 & SWP_NOSIZE.0) == 0,
            })
        }
        WM_PRINTCLIENT => Some(WindowMessage::PrintClient {
            device_context: wparam.0,
        }),
        WM_CLOSE => Some(WindowMessage::CloseRequest),
        _ => None,
    }
}

pub(crate) unsafe extern "system" fn window_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    if msg == WM_NCCREATE {
        let create_struct = unsafe { &*(lparam.0 as *const CREATESTRUCTW) };
        let id_ptr = create_struct.lpCreateParams as *mut WindowId;
        unsafe { SetWindowLongPtrW(hwnd, GWLP_USERDATA, id_ptr as isize) };
        return unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) };
    }

    let id_ptr = unsafe { GetWindowLongPtrW(hwnd, GWLP_USERDATA) } as *mut WindowId;
    if id_ptr.is_null() {
        return unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) };
    }
    let id = unsafe { *id_ptr };

    if msg == WM_NCDESTROY {
        WINDOWS.with(|map| map.borrow_mut().remove(&id.raw()));
        let _ = unsafe { Box::from_raw(id_ptr) };
        unsafe { SetWindowLongPtrW(hwnd, GWLP_USERDATA, 0) };
        log::debug!("Window {id:?} unbound from HWND {hwnd:?}");
        return unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) };
    }

    let Some(message) = (unsafe { translate_message(msg, wparam, lparam) }) else {
        return unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) };
    };

    // Clone the Rc out before borrowing: dispatch may destroy the handle,
    // which re-enters this procedure and mutates the registry.
    let shared = WINDOWS.with(|map| map.borrow().get(&id.raw()).cloned());
    let Some(shared) = shared else {
        return unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) };
    };

    let verdict = match shared.try_borrow_mut() {
        Ok(mut window) => window.handle_message(message),
        Err(_) => {
            // Re-entrant message while dispatch is already running; the
            // default path is the only safe answer.
            log::trace!("Re-entrant message {msg:#06x} for window {id:?}");
            return unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) };
        }
    };

    match verdict {
        Dispatch::Handled | Dispatch::Destroyed => LRESULT(0),
        Dispatch::Default => unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) },
    }
}

/// Runs the deferred child layouts queued by size changes. Call from the
/// message loop between dispatched messages; loops until the queue is empty
/// so a burst of resizes settles in one drain.
pub fn drain_layout_queue(scheduler: &ResizeScheduler) {
    while let Some(id) = scheduler.take_next() {
        let shared = WINDOWS.with(|map| map.borrow().get(&id.raw()).cloned());
        if let Some(shared) = shared {
            shared.borrow_mut().layout_child();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_command_id_accepts_menu_selection() {
        // Menu selection: zero notification code, no control handle.
        assert_eq!(menu_command_id(42, 0), Some(42));
    }

    #[test]
    fn test_menu_command_id_rejects_control_notification() {
        // Control notifications carry the control handle in LPARAM.
        assert_eq!(menu_command_id(42, 0x1234), None);
    }

    #[test]
    fn test_menu_command_id_rejects_accelerator() {
        // Accelerators use notification code 1 in the high word.
        assert_eq!(menu_command_id((1 << 16) | 42, 0), None);
    }
}
