/*
 * Native menu-bar adapter. Owns a prebuilt HMENU (the builder that populates
 * it lives with the application) plus the relay that maps command ids back to
 * application actions. Attaching hands the bar to the window for display and
 * geometry; releasing destroys the native menu exactly once.
 */
use std::ffi::c_void;

use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::{DestroyMenu, HMENU, SetMenu};

use crate::error::Result;
use crate::menu::MenuBar;
use crate::types::{RawWindow, WindowId};

pub struct NativeMenuBar {
    hmenu: Option<HMENU>,
    relay: Box<dyn FnMut(i32, WindowId)>,
}

impl NativeMenuBar {
    pub fn new(hmenu: HMENU, relay: Box<dyn FnMut(i32, WindowId)>) -> Self {
        NativeMenuBar {
            hmenu: Some(hmenu),
            relay,
        }
    }
}

impl MenuBar for NativeMenuBar {
    fn attach(&mut self, window: RawWindow) -> Result<()> {
        let hwnd = HWND(window.0 as *mut c_void);
        unsafe { SetMenu(hwnd, self.hmenu)? };
        Ok(())
    }

    fn relay_command(&mut self, command_id: i32, window: WindowId) {
        log::debug!("Menu command {command_id} on window {window:?}");
        (self.relay)(command_id, window);
    }

    fn release(&mut self) {
        if let Some(hmenu) = self.hmenu.take() {
            // The window no longer owns the bar once its handle is on the way
            // out; destroying here reclaims it and everything it contains.
            if let Err(err) = unsafe { DestroyMenu(hmenu) } {
                log::warn!("DestroyMenu failed: {err:?}");
            }
        }
    }
}
