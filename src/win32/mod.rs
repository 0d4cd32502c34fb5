/*
 * Win32 backend: binds the portable window core to live HWNDs. Class
 * registration, the native `HostWindow` implementation, the menu-bar adapter,
 * and the window procedure router live here; nothing outside this module
 * touches the `windows` crate.
 */
mod host;
mod menu;
mod proc;
mod window_class;

pub use host::Win32HostWindow;
pub use menu::NativeMenuBar;
pub use proc::{create_window, drain_layout_queue};
pub use window_class::{register_window_class, unregister_window_class};
