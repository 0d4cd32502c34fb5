/*
 * framehost: the top-level window core of a Win32 UI toolkit backend. Owns
 * window lifecycle (create, show, close-with-veto, ordered teardown), the
 * client-area to frame-size geometry translation (menu bar included), and
 * the single-child layout engine with its deferred resize queue.
 *
 * The portable modules carry all policy and compile on every platform so the
 * logic is testable anywhere; the `win32` module binds them to live HWNDs and
 * only exists on Windows builds.
 */
mod child;
pub mod control;
pub mod error;
mod geometry;
pub mod layout;
pub mod menu;
pub mod scheduler;
pub mod sizing;
pub mod types;
pub mod window;

pub mod host;

#[cfg(target_os = "windows")]
pub mod win32;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{PlatformError, Result as PlatformResult};
pub use layout::WINDOW_MARGIN;
pub use scheduler::ResizeScheduler;
pub use types::{FrameStyle, RawWindow, Rect, ShowMode, Size, WindowConfig, WindowId};
pub use window::{ClosingHandler, Dispatch, Window, WindowMessage};

#[cfg(target_os = "windows")]
pub use win32::{
    NativeMenuBar, Win32HostWindow, create_window, drain_layout_queue, register_window_class,
    unregister_window_class,
};
