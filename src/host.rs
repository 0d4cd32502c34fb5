/*
 * The seam between the portable window core and the native windowing system.
 * `HostWindow` wraps exactly the per-handle operations the core needs; the
 * Win32 backend implements it over a live HWND and tests implement it with
 * recording mocks. All methods that can genuinely fail return `Result`; the
 * core decides per call site whether a failure is fatal or degraded.
 */
use crate::error::Result;
use crate::sizing::Sizing;
use crate::types::{FrameStyle, RawWindow, Rect, ShowMode, Size};

pub trait HostWindow {
    /// Opaque native handle value, for logging and cross-referencing.
    fn raw(&self) -> RawWindow;

    fn show(&self, mode: ShowMode);

    fn hide(&self);

    /// Forces a repaint after the window becomes visible.
    fn update(&self) -> Result<()>;

    fn set_title(&self, title: &str) -> Result<()>;

    fn title(&self) -> Result<String>;

    /// Current client rectangle, origin-anchored.
    fn client_rect(&self) -> Result<Rect>;

    /// Resizes the outer frame in place without moving or re-stacking it.
    fn set_frame_size(&self, size: Size) -> Result<()>;

    /// Frame rectangle that would wrap `client` under the given decoration
    /// flags, menu bar excluded. The menu contribution is discovered
    /// separately via `client_top_for_frame`.
    fn frame_rect_for_client(&self, client: Rect, style: FrameStyle, has_menu: bool)
    -> Result<Rect>;

    /// Synchronously asks the window where the client area would start inside
    /// the given frame rectangle. A wrapped menu bar pushes this value down,
    /// which is the only way to learn the menu's true height.
    fn client_top_for_frame(&self, frame: Rect) -> Result<i32>;

    /// Erases the window background into the given device context.
    fn erase_background(&self, device_context: usize);

    /// Acquires the dialog-unit base metrics for one layout pass.
    fn sizing(&self) -> Result<Sizing>;

    /// Destroys the native handle. Tolerates an already-gone handle.
    fn destroy(&mut self) -> Result<()>;
}
