/*
 * Platform-agnostic types shared by the portable core and the Win32 backend:
 * logical window identifiers, raw handle values, rectangle/size math, frame
 * style flags, and the window creation configuration.
 */
use std::sync::atomic::{AtomicU32, Ordering};

/// Logical identifier for a top-level window, decoupled from the native handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(pub u32);

static NEXT_WINDOW_ID: AtomicU32 = AtomicU32::new(1);

impl WindowId {
    pub fn new(id: u32) -> Self {
        WindowId(id)
    }

    /// Allocates the next process-unique window id.
    pub fn next() -> Self {
        WindowId(NEXT_WINDOW_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn raw(&self) -> u32 {
        self.0
    }
}

/// Opaque native window handle value, carried through the portable core
/// without pulling platform types across the seam.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawWindow(pub isize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Size { width, height }
    }
}

/// Rectangle in the native convention: `right`/`bottom` are exclusive edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Rect {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rect anchored at the origin with the given extent.
    pub fn from_size(size: Size) -> Self {
        Rect {
            left: 0,
            top: 0,
            right: size.width,
            bottom: size.height,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }
}

/// Frame decoration flags a window was created with. The geometry translation
/// must use the same flags the handle carries or the computed frame is wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameStyle {
    pub resizable: bool,
}

impl Default for FrameStyle {
    fn default() -> Self {
        FrameStyle { resizable: true }
    }
}

/// How a window should be made visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowMode {
    /// First-ever show; lets the platform apply its preferred startup state.
    Initial,
    /// Any subsequent show.
    Plain,
}

/// Creation parameters for a top-level window. `width`/`height` describe the
/// desired client area, not the outer frame.
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,
    pub width: i32,
    pub height: i32,
    pub resizable: bool,
}

impl WindowConfig {
    pub fn frame_style(&self) -> FrameStyle {
        FrameStyle {
            resizable: self.resizable,
        }
    }

    pub fn client_size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_extents() {
        let r = Rect::new(10, 20, 110, 70);
        assert_eq!(r.width(), 100);
        assert_eq!(r.height(), 50);
        assert_eq!(r.size(), Size::new(100, 50));
    }

    #[test]
    fn test_rect_from_size_is_origin_anchored() {
        let r = Rect::from_size(Size::new(320, 240));
        assert_eq!(r, Rect::new(0, 0, 320, 240));
    }

    #[test]
    fn test_window_id_next_is_unique() {
        let a = WindowId::next();
        let b = WindowId::next();
        assert_ne!(a, b);
    }
}
