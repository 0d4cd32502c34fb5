/*
 * Recording mock collaborators for the window core tests. A shared `CallLog`
 * records every interaction in order so tests can assert sequencing (teardown
 * order, layout-before-show) and not just final state.
 */
use std::cell::RefCell;
use std::rc::Rc;

use crate::control::Control;
use crate::error::{PlatformError, Result};
use crate::host::HostWindow;
use crate::menu::MenuBar;
use crate::sizing::Sizing;
use crate::types::{FrameStyle, RawWindow, Rect, ShowMode, WindowId};

#[derive(Clone, Default)]
pub(crate) struct CallLog(Rc<RefCell<Vec<String>>>);

impl CallLog {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&self, entry: impl Into<String>) {
        self.0.borrow_mut().push(entry.into());
    }

    pub(crate) fn entries(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    /// Index of the first entry equal to `needle`, for order assertions.
    pub(crate) fn position(&self, needle: &str) -> Option<usize> {
        self.0.borrow().iter().position(|e| e == needle)
    }

    pub(crate) fn count(&self, needle: &str) -> usize {
        self.0.borrow().iter().filter(|e| *e == needle).count()
    }
}

pub(crate) struct MockHost {
    pub(crate) log: CallLog,
    client: RefCell<Rect>,
    title: RefCell<String>,
    border: i32,
    caption: i32,
    menu_offset: i32,
    fail_probe: bool,
    sizing: Sizing,
}

impl MockHost {
    pub(crate) fn new() -> Self {
        MockHost {
            log: CallLog::new(),
            client: RefCell::new(Rect::new(0, 0, 320, 240)),
            title: RefCell::new(String::new()),
            border: 8,
            caption: 31,
            menu_offset: 20,
            fail_probe: false,
            sizing: Sizing::new(4, 8),
        }
    }

    pub(crate) fn with_log(log: CallLog) -> Self {
        MockHost {
            log,
            ..MockHost::new()
        }
    }

    pub(crate) fn with_frame(mut self, border: i32, caption: i32) -> Self {
        self.border = border;
        self.caption = caption;
        self
    }

    pub(crate) fn with_menu_offset(mut self, offset: i32) -> Self {
        self.menu_offset = offset;
        self
    }

    pub(crate) fn with_failing_probe(mut self) -> Self {
        self.fail_probe = true;
        self
    }

    pub(crate) fn with_client(self, client: Rect) -> Self {
        *self.client.borrow_mut() = client;
        self
    }
}

impl HostWindow for MockHost {
    fn raw(&self) -> RawWindow {
        RawWindow(0x1000)
    }

    fn show(&self, mode: ShowMode) {
        self.log.record(format!("show:{mode:?}"));
    }

    fn hide(&self) {
        self.log.record("hide");
    }

    fn update(&self) -> Result<()> {
        self.log.record("update");
        Ok(())
    }

    fn set_title(&self, title: &str) -> Result<()> {
        *self.title.borrow_mut() = title.to_string();
        Ok(())
    }

    fn title(&self) -> Result<String> {
        Ok(self.title.borrow().clone())
    }

    fn client_rect(&self) -> Result<Rect> {
        Ok(*self.client.borrow())
    }

    fn set_frame_size(&self, size: crate::types::Size) -> Result<()> {
        self.log
            .record(format!("set_frame_size:{}x{}", size.width, size.height));
        Ok(())
    }

    fn frame_rect_for_client(
        &self,
        client: Rect,
        _style: FrameStyle,
        _has_menu: bool,
    ) -> Result<Rect> {
        Ok(Rect::new(
            client.left - self.border,
            client.top - (self.border + self.caption),
            client.right + self.border,
            client.bottom + self.border,
        ))
    }

    fn client_top_for_frame(&self, _frame: Rect) -> Result<i32> {
        if self.fail_probe {
            return Err(PlatformError::OperationFailed("probe refused".into()));
        }
        Ok(self.menu_offset)
    }

    fn erase_background(&self, device_context: usize) {
        self.log.record(format!("erase_background:{device_context}"));
    }

    fn sizing(&self) -> Result<Sizing> {
        Ok(self.sizing)
    }

    fn destroy(&mut self) -> Result<()> {
        self.log.record("destroy_handle");
        Ok(())
    }
}

pub(crate) struct MockMenu {
    log: CallLog,
}

impl MockMenu {
    pub(crate) fn new(log: CallLog) -> Self {
        MockMenu { log }
    }
}

impl MenuBar for MockMenu {
    fn attach(&mut self, _window: RawWindow) -> Result<()> {
        self.log.record("menu_attach");
        Ok(())
    }

    fn relay_command(&mut self, command_id: i32, _window: WindowId) {
        self.log.record(format!("relay:{command_id}"));
    }

    fn release(&mut self) {
        self.log.record("menu_release");
    }
}

pub(crate) struct MockControl {
    log: CallLog,
    label: &'static str,
}

impl MockControl {
    pub(crate) fn new(log: CallLog, label: &'static str) -> Self {
        MockControl { log, label }
    }
}

impl Control for MockControl {
    fn resize(&mut self, x: i32, y: i32, width: i32, height: i32, _sizing: &Sizing) {
        self.log
            .record(format!("resize {}:{x},{y},{width},{height}", self.label));
    }

    fn destroy(&mut self) {
        self.log.record(format!("destroy {}", self.label));
    }

    fn container_state_changed(&mut self) {
        self.log.record(format!("container_state {}", self.label));
    }
}
