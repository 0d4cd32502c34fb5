/*
 * Top-level window core: ownership of the native handle, the optional menu
 * bar, and the single hosted child; the closing-confirmation protocol; the
 * fixed teardown sequence; and the dispatch contract for the messages the
 * window cares about. The native router decodes raw messages into
 * `WindowMessage` and applies the `Dispatch` verdict, so everything here is
 * portable and testable with mock collaborators.
 */
use std::mem;

use crate::child::ChildSlot;
use crate::control::Control;
use crate::geometry::compute_frame_size;
use crate::host::HostWindow;
use crate::layout::inset_by_margin;
use crate::menu::MenuBar;
use crate::scheduler::ResizeScheduler;
use crate::types::{FrameStyle, ShowMode, Size, WindowId};

/// Messages the window core handles, already decoded from the native wire
/// format. Anything else never reaches the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowMessage {
    /// A genuine menu selection (not a control notification).
    MenuCommand { command_id: i32 },
    /// The frame moved or resized; only a size change matters here.
    PositionChanged { size_changed: bool },
    /// The window is asked to render into an external device context.
    PrintClient { device_context: usize },
    /// The user asked to close the window.
    CloseRequest,
}

/// Verdict the router applies after dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Consumed; the host's default processing must not run.
    Handled,
    /// Not consumed; fall through to the host's default processing.
    Default,
    /// Consumed, and the window tore itself down while handling it.
    Destroyed,
}

pub type ClosingHandler = Box<dyn FnMut(&mut Window) -> bool>;

fn default_on_closing() -> ClosingHandler {
    Box::new(|_| true)
}

pub struct Window {
    id: WindowId,
    host: Box<dyn HostWindow>,
    style: FrameStyle,
    menu: Option<Box<dyn MenuBar>>,
    child: Option<ChildSlot>,
    shown_once: bool,
    margined: bool,
    on_closing: ClosingHandler,
    scheduler: ResizeScheduler,
    destroyed: bool,
}

impl Window {
    /*
     * Binds a freshly created native handle into a window: attaches the menu
     * (if any) so it participates in geometry, then resizes the frame so the
     * client area matches the requested size exactly. Both steps are
     * best-effort; the handle itself already exists and failure here leaves
     * a usable, if slightly misshapen, window.
     */
    pub fn new(
        id: WindowId,
        host: Box<dyn HostWindow>,
        style: FrameStyle,
        mut menu: Option<Box<dyn MenuBar>>,
        client_size: Size,
        scheduler: ResizeScheduler,
    ) -> Self {
        if let Some(bar) = menu.as_mut()
            && let Err(err) = bar.attach(host.raw())
        {
            log::warn!("Menu attach failed for window {id:?}: {err}");
        }

        let frame = compute_frame_size(host.as_ref(), client_size, menu.is_some(), style);
        if let Err(err) = host.set_frame_size(frame) {
            log::warn!("Initial frame sizing failed for window {id:?}: {err}");
        }

        log::debug!("Window {id:?} created, client {client_size:?}, frame {frame:?}");
        Window {
            id,
            host,
            style,
            menu,
            child: None,
            shown_once: false,
            margined: false,
            on_closing: default_on_closing(),
            scheduler,
            destroyed: false,
        }
    }

    pub fn id(&self) -> WindowId {
        self.id
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Makes the window visible. The first show performs one synchronous
    /// child layout pass before visibility so the user never sees an
    /// unpositioned child; later shows only toggle visibility.
    pub fn show(&mut self) {
        if self.destroyed {
            log::warn!("show ignored for torn-down window {:?}", self.id);
            return;
        }
        if self.shown_once {
            self.host.show(ShowMode::Plain);
            return;
        }
        self.shown_once = true;
        self.layout_child();
        self.host.show(ShowMode::Initial);
        if let Err(err) = self.host.update() {
            log::warn!("Post-show redraw failed for window {:?}: {err}", self.id);
        }
    }

    /// Makes the window invisible without touching `shown_once`; a later
    /// `show` is a plain visibility toggle, not a first show.
    pub fn hide(&self) {
        self.host.hide();
    }

    /// Resizes the outer frame so the client area matches `client` exactly,
    /// menu allowance included. Best-effort, like the construction fix-up.
    pub fn set_client_size(&mut self, client: Size) {
        if self.destroyed {
            return;
        }
        let frame =
            compute_frame_size(self.host.as_ref(), client, self.menu.is_some(), self.style);
        if let Err(err) = self.host.set_frame_size(frame) {
            log::warn!("Client resize failed for window {:?}: {err}", self.id);
        }
    }

    pub fn set_title(&self, title: &str) {
        // Title changes never trigger layout.
        if let Err(err) = self.host.set_title(title) {
            log::warn!("Title update failed for window {:?}: {err}", self.id);
        }
    }

    pub fn title(&self) -> String {
        self.host.title().unwrap_or_else(|err| {
            log::warn!("Title read failed for window {:?}: {err}", self.id);
            String::new()
        })
    }

    /// Replaces the hosted child. The previous control (if any) is detached,
    /// not destroyed, and returned to the caller who still owns it. A layout
    /// pass is queued for the new arrangement.
    pub fn set_child(&mut self, control: Option<Box<dyn Control>>) -> Option<Box<dyn Control>> {
        let previous = self.child.take().map(ChildSlot::detach);
        self.child = control.map(|c| ChildSlot::wrap(c, self.id, self.host.raw()));
        self.request_layout();
        previous
    }

    pub fn margined(&self) -> bool {
        self.margined
    }

    pub fn set_margined(&mut self, margined: bool) {
        self.margined = margined;
        self.request_layout();
    }

    pub fn set_on_closing(&mut self, handler: ClosingHandler) {
        self.on_closing = handler;
    }

    /// Forwards a container-state change to the hosted child.
    pub fn propagate_container_state(&mut self) {
        if let Some(child) = self.child.as_mut() {
            child.propagate_container_state();
        }
    }

    fn request_layout(&self) {
        if self.destroyed || self.child.is_none() {
            return;
        }
        self.scheduler.request(self.id);
    }

    /// Recomputes the hosted child's bounds from the current client area.
    /// Safe to call at any time; a torn-down or childless window is a no-op.
    pub fn layout_child(&mut self) {
        if self.destroyed {
            return;
        }
        let Some(child) = self.child.as_mut() else {
            return;
        };
        let client = match self.host.client_rect() {
            Ok(rect) => rect,
            Err(err) => {
                log::warn!("Client rect query failed for window {:?}: {err}", self.id);
                return;
            }
        };
        // The sizing context lives for exactly one pass.
        let sizing = match self.host.sizing() {
            Ok(sizing) => sizing,
            Err(err) => {
                log::warn!(
                    "Sizing context unavailable for window {:?}: {err}",
                    self.id
                );
                return;
            }
        };
        let bounds = if self.margined {
            inset_by_margin(client, &sizing)
        } else {
            client
        };
        child.resize(
            bounds.left,
            bounds.top,
            bounds.width(),
            bounds.height(),
            &sizing,
        );
    }

    /// Dispatches one decoded message and reports what the router should do.
    pub fn handle_message(&mut self, message: WindowMessage) -> Dispatch {
        if self.destroyed {
            // Late messages for a torn-down window fall through untouched.
            return Dispatch::Default;
        }
        match message {
            WindowMessage::MenuCommand { command_id } => {
                match self.menu.as_mut() {
                    Some(menu) => menu.relay_command(command_id, self.id),
                    None => {
                        log::warn!(
                            "Menu command {command_id} arrived for menuless window {:?}",
                            self.id
                        );
                    }
                }
                Dispatch::Handled
            }
            WindowMessage::PositionChanged { size_changed } => {
                if !size_changed {
                    return Dispatch::Default;
                }
                self.request_layout();
                Dispatch::Handled
            }
            WindowMessage::PrintClient { device_context } => {
                self.host.erase_background(device_context);
                Dispatch::Handled
            }
            WindowMessage::CloseRequest => {
                // Swap the handler out so it may call back into the window.
                let mut handler = mem::replace(&mut self.on_closing, default_on_closing());
                let permit = handler(self);
                if !self.destroyed {
                    self.on_closing = handler;
                }
                if permit && !self.destroyed {
                    self.destroy();
                }
                if self.destroyed {
                    Dispatch::Destroyed
                } else {
                    Dispatch::Handled
                }
            }
        }
    }

    /*
     * Fixed teardown sequence, exactly once: hide, destroy the child
     * (recursively, via its own destroy), release the menu, cancel any
     * pending deferred layout, destroy the native handle. Each step is
     * guarded on its own so a failing host call never skips the rest.
     */
    pub fn destroy(&mut self) {
        if self.destroyed {
            log::warn!("destroy called twice for window {:?}", self.id);
            return;
        }
        self.destroyed = true;
        log::debug!("Tearing down window {:?}", self.id);

        self.host.hide();
        if let Some(child) = self.child.take() {
            child.destroy();
        }
        if let Some(mut menu) = self.menu.take() {
            menu.release();
        }
        self.scheduler.cancel(self.id);
        if let Err(err) = self.host.destroy() {
            log::warn!("Native handle destroy failed for window {:?}: {err}", self.id);
        }
    }
}
