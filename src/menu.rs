/*
 * Boundary to the menu-bar builder. The window core attaches a menu at
 * construction, relays genuine menu selections to it, and releases it during
 * teardown; building the bar and mapping command ids to actions is the
 * implementor's business.
 */
use crate::error::Result;
use crate::types::{RawWindow, WindowId};

pub trait MenuBar {
    /// Attaches the bar to the native window. Called once, before the frame
    /// size is computed, so the menu participates in geometry.
    fn attach(&mut self, window: RawWindow) -> Result<()>;

    /// Routes a menu selection to whoever owns the command mapping.
    fn relay_command(&mut self, command_id: i32, window: WindowId);

    /// Releases native menu resources. Called exactly once during teardown,
    /// after the hosted child is gone and before the handle is destroyed.
    fn release(&mut self);
}
