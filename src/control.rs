/*
 * Boundary to the control hierarchy. A window hosts at most one control and
 * only ever needs to move it, destroy it, and forward container-state
 * changes; everything else about controls lives outside this crate.
 */
use crate::sizing::Sizing;

pub trait Control {
    /// Positions the control within its parent's client area. Coordinates
    /// are pixels; `sizing` lets the control convert its own dialog-unit
    /// constants during the same pass.
    fn resize(&mut self, x: i32, y: i32, width: i32, height: i32, sizing: &Sizing);

    /// Destroys the control and its native resources, recursively.
    fn destroy(&mut self);

    /// Notifies the control that its container chain changed (reparent,
    /// top-level attach). Default is a no-op for controls that do not care.
    fn container_state_changed(&mut self) {}
}
