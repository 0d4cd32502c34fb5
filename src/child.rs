/*
 * Per-child embedding record. Wrapping establishes the parent association;
 * `detach` undoes it and hands the still-alive control back to the caller,
 * while `destroy` consumes both the record and the control. Exactly one of
 * the two ends every association, which is what keeps replacement leak-free.
 */
use crate::control::Control;
use crate::sizing::Sizing;
use crate::types::{RawWindow, WindowId};

pub(crate) struct ChildSlot {
    control: Box<dyn Control>,
    parent: WindowId,
    parent_handle: RawWindow,
}

impl ChildSlot {
    pub(crate) fn wrap(
        control: Box<dyn Control>,
        parent: WindowId,
        parent_handle: RawWindow,
    ) -> Self {
        log::trace!("Child attached to window {parent:?} (handle {parent_handle:?})");
        ChildSlot {
            control,
            parent,
            parent_handle,
        }
    }

    /// Dissolves the association and returns ownership of the control.
    pub(crate) fn detach(self) -> Box<dyn Control> {
        log::trace!("Child detached from window {:?}", self.parent);
        self.control
    }

    /// Destroys the control along with the association.
    pub(crate) fn destroy(mut self) {
        log::trace!("Destroying child of window {:?}", self.parent);
        self.control.destroy();
    }

    pub(crate) fn resize(&mut self, x: i32, y: i32, width: i32, height: i32, sizing: &Sizing) {
        self.control.resize(x, y, width, height, sizing);
    }

    pub(crate) fn propagate_container_state(&mut self) {
        self.control.container_state_changed();
    }
}
