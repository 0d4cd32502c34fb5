/*
 * Deferred child-layout queue. Size changes arrive in bursts while the user
 * drags a frame edge; instead of laying out inside message handling, windows
 * enqueue themselves here and the application's message loop drains the queue
 * between messages. Requests are coalesced per window, and teardown cancels
 * any request still pending for the dying window.
 *
 * Single-threaded by construction, like the rest of the window core; clones
 * share one queue through `Rc<RefCell>`.
 */
use std::cell::RefCell;
use std::collections::{HashSet, VecDeque};
use std::rc::Rc;

use crate::types::WindowId;

#[derive(Clone, Default)]
pub struct ResizeScheduler {
    inner: Rc<RefCell<Inner>>,
}

#[derive(Default)]
struct Inner {
    order: VecDeque<WindowId>,
    pending: HashSet<WindowId>,
}

impl ResizeScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a layout pass for `window`. A window already queued keeps its
    /// original position; duplicates are dropped.
    pub fn request(&self, window: WindowId) {
        let mut inner = self.inner.borrow_mut();
        if inner.pending.insert(window) {
            inner.order.push_back(window);
            log::trace!("Deferred layout queued for window {window:?}");
        }
    }

    /// Drops any pending request for `window`.
    pub fn cancel(&self, window: WindowId) {
        let mut inner = self.inner.borrow_mut();
        if inner.pending.remove(&window) {
            inner.order.retain(|queued| *queued != window);
            log::trace!("Deferred layout cancelled for window {window:?}");
        }
    }

    pub fn is_pending(&self, window: WindowId) -> bool {
        self.inner.borrow().pending.contains(&window)
    }

    /// Dequeues the oldest pending window, if any.
    pub fn take_next(&self) -> Option<WindowId> {
        let mut inner = self.inner.borrow_mut();
        let next = inner.order.pop_front()?;
        inner.pending.remove(&next);
        Some(next)
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_coalesces_duplicates() {
        let scheduler = ResizeScheduler::new();
        let w = WindowId::new(1);
        scheduler.request(w);
        scheduler.request(w);
        scheduler.request(w);
        assert_eq!(scheduler.take_next(), Some(w));
        assert_eq!(scheduler.take_next(), None);
    }

    #[test]
    fn test_take_next_preserves_request_order() {
        let scheduler = ResizeScheduler::new();
        let a = WindowId::new(1);
        let b = WindowId::new(2);
        scheduler.request(a);
        scheduler.request(b);
        scheduler.request(a); // coalesced, keeps position
        assert_eq!(scheduler.take_next(), Some(a));
        assert_eq!(scheduler.take_next(), Some(b));
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_cancel_removes_pending_request() {
        let scheduler = ResizeScheduler::new();
        let a = WindowId::new(1);
        let b = WindowId::new(2);
        scheduler.request(a);
        scheduler.request(b);
        scheduler.cancel(a);
        assert!(!scheduler.is_pending(a));
        assert_eq!(scheduler.take_next(), Some(b));
        assert_eq!(scheduler.take_next(), None);
    }

    #[test]
    fn test_clones_share_one_queue() {
        let scheduler = ResizeScheduler::new();
        let clone = scheduler.clone();
        let w = WindowId::new(7);
        clone.request(w);
        assert!(scheduler.is_pending(w));
        assert_eq!(scheduler.take_next(), Some(w));
        assert!(clone.is_empty());
    }
}
