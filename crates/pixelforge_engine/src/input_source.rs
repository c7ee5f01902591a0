//! The host-wide source of key events and the listeners attached to it.
//!
//! The host owns one [`InputHub`] and forwards every raw press/release to
//! it.  Anything that wants to observe keys subscribes an
//! [`InputTracker`]; the returned [`Subscription`] detaches the tracker when
//! dropped, so a play session can never leave a listener behind no matter how
//! it ends.
//!
//! ```rust,ignore
//! let hub = InputHub::new();
//! let tracker = Rc::new(RefCell::new(InputTracker::new()));
//! let sub = hub.subscribe(tracker.clone());
//! hub.press("KeyD");
//! assert!(tracker.borrow().is_held("KeyD"));
//! drop(sub);
//! assert_eq!(hub.listener_count(), 0);
//! ```

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use pixelforge_core::InputTracker;

#[derive(Default)]
struct HubInner {
    next_id: u64,
    listeners: Vec<(u64, Rc<RefCell<InputTracker>>)>,
}

/// Dispatches press/release events to every subscribed tracker.
///
/// Cloning the hub yields another handle to the same listener set.
#[derive(Clone, Default)]
pub struct InputHub {
    inner: Rc<RefCell<HubInner>>,
}

impl InputHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `tracker`; it receives events until the subscription drops.
    pub fn subscribe(&self, tracker: Rc<RefCell<InputTracker>>) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, tracker));
        log::trace!("input listener {id} attached");
        Subscription {
            hub: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Deliver a key press to every listener immediately.
    pub fn press(&self, code: &str) {
        for (_, tracker) in &self.inner.borrow().listeners {
            tracker.borrow_mut().on_press(code);
        }
    }

    /// Deliver a key release to every listener immediately.
    pub fn release(&self, code: &str) {
        for (_, tracker) in &self.inner.borrow().listeners {
            tracker.borrow_mut().on_release(code);
        }
    }

    /// Number of trackers currently attached.
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

/// Guard for one attached tracker.  Dropping it detaches the tracker.
#[must_use = "dropping the subscription detaches the tracker immediately"]
pub struct Subscription {
    hub: Weak<RefCell<HubInner>>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(hub) = self.hub.upgrade() {
            hub.borrow_mut().listeners.retain(|(id, _)| *id != self.id);
            log::trace!("input listener {} detached", self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> Rc<RefCell<InputTracker>> {
        Rc::new(RefCell::new(InputTracker::new()))
    }

    #[test]
    fn events_reach_subscribers() {
        let hub = InputHub::new();
        let t = tracker();
        let _sub = hub.subscribe(t.clone());
        hub.press("KeyD");
        assert!(t.borrow().is_held("KeyD"));
        hub.release("KeyD");
        assert!(!t.borrow().is_held("KeyD"));
    }

    #[test]
    fn dropping_subscription_detaches() {
        let hub = InputHub::new();
        let t = tracker();
        let sub = hub.subscribe(t.clone());
        assert_eq!(hub.listener_count(), 1);
        drop(sub);
        assert_eq!(hub.listener_count(), 0);
        hub.press("KeyW");
        assert!(!t.borrow().is_held("KeyW"));
    }

    #[test]
    fn subscriptions_are_independent() {
        let hub = InputHub::new();
        let (a, b) = (tracker(), tracker());
        let sub_a = hub.subscribe(a.clone());
        let _sub_b = hub.subscribe(b.clone());
        drop(sub_a);
        hub.press("Space");
        assert!(!a.borrow().is_held("Space"));
        assert!(b.borrow().is_held("Space"));
    }

    #[test]
    fn subscription_outliving_hub_is_harmless() {
        let hub = InputHub::new();
        let sub = hub.subscribe(tracker());
        drop(hub);
        drop(sub);
    }
}
