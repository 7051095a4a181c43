//! Push-based value notification between a subject and its observers.
//!
//! A [`Subject`] keeps a set of non-owning [`Weak`] handles. Observers stay
//! owned by whoever created them (typically a scene); dropping the last
//! strong handle is enough to stop notifications, the dead entry is pruned on
//! the next [`Subject::notify`].

use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::RefCell;
use log::{trace, warn};

/// Which aspect of the observers a subject drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Rotation,
    Color,
    Value,
}

/// A value pushed from a subject to its observers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Notification {
    pub channel: Channel,
    pub value: f32,
}

/// Receiver side of the channel
pub trait Observer {
    fn notify(&mut self, notification: Notification);
}

/// Shared handle to an observer, as created by the owner
pub type ObserverHandle = Rc<RefCell<dyn Observer>>;

/// Set of registered observers
#[derive(Default, Clone)]
pub struct Subject {
    observers: Vec<Weak<RefCell<dyn Observer>>>,
}

impl core::fmt::Debug for Subject {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Subject")
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Subject {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, observer: &ObserverHandle) -> Option<usize> {
        let target = Rc::as_ptr(observer);
        self.observers
            .iter()
            .position(|w| core::ptr::addr_eq(w.as_ptr(), target))
    }

    /// Add `observer`. Returns `false` if it was already registered.
    pub fn register(&mut self, observer: &ObserverHandle) -> bool {
        if self.position(observer).is_some() {
            return false;
        }
        self.observers.push(Rc::downgrade(observer));
        true
    }

    /// Remove `observer`. Returns `false` if it was not registered.
    pub fn unregister(&mut self, observer: &ObserverHandle) -> bool {
        match self.position(observer) {
            Some(index) => {
                self.observers.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn is_registered(&self, observer: &ObserverHandle) -> bool {
        self.position(observer).is_some()
    }

    /// Number of registered observers that are still alive
    pub fn len(&self) -> usize {
        self.observers.iter().filter(|w| w.strong_count() > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Push `notification` to every live observer, in registration order.
    ///
    /// Returns how many observers received it. An observer that is currently
    /// borrowed elsewhere is skipped.
    pub fn notify(&mut self, notification: Notification) -> usize {
        self.observers.retain(|w| w.strong_count() > 0);

        let mut delivered = 0;
        for weak in &self.observers {
            let Some(observer) = weak.upgrade() else {
                continue;
            };
            match observer.try_borrow_mut() {
                Ok(mut observer) => {
                    observer.notify(notification);
                    delivered += 1;
                }
                Err(_) => warn!("Observer busy, skipped {:?}", notification),
            }
        }
        trace!("Notified {} observers: {:?}", delivered, notification);
        delivered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[derive(Default)]
    struct Recorder {
        received: Vec<Notification>,
    }

    impl Observer for Recorder {
        fn notify(&mut self, notification: Notification) {
            self.received.push(notification);
        }
    }

    fn recorder() -> (Rc<RefCell<Recorder>>, ObserverHandle) {
        let concrete = Rc::new(RefCell::new(Recorder::default()));
        let handle: ObserverHandle = concrete.clone();
        (concrete, handle)
    }

    fn value(v: f32) -> Notification {
        Notification {
            channel: Channel::Value,
            value: v,
        }
    }

    #[test]
    fn test_register_is_idempotent() {
        let (_rec, handle) = recorder();
        let mut subject = Subject::new();
        assert!(subject.register(&handle));
        assert!(!subject.register(&handle));
        assert_eq!(subject.len(), 1);

        assert!(subject.unregister(&handle));
        assert!(!subject.is_registered(&handle));
        assert!(!subject.unregister(&handle));
    }

    #[test]
    fn test_notify_reaches_every_observer_once() {
        let (a, ha) = recorder();
        let (b, hb) = recorder();
        let mut subject = Subject::new();
        subject.register(&ha);
        subject.register(&hb);
        subject.register(&ha);

        assert_eq!(subject.notify(value(42.0)), 2);
        assert_eq!(a.borrow().received, [value(42.0)]);
        assert_eq!(b.borrow().received.len(), 1);
    }

    #[test]
    fn test_dropped_observer_is_pruned() {
        let (a, ha) = recorder();
        let mut subject = Subject::new();
        subject.register(&ha);
        drop(a);
        drop(ha);
        assert_eq!(subject.len(), 0);
        assert_eq!(subject.notify(value(1.0)), 0);
    }

    #[test]
    fn test_busy_observer_is_skipped() {
        let (a, ha) = recorder();
        let mut subject = Subject::new();
        subject.register(&ha);
        let guard = a.borrow();
        assert_eq!(subject.notify(value(3.0)), 0);
        drop(guard);
        assert_eq!(subject.notify(value(4.0)), 1);
    }
}
