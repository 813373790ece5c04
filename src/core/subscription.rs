//! Scoped event subscriptions
//!
//! Listeners acquired when a view mounts are collected here and released
//! together when the view goes away, however that happens.

/// A handle that can detach its listener
pub trait Unsubscribe {
    fn unsubscribe(self);
}

/// Boxed release callback, for listener handles that detach through a closure
pub type ReleaseFn = Box<dyn FnOnce() + Send + Sync>;

impl Unsubscribe for ReleaseFn {
    fn unsubscribe(self) {
        self()
    }
}

/// Owns a set of listener handles and releases all of them exactly once,
/// either through [`ScopedSubscriptions::release`] or on drop.
pub struct ScopedSubscriptions<U: Unsubscribe> {
    handles: Vec<U>,
}

impl<U: Unsubscribe> ScopedSubscriptions<U> {
    pub fn new() -> Self {
        Self {
            handles: Vec::new(),
        }
    }

    pub fn push(&mut self, handle: U) {
        self.handles.push(handle);
    }

    /// Builder-style variant of [`ScopedSubscriptions::push`]
    pub fn with(mut self, handle: U) -> Self {
        self.push(handle);
        self
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Detach every listener now
    pub fn release(mut self) {
        self.release_all();
    }

    fn release_all(&mut self) {
        for handle in self.handles.drain(..) {
            handle.unsubscribe();
        }
    }
}

impl<U: Unsubscribe> Default for ScopedSubscriptions<U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U: Unsubscribe> FromIterator<U> for ScopedSubscriptions<U> {
    fn from_iter<I: IntoIterator<Item = U>>(iter: I) -> Self {
        Self {
            handles: iter.into_iter().collect(),
        }
    }
}

impl<U: Unsubscribe> Drop for ScopedSubscriptions<U> {
    fn drop(&mut self) {
        self.release_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Handle {
        event: &'static str,
        log: Rc<RefCell<Vec<&'static str>>>,
    }

    impl Unsubscribe for Handle {
        fn unsubscribe(self) {
            self.log.borrow_mut().push(self.event);
        }
    }

    fn handle(event: &'static str, log: &Rc<RefCell<Vec<&'static str>>>) -> Handle {
        Handle {
            event,
            log: Rc::clone(log),
        }
    }

    #[test]
    fn test_drop_releases_every_handle() {
        let log = Rc::new(RefCell::new(Vec::new()));
        {
            let subs = ScopedSubscriptions::new()
                .with(handle("scroll", &log))
                .with(handle("mousemove", &log));
            assert_eq!(subs.len(), 2);
            assert!(log.borrow().is_empty());
        }
        assert_eq!(*log.borrow(), vec!["scroll", "mousemove"]);
    }

    #[test]
    fn test_explicit_release_does_not_double_release() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let subs: ScopedSubscriptions<Handle> =
            [handle("scroll", &log), handle("mousemove", &log)]
                .into_iter()
                .collect();

        subs.release();

        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn test_release_on_unwind() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let log_inner = Rc::clone(&log);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
            let _subs = ScopedSubscriptions::new().with(handle("scroll", &log_inner));
            panic!("view torn down");
        }));
        assert!(result.is_err());
        assert_eq!(*log.borrow(), vec!["scroll"]);
    }

    #[test]
    fn test_boxed_release_callbacks() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicUsize, Ordering};

        let released = Arc::new(AtomicUsize::new(0));
        let mut subs: ScopedSubscriptions<ReleaseFn> = ScopedSubscriptions::new();
        for _ in 0..2 {
            let released = Arc::clone(&released);
            subs.push(Box::new(move || {
                released.fetch_add(1, Ordering::SeqCst);
            }));
        }

        drop(subs);
        assert_eq!(released.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_empty_scope() {
        let subs: ScopedSubscriptions<Handle> = ScopedSubscriptions::default();
        assert!(subs.is_empty());
    }
}
