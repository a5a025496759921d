//! Location provider capability and the in-memory history.
//!
//! DESIGN
//! ======
//! The browser's location is a process-wide global. Observers and the
//! navigator depend on [`LocationProvider`] instead so the same code runs
//! against `window.history` in the browser and [`MemoryLocation`] in tests.
//!
//! `push` never notifies on its own, matching `history.pushState`. The
//! navigation-changed notification is delivered only by `announce` or by
//! native back/forward navigation.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

#[cfg(test)]
#[path = "location_test.rs"]
mod location_test;

/// Callback invoked on every navigation-changed notification.
pub type Listener = Rc<dyn Fn()>;

/// Location provider shared between observers and the navigator.
pub type SharedLocation = Rc<dyn LocationProvider>;

/// Error raised by a [`LocationProvider`] backend.
///
/// Only the browser backend can fail; the in-memory history never does.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocationError {
    /// No global `window` object (not running in a browser main thread).
    #[error("no browser window available")]
    NoWindow,
    /// The history API rejected the operation.
    #[error("history operation failed: {0}")]
    History(String),
    /// The navigation event could not be created, dispatched, or listened to.
    #[error("navigation event failed: {0}")]
    Event(String),
}

/// Read, push, and observe the current location path.
pub trait LocationProvider {
    /// Current path component of the location.
    fn path(&self) -> String;

    /// Push a new history entry with `path`, verbatim, without notifying.
    ///
    /// # Errors
    ///
    /// Returns [`LocationError::History`] if the backend rejects the entry.
    fn push(&self, path: &str) -> Result<(), LocationError>;

    /// Deliver a navigation-changed notification to every listener.
    ///
    /// # Errors
    ///
    /// Returns [`LocationError::Event`] if the notification cannot be sent.
    fn announce(&self) -> Result<(), LocationError>;

    /// Register `listener` for navigation-changed notifications.
    ///
    /// The listener stays registered until the returned [`Subscription`] is
    /// dropped.
    ///
    /// # Errors
    ///
    /// Returns [`LocationError::Event`] if the backend cannot attach it.
    fn subscribe(&self, listener: Listener) -> Result<Subscription, LocationError>;
}

/// Registration handle for a navigation listener.
///
/// Dropping the handle unregisters the listener.
#[must_use = "dropping a Subscription unregisters its listener immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wrap the backend-specific release action.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self { release: Some(Box::new(release)) }
    }

    /// Unregister the listener now.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

// =============================================================================
// MEMORY HISTORY
// =============================================================================

struct MemoryHistory {
    entries: Vec<String>,
    cursor: usize,
    listeners: Vec<(u64, Listener)>,
    next_listener_id: u64,
}

/// In-memory history stack with native-style back/forward navigation.
///
/// Cloning yields another handle to the same history.
#[derive(Clone)]
pub struct MemoryLocation {
    inner: Rc<RefCell<MemoryHistory>>,
}

impl MemoryLocation {
    /// Create a history whose only entry is `initial`.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(MemoryHistory {
                entries: vec![initial.into()],
                cursor: 0,
                listeners: Vec::new(),
                next_listener_id: 0,
            })),
        }
    }

    /// Step back one entry, like the browser back button.
    ///
    /// Notifies listeners and returns `true` if the cursor moved.
    pub fn back(&self) -> bool {
        let moved = {
            let mut history = self.inner.borrow_mut();
            if history.cursor == 0 {
                false
            } else {
                history.cursor -= 1;
                true
            }
        };
        if moved {
            self.notify();
        }
        moved
    }

    /// Step forward one entry, like the browser forward button.
    ///
    /// Notifies listeners and returns `true` if the cursor moved.
    pub fn forward(&self) -> bool {
        let moved = {
            let mut history = self.inner.borrow_mut();
            if history.cursor + 1 >= history.entries.len() {
                false
            } else {
                history.cursor += 1;
                true
            }
        };
        if moved {
            self.notify();
        }
        moved
    }

    /// Snapshot of every history entry, oldest first.
    #[must_use]
    pub fn entries(&self) -> Vec<String> {
        self.inner.borrow().entries.clone()
    }

    /// Number of currently registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    fn notify(&self) {
        // Listeners may read the path or (un)subscribe, so release the borrow first.
        let listeners: Vec<Listener> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener();
        }
    }
}

impl Default for MemoryLocation {
    fn default() -> Self {
        Self::new("/")
    }
}

impl fmt::Debug for MemoryLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let history = self.inner.borrow();
        f.debug_struct("MemoryLocation")
            .field("entries", &history.entries)
            .field("cursor", &history.cursor)
            .field("listeners", &history.listeners.len())
            .finish()
    }
}

impl LocationProvider for MemoryLocation {
    fn path(&self) -> String {
        let history = self.inner.borrow();
        history.entries.get(history.cursor).cloned().unwrap_or_default()
    }

    fn push(&self, path: &str) -> Result<(), LocationError> {
        let mut history = self.inner.borrow_mut();
        let keep = history.cursor + 1;
        history.entries.truncate(keep);
        history.entries.push(path.to_owned());
        history.cursor = keep;
        Ok(())
    }

    fn announce(&self) -> Result<(), LocationError> {
        self.notify();
        Ok(())
    }

    fn subscribe(&self, listener: Listener) -> Result<Subscription, LocationError> {
        let id = {
            let mut history = self.inner.borrow_mut();
            let id = history.next_listener_id;
            history.next_listener_id += 1;
            history.listeners.push((id, listener));
            id
        };
        let weak: Weak<RefCell<MemoryHistory>> = Rc::downgrade(&self.inner);
        Ok(Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().listeners.retain(|(existing, _)| *existing != id);
            }
        }))
    }
}
