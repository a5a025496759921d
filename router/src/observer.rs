//! Current location path as an observed value.
//!
//! A [`PathObserver`] is mounted against a location provider, keeps its own
//! copy of the path in sync with navigation notifications, and unsubscribes
//! when dropped. Every notification counts as an update even when the path
//! is unchanged; consumers re-render on each one.

use std::cell::RefCell;
use std::rc::Rc;

use crate::location::{Listener, LocationError, SharedLocation, Subscription};

#[cfg(test)]
#[path = "observer_test.rs"]
mod observer_test;

#[derive(Debug)]
struct ObservedPath {
    path: String,
    updates: u64,
}

/// Subscription that tracks the location path.
pub struct PathObserver {
    state: Rc<RefCell<ObservedPath>>,
    location: SharedLocation,
    _subscription: Subscription,
}

impl PathObserver {
    /// Read the current path and subscribe to navigation notifications.
    ///
    /// `on_change` receives the freshly read path after every notification.
    ///
    /// # Errors
    ///
    /// Returns the provider's error if the listener cannot be registered.
    pub fn mount(location: SharedLocation, on_change: impl Fn(&str) + 'static) -> Result<Self, LocationError> {
        let state = Rc::new(RefCell::new(ObservedPath { path: location.path(), updates: 0 }));

        // Weak handles: the provider owns the listener, the listener must not own the provider.
        let weak_state = Rc::downgrade(&state);
        let weak_location = Rc::downgrade(&location);
        let listener: Listener = Rc::new(move || {
            let (Some(state), Some(location)) = (weak_state.upgrade(), weak_location.upgrade()) else {
                return;
            };
            let path = location.path();
            {
                let mut observed = state.borrow_mut();
                observed.path.clone_from(&path);
                observed.updates += 1;
            }
            on_change(&path);
        });

        let subscription = location.subscribe(listener)?;
        Ok(Self { state, location, _subscription: subscription })
    }

    /// Path as of the most recent notification (or mount).
    #[must_use]
    pub fn path(&self) -> String {
        self.state.borrow().path.clone()
    }

    /// Provider this observer is mounted on.
    #[must_use]
    pub fn location(&self) -> &SharedLocation {
        &self.location
    }

    /// Number of notifications received since mount.
    #[must_use]
    pub fn updates(&self) -> u64 {
        self.state.borrow().updates
    }
}
