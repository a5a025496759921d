//! Programmatic navigation.
//!
//! Every programmatic path change goes through [`Navigator::push`], which
//! pushes the history entry and then announces it. Pushing alone would leave
//! observers stale.

use crate::location::{LocationError, SharedLocation};

#[cfg(test)]
#[path = "navigator_test.rs"]
mod navigator_test;

/// Changes the location path and announces the change to observers.
#[derive(Clone)]
pub struct Navigator {
    location: SharedLocation,
}

impl Navigator {
    pub fn new(location: SharedLocation) -> Self {
        Self { location }
    }

    /// Navigate to `path` without reloading the page.
    ///
    /// The path is not validated. Pushing the current path still announces
    /// a change. Backend failures are logged and otherwise ignored.
    pub fn push(&self, path: &str) {
        if let Err(err) = self.try_push(path) {
            log::warn!("navigation to {path:?} failed: {err}");
        }
    }

    /// Like [`push`](Self::push), but reports backend failures.
    ///
    /// # Errors
    ///
    /// Returns the provider's error if the history entry could not be pushed
    /// or the change could not be announced.
    pub fn try_push(&self, path: &str) -> Result<(), LocationError> {
        log::debug!("navigate: {path}");
        self.location.push(path)?;
        self.location.announce()
    }
}
