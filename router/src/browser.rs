//! Location provider backed by `window.location` and `window.history`.
//!
//! Notifications travel over the window's `popstate` event: native
//! back/forward navigation fires it, and `announce` dispatches a synthetic
//! one because `history.pushState` does not.

use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Event, Window};

use crate::location::{Listener, LocationError, LocationProvider, Subscription};

const NAVIGATION_EVENT: &str = "popstate";

/// Browser location provider for the current window.
#[derive(Clone, Debug)]
pub struct BrowserLocation {
    window: Window,
}

impl BrowserLocation {
    /// Bind to the global `window`.
    ///
    /// # Errors
    ///
    /// Returns [`LocationError::NoWindow`] outside a browser main thread.
    pub fn new() -> Result<Self, LocationError> {
        web_sys::window()
            .map(|window| Self { window })
            .ok_or(LocationError::NoWindow)
    }
}

fn js_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

impl LocationProvider for BrowserLocation {
    fn path(&self) -> String {
        match self.window.location().pathname() {
            Ok(path) => path,
            Err(err) => {
                log::warn!("reading location.pathname failed: {}", js_message(&err));
                String::new()
            }
        }
    }

    fn push(&self, path: &str) -> Result<(), LocationError> {
        let history = self
            .window
            .history()
            .map_err(|err| LocationError::History(js_message(&err)))?;
        history
            .push_state_with_url(&JsValue::NULL, "", Some(path))
            .map_err(|err| LocationError::History(js_message(&err)))
    }

    fn announce(&self) -> Result<(), LocationError> {
        let event = Event::new(NAVIGATION_EVENT).map_err(|err| LocationError::Event(js_message(&err)))?;
        self.window
            .dispatch_event(&event)
            .map(|_delivered| ())
            .map_err(|err| LocationError::Event(js_message(&err)))
    }

    fn subscribe(&self, listener: Listener) -> Result<Subscription, LocationError> {
        let callback = Closure::wrap(Box::new(move |_ev: Event| listener()) as Box<dyn FnMut(Event)>);
        self.window
            .add_event_listener_with_callback(NAVIGATION_EVENT, callback.as_ref().unchecked_ref())
            .map_err(|err| LocationError::Event(js_message(&err)))?;

        let window = self.window.clone();
        Ok(Subscription::new(move || {
            if let Err(err) =
                window.remove_event_listener_with_callback(NAVIGATION_EVENT, callback.as_ref().unchecked_ref())
            {
                log::warn!("removing {NAVIGATION_EVENT} listener failed: {}", js_message(&err));
            }
            drop(callback);
        }))
    }
}
