//! Router context and hooks.
//!
//! SYSTEM CONTEXT
//! ==============
//! A single [`RouterContext`] per app holds the location provider. Each
//! `use_path` call mounts its own `PathObserver`, tied to the calling
//! component's reactive owner: it subscribes on mount and is dropped (and
//! unsubscribed) when that owner is cleaned up.
//!
//! The provider is `Rc`-based and single-threaded, so it lives in local
//! arena storage and the context only carries a `Copy` handle to it.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use router::{MemoryLocation, Navigator, PathObserver, SharedLocation};

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

/// Shared location provider for the component tree.
#[derive(Clone, Copy)]
pub struct RouterContext {
    location: StoredValue<SharedLocation, LocalStorage>,
}

impl RouterContext {
    pub fn new(location: SharedLocation) -> Self {
        Self { location: StoredValue::new_local(location) }
    }

    pub fn location(&self) -> SharedLocation {
        self.location.get_value()
    }

    pub fn navigator(&self) -> Navigator {
        Navigator::new(self.location())
    }
}

/// Navigation handle returned by [`use_router`].
#[derive(Clone, Copy)]
pub struct RouterHandle {
    context: RouterContext,
}

impl RouterHandle {
    /// Navigate to `path` without a page reload.
    pub fn push(&self, path: &str) {
        self.context.navigator().push(path);
    }
}

/// Location provider for the current build: the browser's under `csr`,
/// otherwise an in-memory history starting at `/`.
pub fn default_location() -> SharedLocation {
    #[cfg(feature = "csr")]
    {
        match router::BrowserLocation::new() {
            Ok(location) => return Rc::new(location),
            Err(err) => log::warn!("browser location unavailable, using in-memory history: {err}"),
        }
    }
    Rc::new(MemoryLocation::default())
}

/// Provide `location` to the current owner and its descendants.
pub fn provide_router(location: SharedLocation) -> RouterContext {
    let context = RouterContext::new(location);
    provide_context(context);
    context
}

thread_local! {
    static FALLBACK_LOCATION: RefCell<Option<SharedLocation>> = const { RefCell::new(None) };
}

/// One default provider per UI thread, so hooks used outside any
/// `RouterContext` still observe and navigate the same history.
fn fallback_location() -> SharedLocation {
    FALLBACK_LOCATION.with(|slot| Rc::clone(slot.borrow_mut().get_or_insert_with(default_location)))
}

fn use_router_context() -> RouterContext {
    use_context::<RouterContext>().unwrap_or_else(|| {
        log::debug!("no RouterContext in scope; providing the shared fallback location");
        provide_router(fallback_location())
    })
}

/// Current location path as a signal.
///
/// The signal is set on every navigation notification, including ones that
/// leave the path unchanged.
pub fn use_path() -> ReadSignal<String> {
    let location = use_router_context().location();
    let (path, set_path) = signal(location.path());

    match PathObserver::mount(location, move |current| set_path.set(current.to_owned())) {
        Ok(observer) => {
            let observer = StoredValue::new_local(observer);
            on_cleanup(move || observer.dispose());
        }
        Err(err) => log::warn!("path observer not mounted, path will not update: {err}"),
    }

    path
}

/// Navigation handle for the current router context.
pub fn use_router() -> RouterHandle {
    RouterHandle { context: use_router_context() }
}
