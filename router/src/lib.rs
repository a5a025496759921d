//! Client-side path routing for single-page UIs.
//!
//! The crate tracks the browser's location path, lets views change it without
//! a page reload, and selects which declared views to render for the current
//! path. It is framework-agnostic; the `client` crate binds it to Leptos.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`location`] | [`LocationProvider`] capability, [`Subscription`] handles, in-memory history |
//! | [`browser`] | `window.location` / `window.history` provider (feature `browser`) |
//! | [`observer`] | [`PathObserver`]: the current path as an observed value |
//! | [`navigator`] | [`Navigator`]: push a path and announce the change |
//! | [`matcher`] | [`RouteTable`]: exact-path route declarations and matching |

#[cfg(feature = "browser")]
pub mod browser;
pub mod location;
pub mod matcher;
pub mod navigator;
pub mod observer;

#[cfg(feature = "browser")]
pub use browser::BrowserLocation;
pub use location::{Listener, LocationError, LocationProvider, MemoryLocation, SharedLocation, Subscription};
pub use matcher::{Route, RouteTable};
pub use navigator::Navigator;
pub use observer::PathObserver;
