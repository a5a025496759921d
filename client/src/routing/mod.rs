//! Leptos bindings for client-side routing.
//!
//! ARCHITECTURE
//! ============
//! `context` owns the shared location provider and exposes the hooks
//! (`use_path`, `use_router`). `components` renders a route table against
//! the observed path.

pub mod components;
pub mod context;

pub use components::{LocationScope, Router};
pub use context::{RouterContext, RouterHandle, default_location, provide_router, use_path, use_router};
