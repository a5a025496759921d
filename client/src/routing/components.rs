//! Routing components.

use leptos::prelude::*;
use router::{RouteTable, SharedLocation};

use super::context::{default_location, provide_router, use_path};

#[cfg(test)]
#[path = "components_test.rs"]
mod components_test;

/// Provides a location provider to `children`.
///
/// Uses `location` when given, otherwise the build's default provider.
#[component]
pub fn LocationScope(#[prop(optional)] location: Option<SharedLocation>, children: Children) -> impl IntoView {
    provide_router(location.unwrap_or_else(default_location));
    children()
}

/// Renders every declared view whose path equals the current path.
///
/// No match renders nothing; duplicate paths render all of their views in
/// declaration order.
#[component]
pub fn Router(routes: RouteTable<ViewFn>) -> impl IntoView {
    for path in routes.duplicate_paths() {
        log::debug!("route {path:?} is declared more than once; every match renders");
    }

    let path = use_path();
    move || path.with(|current| routes.matching(current).map(ViewFn::run).collect_view())
}
