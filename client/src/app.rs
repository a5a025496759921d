//! Root application component and route table.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use router::RouteTable;

use crate::pages::{about::AboutView, root::RootView};
use crate::routing::{LocationScope, Router};

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

pub const ROOT_PATH: &str = "/";
pub const ABOUT_PATH: &str = "/about";

/// Path-to-view declarations for the demo.
pub fn routes() -> RouteTable<ViewFn> {
    RouteTable::new()
        .route(ROOT_PATH, ViewFn::from(|| view! { <RootView/> }))
        .route(ABOUT_PATH, ViewFn::from(|| view! { <AboutView/> }))
}

/// Root application component.
///
/// Provides the location context and renders the view matching the current path.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="router demo"/>
        <LocationScope>
            <Router routes=routes()/>
        </LocationScope>
    }
}
