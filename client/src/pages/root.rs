//! Landing view rendered at `/`.

use leptos::prelude::*;

use crate::app::ABOUT_PATH;
use crate::routing::use_router;

#[component]
pub fn RootView() -> impl IntoView {
    let router = use_router();

    view! {
        <h1>"root"</h1>
        <button on:click=move |_| router.push(ABOUT_PATH)>"about"</button>
    }
}
