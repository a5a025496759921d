//! About view rendered at `/about`.

use leptos::prelude::*;

use crate::app::ROOT_PATH;
use crate::routing::use_router;

#[component]
pub fn AboutView() -> impl IntoView {
    let router = use_router();

    view! {
        <h1>"about"</h1>
        <button on:click=move |_| router.push(ROOT_PATH)>"go main"</button>
    }
}
