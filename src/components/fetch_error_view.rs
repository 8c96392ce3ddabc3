//! Fetch Error View
//!
//! Generic failure screen with a retry button.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn FetchErrorView() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="fetch-error">
            <p>"Something went wrong. Please try again."</p>
            <button class="retry-btn" on:click=move |_| ctx.reload()>
                "Try Again"
            </button>
        </div>
    }
}
