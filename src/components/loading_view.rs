//! Loading View
//!
//! Placeholder while the lists are in flight.

use leptos::prelude::*;

/// Shown while the lists are being fetched
#[component]
pub fn LoadingView() -> impl IntoView {
    view! {
        <div class="loading">"Loading..."</div>
    }
}
