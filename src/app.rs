//! List Creation App
//!
//! Root component: owns the store, triggers fetches and picks the screen.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::board::{ListBoard, ListBoardStoreFields, LoadStatus, ViewState};
use crate::components::{BrowseView, FetchErrorView, LoadingView, ReviewView};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::store_load_lists;

/// The screen currently on display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Loading,
    Error,
    Browsing,
    Reviewing,
}

fn page_for(load: &LoadStatus, view: ViewState) -> Page {
    match (load, view) {
        (LoadStatus::Loading, _) => Page::Loading,
        (LoadStatus::Failed(_), _) => Page::Error,
        (LoadStatus::Ready, ViewState::Browsing) => Page::Browsing,
        (LoadStatus::Ready, ViewState::Reviewing) => Page::Reviewing,
    }
}

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(ListBoard::new());
    provide_context(store);

    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let ctx = AppContext::new(set_reload_trigger, AppConfig::from_build_env());
    provide_context(ctx);

    // Fetch on mount and on every retry
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        let url = ctx.lists_url();
        web_sys::console::log_1(&format!("[APP] Loading lists from {}, trigger={}", url, trigger).into());
        store_load_lists(store, url);
    });

    // Only re-render the page when the screen actually changes, not on every toggle
    let page = Memo::new(move |_| page_for(&store.load().read(), store.view().get()));

    view! {
        <div class="app-container">
            {move || match page.get() {
                Page::Loading => view! { <LoadingView /> }.into_any(),
                Page::Error => view! { <FetchErrorView /> }.into_any(),
                Page::Browsing => view! { <BrowseView /> }.into_any(),
                Page::Reviewing => view! { <ReviewView /> }.into_any(),
            }}
        </div>
    }
}
