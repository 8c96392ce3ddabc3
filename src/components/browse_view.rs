//! Browse View
//!
//! Two side-by-side columns and the "Create a new list" action.

use leptos::prelude::*;

use crate::board::ListBoardStoreFields;
use crate::components::ListColumn;
use crate::store::{store_confirm_create, use_app_store};

#[component]
pub fn BrowseView() -> impl IntoView {
    let store = use_app_store();

    let on_create = move |_| {
        if let Err(err) = store_confirm_create(&store) {
            web_sys::console::warn_1(&format!("[APP] Create rejected: {:?}", err).into());
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.alert_with_message(&err.to_string()) {
                    web_sys::console::error_1(&format!("[APP] Alert failed: {:?}", e).into());
                }
            }
        }
    };

    let has_items = move || !store.items().read().is_empty();

    view! {
        <div class="browse-view">
            <h1>"List Creation"</h1>
            <button class="create-btn" on:click=on_create>"Create a new list"</button>
            <div class="lists-container">
                <Show
                    when=has_items
                    fallback=|| view! { <p class="empty-message">"No lists available"</p> }
                >
                    <div class="list-columns">
                        <ListColumn title="List 1" list_number=1 />
                        <ListColumn title="List 2" list_number=2 />
                    </div>
                </Show>
            </div>
        </div>
    }
}
