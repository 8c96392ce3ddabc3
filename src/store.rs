//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::board::ListBoard;
use crate::error::CreateError;
use crate::models::ListItem;

/// Type alias for the store
pub type AppStore = Store<ListBoard>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Start a fetch against `url`; the result lands in the store when it resolves
pub fn store_load_lists(store: AppStore, url: String) {
    let ticket = store.write().begin_load();

    spawn_local(async move {
        let result = crate::api::fetch_lists(&url).await;

        match &result {
            Ok(items) => web_sys::console::log_1(&format!("[APP] Loaded {} items", items.len()).into()),
            Err(e) => web_sys::console::error_1(&format!("[APP] Error fetching lists: {}", e).into()),
        }

        if !store.write().finish_load(ticket, result) {
            web_sys::console::warn_1(&"[APP] Discarded response of a superseded fetch".into());
        }
    });
}

/// Toggle an item in or out of the selection
pub fn store_toggle_select(store: &AppStore, item: &ListItem) {
    store.write().toggle_select(item);
}

/// Try to open the review screen
pub fn store_confirm_create(store: &AppStore) -> Result<(), CreateError> {
    store.write().confirm_create()
}

pub fn store_cancel_review(store: &AppStore) {
    store.write().cancel_review();
}

pub fn store_confirm_update(store: &AppStore) {
    store.write().confirm_update();
}
