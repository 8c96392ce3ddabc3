//! Review View
//!
//! Lists the selected items with Cancel / Update actions.

use leptos::prelude::*;

use crate::board::ListBoardStoreFields;
use crate::store::{store_cancel_review, store_confirm_update, use_app_store};

#[component]
pub fn ReviewView() -> impl IntoView {
    let store = use_app_store();

    let selected = move || store.selection().read().items().to_vec();

    view! {
        <div class="review-view">
            <h1>"Selected Items"</h1>
            <div class="selected-items-container">
                <For
                    each=selected
                    key=|item| item.id.clone()
                    children=|item| view! {
                        <div class="selected-item">
                            <h3>{item.name}</h3>
                            <p>{item.description}</p>
                        </div>
                    }
                />
            </div>
            <div class="review-actions">
                <button class="cancel-btn" on:click=move |_| store_cancel_review(&store)>"Cancel"</button>
                // Only returns to browsing; nothing is saved
                <button class="update-btn" on:click=move |_| store_confirm_update(&store)>"Update"</button>
            </div>
        </div>
    }
}
