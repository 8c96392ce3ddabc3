//! List Item Row Component
//!
//! One selectable item inside a list column.

use leptos::prelude::*;

use crate::board::ListBoardStoreFields;
use crate::models::ListItem;
use crate::store::{store_toggle_select, use_app_store};

/// Checkbox + name + description
#[component]
pub fn ListItemRow(item: ListItem) -> impl IntoView {
    let store = use_app_store();

    let id = item.id.clone();
    let is_selected = move || store.selection().read().contains(&id);
    let toggle_target = item.clone();

    view! {
        <div class="list-item">
            <input
                type="checkbox"
                prop:checked=is_selected
                on:change=move |_| store_toggle_select(&store, &toggle_target)
            />
            <ul>
                <li><b>{item.name}</b></li>
                <li>{item.description}</li>
            </ul>
        </div>
    }
}
