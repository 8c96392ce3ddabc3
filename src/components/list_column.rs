//! List Column Component
//!
//! Renders the items of one source list.

use leptos::prelude::*;

use crate::board::{column_items, ListBoardStoreFields};
use crate::components::ListItemRow;
use crate::store::use_app_store;

#[component]
pub fn ListColumn(
    #[prop(into)] title: String,
    /// Which `list_number` this column shows
    list_number: i64,
) -> impl IntoView {
    let store = use_app_store();

    let column = move || column_items(&store.items().read(), list_number);

    view! {
        <div class="list-column">
            <h3>{title}</h3>
            <For
                each=column
                key=|item| item.id.clone()
                children=move |item| view! { <ListItemRow item=item /> }
            />
        </div>
    }
}
