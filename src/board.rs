//! List Board State
//!
//! Fetch lifecycle, selection and screen transitions of the list creation page.
//! Pure state, no DOM access, so everything here is unit-testable on the host.

use reactive_stores::Store;

use crate::error::{CreateError, FetchError};
use crate::models::{ItemId, ListItem};

/// Number of items that must be selected before a new list can be created
pub const REQUIRED_SELECTION: usize = 2;

/// Fetch lifecycle of the item set
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    Failed(FetchError),
}

/// Which screen is active
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Browsing,
    Reviewing,
}

/// Identifies one `begin_load` call; only the latest ticket may finish a load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Items picked by the user, in pick order, unique by id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection(Vec<ListItem>);

impl Selection {
    pub fn contains(&self, id: &ItemId) -> bool {
        self.0.iter().any(|i| &i.id == id)
    }

    pub fn items(&self) -> &[ListItem] {
        &self.0
    }

    /// Add the item, or remove it if an item with the same id is already selected
    pub fn toggle(&mut self, item: &ListItem) {
        if self.contains(&item.id) {
            self.0.retain(|i| i.id != item.id);
        } else {
            self.0.push(item.clone());
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Drop entries missing from `items` and refresh the rest
    fn refresh(&mut self, items: &[ListItem]) {
        self.0 = self
            .0
            .iter()
            .filter_map(|picked| items.iter().find(|i| i.id == picked.id).cloned())
            .collect();
    }
}

/// Whole page state with field-level reactivity
#[derive(Debug, Clone, Default, Store)]
pub struct ListBoard {
    pub load: LoadStatus,
    /// Items from the last successful fetch, in response order
    pub items: Vec<ListItem>,
    pub selection: Selection,
    pub view: ViewState,
    latest_ticket: LoadTicket,
}

impl ListBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a fetch as in flight and hand out its ticket
    pub fn begin_load(&mut self) -> LoadTicket {
        self.latest_ticket = LoadTicket(self.latest_ticket.0 + 1);
        self.load = LoadStatus::Loading;
        self.latest_ticket
    }

    /// Apply a fetch result. Returns `false` if a newer load was started since.
    ///
    /// On failure the previous item set is kept.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<Vec<ListItem>, FetchError>) -> bool {
        if ticket != self.latest_ticket {
            return false;
        }
        match result {
            Ok(items) => {
                self.selection.refresh(&items);
                self.items = items;
                self.load = LoadStatus::Ready;
            }
            Err(err) => {
                self.load = LoadStatus::Failed(err);
            }
        }
        true
    }

    pub fn toggle_select(&mut self, item: &ListItem) {
        self.selection.toggle(item);
    }

    /// Switch to the review screen if exactly two items are selected
    pub fn confirm_create(&mut self) -> Result<(), CreateError> {
        let selected = self.selection.items().len();
        if selected != REQUIRED_SELECTION {
            return Err(CreateError::WrongSelectionCount { selected });
        }
        self.view = ViewState::Reviewing;
        Ok(())
    }

    pub fn cancel_review(&mut self) {
        self.view = ViewState::Browsing;
        self.selection.clear();
    }

    /// Leave the review screen. The selection stays as it was.
    pub fn confirm_update(&mut self) {
        self.view = ViewState::Browsing;
    }

    /// Reassign `item` from list `from` to list `to`.
    /// Returns `false` (and changes nothing) if the item is not in `from`.
    pub fn move_item(&mut self, item: &ListItem, from: i64, to: i64) -> bool {
        match self
            .items
            .iter_mut()
            .find(|i| i.id == item.id && i.list_number == Some(from))
        {
            Some(found) => {
                found.list_number = Some(to);
                self.selection.refresh(&self.items);
                true
            }
            None => false,
        }
    }
}

/// Filter `items` down to one source list, keeping order.
/// Items without a usable `list_number` land in no column.
pub fn column_items(items: &[ListItem], list_number: i64) -> Vec<ListItem> {
    items
        .iter()
        .filter(|i| i.list_number == Some(list_number))
        .cloned()
        .collect()
}
