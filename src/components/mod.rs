//! UI Components
//!
//! One component per screen, plus the pieces of the browsing screen.

mod loading_view;
mod fetch_error_view;
mod list_item_row;
mod list_column;
mod browse_view;
mod review_view;

pub use loading_view::LoadingView;
pub use fetch_error_view::FetchErrorView;
pub use list_item_row::ListItemRow;
pub use list_column::ListColumn;
pub use browse_view::BrowseView;
pub use review_view::ReviewView;
