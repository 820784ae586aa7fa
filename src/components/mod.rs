//! UI Components
//!
//! Reusable Leptos components.

mod detail_modal;
mod diag_panel;
mod item_card;
mod item_grid;
mod report_form;
mod search_bar;
mod status_line;
mod top_bar;
mod type_selector;
mod view_tabs;

pub use detail_modal::DetailModal;
pub use diag_panel::DiagPanelView;
pub use item_card::{DisplayCard, ModerationCard};
pub use item_grid::ItemGrid;
pub use report_form::ReportForm;
pub use search_bar::SearchBar;
pub use status_line::{StatusLine, StatusMessage};
pub use top_bar::TopBar;
pub use view_tabs::ViewTabs;
