//! Dashboard State Stores
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::ApiError;
use crate::listing::Listing;
use crate::models::{DiagUsers, Item};
use crate::views::{AdminView, UserView};

/// Admin dashboard state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AdminState {
    pub active_view: AdminView,
    /// View whose title and subtitle are shown
    pub heading: AdminView,
    /// Shared grid of the pending and approved tabs
    pub listing: Listing,
    /// Size of the last pending fetch, for the badge
    pub pending_count: Option<usize>,
}

/// User dashboard state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct UserState {
    pub active_view: UserView,
    pub browse: Listing,
    pub submissions: Listing,
    pub diag: DiagPanel,
    /// Item shown in the detail modal
    pub detail: Option<crate::models::Item>,
}

pub type AdminStore = Store<AdminState>;
pub type UserStore = Store<UserState>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiagTone {
    #[default]
    Plain,
    Good,
    Bad,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagLine {
    pub text: String,
    pub tone: DiagTone,
}

/// Debug panel of the submissions view, for diagnosing submitter mismatches
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DiagPanel {
    pub lines: Vec<DiagLine>,
    /// Trailing "in progress" note, cleared when the load finishes
    pub status: Option<String>,
}

impl DiagPanel {
    pub fn start(username: &str, has_token: bool) -> Self {
        let mut panel = Self::default();
        panel.push(format!("User: {}", username), DiagTone::Plain);
        panel.push(format!("Token: {}", if has_token { "Valid" } else { "MISSING" }), DiagTone::Plain);
        panel.status = Some("Fetching data...".to_string());
        panel
    }

    pub fn push(&mut self, text: impl Into<String>, tone: DiagTone) {
        self.lines.push(DiagLine { text: text.into(), tone });
    }

    pub fn record_users(&mut self, diag: &DiagUsers) {
        self.push(format!("Global Users in DB: [{}]", diag.submitters_label()), DiagTone::Plain);
        self.push(format!("Total Items in DB: {}", diag.total_items_in_db), DiagTone::Plain);
        self.status = Some("Fetching your specific items...".to_string());
    }

    pub fn finish(&mut self, text: impl Into<String>, tone: DiagTone) {
        self.push(text, tone);
        self.status = None;
    }

    /// Final line for the own-items fetch
    pub fn record_fetch(&mut self, result: &Result<Vec<Item>, ApiError>) {
        match result {
            Ok(items) => self.finish(format!("Success: Received {} items", items.len()), DiagTone::Good),
            Err(err) => match err.status() {
                Some(status) => self.finish(format!("Fetch Error: {}", status), DiagTone::Bad),
                None => self.finish(format!("Network/Script Error: {}", err), DiagTone::Bad),
            },
        }
    }
}

/// Replace the listing of the admin grid
pub fn admin_set_listing(store: &AdminStore, listing: Listing) {
    *store.listing().write() = listing;
}

pub fn user_set_browse(store: &UserStore, listing: Listing) {
    *store.browse().write() = listing;
}

pub fn user_set_submissions(store: &UserStore, listing: Listing) {
    *store.submissions().write() = listing;
}
