//! Listing State
//!
//! What a card grid currently shows, and how a fetch result turns into it.

use crate::error::ApiError;
use crate::models::Item;

#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    Loading(&'static str),
    Empty(&'static str),
    /// One card per item, in server order
    Cards(Vec<Item>),
}

impl Default for Listing {
    fn default() -> Self {
        Listing::Loading("")
    }
}

impl Listing {
    pub fn from_items(items: Vec<Item>, empty: &'static str) -> Self {
        if items.is_empty() {
            Listing::Empty(empty)
        } else {
            Listing::Cards(items)
        }
    }

    pub fn card_count(&self) -> usize {
        match self {
            Listing::Cards(items) => items.len(),
            _ => 0,
        }
    }
}

/// User-facing messages of one loader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingText {
    /// None keeps the current grid while the request runs
    pub loading: Option<&'static str>,
    pub empty: &'static str,
    pub failure: &'static str,
}

impl ListingText {
    pub fn placeholder(&self) -> Option<Listing> {
        self.loading.map(Listing::Loading)
    }
}

pub const PENDING_TEXT: ListingText = ListingText {
    loading: Some("Scanning for reports..."),
    empty: "All caught up! No reports pending.",
    failure: "Failed to load queue",
};

pub const VERIFIED_TEXT: ListingText = ListingText {
    loading: Some("Loading verified items..."),
    empty: "No approved items to show.",
    failure: "Failed to load items",
};

pub const FEED_TEXT: ListingText = ListingText {
    loading: Some("Syncing feed..."),
    empty: "No items found. Check back later!",
    failure: "Failed to load feed",
};

pub const SEARCH_TEXT: ListingText = ListingText {
    loading: None,
    empty: "No results found.",
    failure: "Search failed",
};

pub const MY_ITEMS_TEXT: ListingText = ListingText {
    loading: Some("Fetching your reports..."),
    empty: "You haven't reported any items yet.",
    failure: "Failed to connect to server",
};

pub const USERS_PLACEHOLDER: &str = "User management coming soon.";

/// Result of a finished fetch
#[derive(Debug, Clone, PartialEq)]
pub enum Settled {
    Show(Listing),
    /// Token rejected: end the session
    Expired,
    /// Keep the placeholder, show this error
    Failed(String),
}

pub fn settle(result: Result<Vec<Item>, ApiError>, text: &ListingText) -> Settled {
    match result {
        Ok(items) => Settled::Show(Listing::from_items(items, text.empty)),
        Err(ApiError::Unauthorized(_)) => Settled::Expired,
        Err(err) => {
            log::error!("{}: {}", text.failure, err);
            Settled::Failed(text.failure.to_string())
        }
    }
}
