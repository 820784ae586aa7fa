//! Item Endpoints
//!
//! Listing, search, submission and moderation.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::ApiError;
use crate::models::{DiagUsers, Item, ItemKind};

use super::{get_json, post_empty, post_form};

/// Characters `encodeURIComponent` leaves alone
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

// ========================
// Listing
// ========================

pub async fn list_pending(token: &str) -> Result<Vec<Item>, ApiError> {
    get_json("/items/pending", Some(token)).await
}

pub async fn list_approved() -> Result<Vec<Item>, ApiError> {
    get_json("/items/approved", None).await
}

pub async fn list_my_items(token: &str) -> Result<Vec<Item>, ApiError> {
    get_json("/items/my-items", Some(token)).await
}

/// Distinct submitters and item total, for the submissions debug panel
pub async fn diag_users() -> Result<DiagUsers, ApiError> {
    get_json("/items/diag/users", None).await
}

// ========================
// Search
// ========================

/// Search filters. Blank fields are left out of the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub keyword: String,
    pub category: String,
    pub location: String,
    /// YYYY-MM-DD
    pub date: String,
}

impl SearchQuery {
    #[cfg(test)]
    pub fn keyword(keyword: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
            ..Default::default()
        }
    }

    fn params(&self) -> [(&'static str, &str); 4] {
        [
            ("keyword", self.keyword.trim()),
            ("category", self.category.trim()),
            ("location", self.location.trim()),
            ("date", self.date.trim()),
        ]
    }

    /// Nothing to search for: show the full approved list instead
    pub fn is_empty(&self) -> bool {
        self.params().iter().all(|(_, v)| v.is_empty())
    }

    pub fn to_query_string(&self) -> String {
        self.params()
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, v)| format!("{}={}", k, utf8_percent_encode(v, COMPONENT)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

pub async fn search(query: &SearchQuery) -> Result<Vec<Item>, ApiError> {
    get_json(&format!("/items/search?{}", query.to_query_string()), None).await
}

// ========================
// Submission
// ========================

/// Report form contents
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub date: String,
    pub kind: ItemKind,
}

impl ReportDraft {
    /// Multipart text fields, in the order the backend declares them
    pub fn fields(&self) -> [(&'static str, &str); 6] {
        [
            ("title", self.title.as_str()),
            ("description", self.description.as_str()),
            ("category", self.category.as_str()),
            ("location", self.location.as_str()),
            ("date", self.date.as_str()),
            ("type", self.kind.as_str()),
        ]
    }
}

pub async fn submit_report(token: &str, draft: &ReportDraft, file: Option<web_sys::File>) -> Result<(), ApiError> {
    let form = web_sys::FormData::new().map_err(|e| ApiError::Build(format!("{:?}", e)))?;
    for (name, value) in draft.fields() {
        form.append_with_str(name, value)
            .map_err(|e| ApiError::Build(format!("{:?}", e)))?;
    }
    if let Some(file) = file {
        form.append_with_blob_and_filename("file", &file, &file.name())
            .map_err(|e| ApiError::Build(format!("{:?}", e)))?;
    }
    post_form("/items/submit", Some(token), form).await.map(|_| ())
}

// ========================
// Moderation
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationAction {
    Approve,
    Reject,
}

impl ModerationAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModerationAction::Approve => "approve",
            ModerationAction::Reject => "reject",
        }
    }

    pub fn past_tense(&self) -> &'static str {
        match self {
            ModerationAction::Approve => "approved",
            ModerationAction::Reject => "rejected",
        }
    }

    pub fn path(&self, item_id: &str) -> String {
        format!("/items/{}/{}", self.as_str(), utf8_percent_encode(item_id, COMPONENT))
    }
}

pub async fn moderate(token: &str, item_id: &str, action: ModerationAction) -> Result<(), ApiError> {
    post_empty(&action.path(item_id), Some(token)).await
}
