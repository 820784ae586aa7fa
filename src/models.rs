//! Frontend Models
//!
//! Data structures matching backend responses.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::config::config;

/// Lost or found. Anything else the backend sends is kept as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Lost,
    Found,
    #[default]
    #[serde(other)]
    Other,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Lost => "lost",
            ItemKind::Found => "found",
            ItemKind::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Approved,
    Rejected,
    /// Also used for unknown statuses
    #[default]
    #[serde(other)]
    Pending,
}

impl ItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Pending => "pending",
            ItemStatus::Approved => "approved",
            ItemStatus::Rejected => "rejected",
        }
    }
}

/// `null` decodes like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Reported item (matches backend). Missing and null fields both fall back
/// to defaults so one sparse record cannot fail a whole listing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    /// ISO-8601 timestamp or plain date
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: ItemKind,
    #[serde(deserialize_with = "null_as_default")]
    pub status: ItemStatus,
    #[serde(deserialize_with = "null_as_default")]
    pub submitted_by: String,
    pub image_path: Option<String>,
}

impl Item {
    pub fn title_or_default(&self) -> &str {
        self.title_or("Untitled Report")
    }

    pub fn title_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        non_empty_or(&self.title, placeholder)
    }

    pub fn category_or_default(&self) -> &str {
        non_empty_or(&self.category, "Uncategorized")
    }

    pub fn description_or_default(&self) -> &str {
        non_empty_or(&self.description, "No description provided.")
    }

    pub fn location_or_default(&self) -> &str {
        non_empty_or(&self.location, "Unknown Location")
    }

    pub fn submitter_or_default(&self) -> &str {
        non_empty_or(&self.submitted_by, "Unknown")
    }

    /// Photo URL, if the report has one
    pub fn image_url(&self) -> Option<String> {
        self.image_path
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(|p| config().url(&format!("/images/{}", p)))
    }
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() { fallback } else { value }
}

/// Date layouts used across the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `May 1, 2024`
    Short,
    /// `5/1/2024`
    Numeric,
    /// `Wednesday, May 1, 2024`
    Long,
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    // Timestamps and plain dates both start with YYYY-MM-DD
    let day = raw.trim().get(..10)?;
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

/// Render an item date. Empty dates give `placeholder`; unparseable ones are shown as-is.
pub fn format_date(raw: &str, style: DateStyle, placeholder: &str) -> String {
    if raw.trim().is_empty() {
        return placeholder.to_string();
    }
    let Some(date) = parse_date(raw) else {
        return raw.to_string();
    };
    let pattern = match style {
        DateStyle::Short => "%b %-d, %Y",
        DateStyle::Numeric => "%-m/%-d/%Y",
        DateStyle::Long => "%A, %B %-d, %Y",
    };
    date.format(pattern).to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    /// Unknown roles from the server are treated as plain users
    #[default]
    #[serde(other)]
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "admin" => Role::Admin,
            _ => Role::User,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
    /// Sent because the backend requires it; the response role is what counts
    pub client_role: &'a str,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub role: Role,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Me {
    pub username: String,
    pub role: Role,
}

/// `/items/diag/users` payload
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct DiagUsers {
    pub submitted_by_values: Option<Vec<String>>,
    pub total_items_in_db: u64,
}

impl DiagUsers {
    pub fn submitters_label(&self) -> String {
        match &self.submitted_by_values {
            Some(values) => values.join(", "),
            None => "Error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_from_backend_json() {
        let json = r#"{
            "_id": "665f1c", "id": "665f1c",
            "title": "Blue umbrella", "description": "Left in hall B",
            "category": "Accessories", "location": "Hall B",
            "date": "2024-05-01T00:00:00", "type": "lost",
            "status": "approved", "submitted_by": "alice",
            "image_path": null, "created_at": "2024-05-02T10:00:00"
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, "665f1c");
        assert_eq!(item.kind, ItemKind::Lost);
        assert_eq!(item.status, ItemStatus::Approved);
        assert_eq!(item.image_url(), None);
    }

    #[test]
    fn test_item_missing_fields_use_placeholders() {
        let item: Item = serde_json::from_str(r#"{"id": "1", "type": "misc"}"#).unwrap();
        assert_eq!(item.kind, ItemKind::Other);
        assert_eq!(item.status, ItemStatus::Pending);
        assert_eq!(item.title_or_default(), "Untitled Report");
        assert_eq!(item.category_or_default(), "Uncategorized");
        assert_eq!(item.description_or_default(), "No description provided.");
        assert_eq!(item.location_or_default(), "Unknown Location");
        assert_eq!(item.submitter_or_default(), "Unknown");
    }

    #[test]
    fn test_null_fields_do_not_fail_the_listing() {
        let json = r#"[
            {"id": "1", "title": "Keys", "type": "found", "status": "approved"},
            {"id": "2", "title": null, "category": null, "description": null,
             "location": null, "date": null, "type": null, "status": null,
             "submitted_by": null, "image_path": null}
        ]"#;
        let items: Vec<Item> = serde_json::from_str(json).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "Keys");

        let sparse = &items[1];
        assert_eq!(sparse.title_or_default(), "Untitled Report");
        assert_eq!(sparse.title_or("No Title"), "No Title");
        assert_eq!(sparse.category_or_default(), "Uncategorized");
        assert_eq!(sparse.submitter_or_default(), "Unknown");
        assert_eq!(sparse.kind, ItemKind::Other);
        assert_eq!(sparse.status, ItemStatus::Pending);
        assert_eq!(format_date(&sparse.date, DateStyle::Short, "No date"), "No date");
    }

    #[test]
    fn test_unknown_status_is_pending() {
        let item: Item = serde_json::from_str(r#"{"id": "1", "status": "archived"}"#).unwrap();
        assert_eq!(item.status, ItemStatus::Pending);
    }

    #[test]
    fn test_image_url() {
        let item = Item {
            image_path: Some("1714550000.0_wallet.jpg".into()),
            ..Default::default()
        };
        assert_eq!(item.image_url(), Some("/images/1714550000.0_wallet.jpg".to_string()));
    }

    #[test]
    fn test_format_date_styles() {
        let raw = "2024-05-01T00:00:00";
        assert_eq!(format_date(raw, DateStyle::Short, "No date"), "May 1, 2024");
        assert_eq!(format_date(raw, DateStyle::Numeric, "N/A"), "5/1/2024");
        assert_eq!(format_date(raw, DateStyle::Long, ""), "Wednesday, May 1, 2024");
        assert_eq!(format_date("2024-12-25", DateStyle::Short, ""), "Dec 25, 2024");
        assert_eq!(format_date("2024-05-01T08:30:00.123+00:00", DateStyle::Numeric, ""), "5/1/2024");
    }

    #[test]
    fn test_format_date_fallbacks() {
        assert_eq!(format_date("", DateStyle::Short, "No date"), "No date");
        assert_eq!(format_date("yesterday", DateStyle::Short, "No date"), "yesterday");
    }

    #[test]
    fn test_role_from_server() {
        let resp: LoginResponse = serde_json::from_str(
            r#"{"access_token":"t","role":"admin","username":"root"}"#,
        )
        .unwrap();
        assert_eq!(resp.role, Role::Admin);

        let resp: LoginResponse = serde_json::from_str(
            r#"{"access_token":"t","role":"moderator","username":"m"}"#,
        )
        .unwrap();
        assert_eq!(resp.role, Role::User);
        assert_eq!(Role::parse("admin"), Role::Admin);
        assert_eq!(Role::parse(""), Role::User);
    }

    #[test]
    fn test_login_request_shape() {
        let req = LoginRequest { username: "bob", password: "pw", client_role: "admin" };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["client_role"], "admin");
        assert_eq!(json["username"], "bob");
    }

    #[test]
    fn test_diag_users() {
        let diag: DiagUsers = serde_json::from_str(
            r#"{"submitted_by_values":["alice","bob "],"total_items_in_db":7}"#,
        )
        .unwrap();
        assert_eq!(diag.submitters_label(), "alice, bob ");
        assert_eq!(diag.total_items_in_db, 7);

        let broken: DiagUsers = serde_json::from_str(r#"{"error":"db down"}"#).unwrap();
        assert_eq!(broken.submitters_label(), "Error");
        assert_eq!(broken.total_items_in_db, 0);
    }
}
