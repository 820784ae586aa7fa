//! Item Card Components
//!
//! Moderation card (admin) and display card (user dashboard).

use leptos::prelude::*;

use crate::api::ModerationAction;
use crate::models::{format_date, DateStyle, Item, ItemKind};

/// Type badge of the moderation card; reports without a known type read "ITEM"
fn kind_badge(kind: ItemKind) -> String {
    match kind {
        ItemKind::Other => "ITEM".to_string(),
        known => known.as_str().to_uppercase(),
    }
}

/// Card with the full report, plus approve/reject buttons when `on_action` is set
#[component]
pub fn ModerationCard(
    item: Item,
    #[prop(default = None)] on_action: Option<Callback<(String, ModerationAction)>>,
) -> impl IntoView {
    let date = format_date(&item.date, DateStyle::Numeric, "N/A");
    let kind = item.kind.as_str();
    let badge = kind_badge(item.kind);
    let image = item.image_url();
    let id = item.id.clone();

    view! {
        <div class="item-card glass animate-slide">
            <div>
                <span class=format!("item-status {}", kind)>{badge}</span>
                <h3 class="item-title">{item.title_or("No Title").to_string()}</h3>
                <p class="item-description">{item.description_or_default().to_string()}</p>
            </div>

            {match image {
                Some(src) => view! {
                    <div class="admin-image-preview">
                        <img src=src alt="Item" />
                    </div>
                }.into_any(),
                None => view! {
                    <div class="admin-no-image">"No image uploaded"</div>
                }.into_any(),
            }}

            <div class="item-meta">
                <span>{item.category_or_default().to_string()}</span>
                <span>{item.location_or_default().to_string()}</span>
                <span>{date}</span>
                <span>"Submitted by " <strong>{item.submitter_or_default().to_string()}</strong></span>
            </div>

            {on_action.map(|on_action| {
                let approve_id = id.clone();
                let reject_id = id.clone();
                view! {
                    <div class="card-actions">
                        <button
                            class="btn btn-primary approve-btn"
                            on:click=move |_| on_action.run((approve_id.clone(), ModerationAction::Approve))
                        >
                            "Approve"
                        </button>
                        <button
                            class="btn btn-outline reject-btn"
                            on:click=move |_| on_action.run((reject_id.clone(), ModerationAction::Reject))
                        >
                            "Reject"
                        </button>
                    </div>
                }
            })}
        </div>
    }
}

/// Compact card that opens the detail modal on click
#[component]
pub fn DisplayCard(
    item: Item,
    #[prop(optional)] show_status: bool,
    #[prop(into)] on_open: Callback<Item>,
) -> impl IntoView {
    let date = format_date(&item.date, DateStyle::Short, "No date");
    let status = item.status.as_str();
    let category = item.category_or_default().to_string();
    let title = item.title_or_default().to_string();

    view! {
        <div class="item-card animate-slide" on:click=move |_| on_open.run(item.clone())>
            <div class="item-card-header">
                <div class="item-category">{category}</div>
                <div class="item-date">{date}</div>
            </div>
            <h3 class="item-title">{title}</h3>
            {show_status.then(|| view! {
                <span class=format!("item-status {}", status)>{status.to_uppercase()}</span>
            })}
            <div class="view-hint">"Tap for details"</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_badge() {
        assert_eq!(kind_badge(ItemKind::Lost), "LOST");
        assert_eq!(kind_badge(ItemKind::Found), "FOUND");
        assert_eq!(kind_badge(ItemKind::Other), "ITEM");
    }
}
