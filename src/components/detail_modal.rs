//! Item Detail Modal
//!
//! Full-screen overlay for one item. Closes on the close button or a backdrop click.

use leptos::prelude::*;

use crate::models::{format_date, DateStyle, Item};

/// Lock page scrolling while the overlay is open
fn lock_body_scroll(locked: bool) {
    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let value = if locked { "hidden" } else { "auto" };
    if let Err(e) = body.style().set_property("overflow", value) {
        log::warn!("could not set body overflow: {:?}", e);
    }
}

/// Labelled rows under the description
fn detail_fields(item: &Item) -> [(&'static str, String); 5] {
    [
        ("Category", item.category_or_default().to_string()),
        ("Location", item.location_or_default().to_string()),
        ("Date", format_date(&item.date, DateStyle::Long, "No date")),
        ("Status", item.status.as_str().to_uppercase()),
        ("Submitted by", item.submitter_or_default().to_string()),
    ]
}

#[component]
pub fn DetailModal(
    #[prop(into)] item: Signal<Option<Item>>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    Effect::new(move |_| lock_body_scroll(item.with(Option::is_some)));

    move || {
        item.get().map(|item| {
            let kind = item.kind.as_str();
            let fields = detail_fields(&item);
            view! {
                <div id="detailModal" class="modal-overlay active" on:click=move |_| on_close.run(())>
                    <div class="modal-content glass" on:click=|ev| ev.stop_propagation()>
                        <button class="modal-close" on:click=move |_| on_close.run(())>"✕"</button>

                        {match item.image_url() {
                            Some(src) => view! {
                                <div class="modal-image">
                                    <img src=src alt="Item photo" />
                                </div>
                            }.into_any(),
                            None => view! {
                                <div class="no-image-placeholder">"No photo uploaded"</div>
                            }.into_any(),
                        }}

                        <div class="modal-body">
                            <span class=format!("item-status {}", kind)>{kind.to_uppercase()}</span>
                            <h2 class="modal-title">{item.title_or_default().to_string()}</h2>
                            <p class="modal-description">{item.description_or_default().to_string()}</p>

                            <div class="modal-meta">
                                {fields.into_iter().map(|(label, value)| view! {
                                    <div class="detail-item"><strong>{label} ": "</strong>{value}</div>
                                }).collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_fields_include_submitter() {
        let item = Item {
            location: "Library".into(),
            date: "2024-05-01".into(),
            submitted_by: "alice".into(),
            ..Default::default()
        };
        let fields = detail_fields(&item);
        assert_eq!(fields[1], ("Location", "Library".to_string()));
        assert_eq!(fields[2], ("Date", "Wednesday, May 1, 2024".to_string()));
        assert_eq!(fields[4], ("Submitted by", "alice".to_string()));
    }

    #[test]
    fn test_detail_fields_placeholders() {
        let fields = detail_fields(&Item::default());
        assert_eq!(fields[0].1, "Uncategorized");
        assert_eq!(fields[2].1, "No date");
        assert_eq!(fields[4].1, "Unknown");
    }
}
