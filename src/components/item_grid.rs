//! Item Grid Component
//!
//! Renders a listing: loading placeholder, empty-state message, or one card per item.

use leptos::prelude::*;

use crate::listing::Listing;
use crate::models::Item;

#[component]
pub fn ItemGrid<F, IV>(
    #[prop(into)] listing: Signal<Listing>,
    /// Card renderer for one item
    card: F,
) -> impl IntoView
where
    F: Fn(Item) -> IV + Copy + Send + Sync + 'static,
    IV: IntoView + 'static,
{
    view! {
        <div class="items-grid">
            {move || match listing.get() {
                Listing::Loading(message) => view! {
                    <div class="loading-spinner">
                        <span class="spinner"></span>
                        <p>{message}</p>
                    </div>
                }.into_any(),
                Listing::Empty(message) => view! {
                    <div class="no-items"><p>{message}</p></div>
                }.into_any(),
                Listing::Cards(items) => items.into_iter().map(card).collect_view().into_any(),
            }}
        </div>
    }
}
