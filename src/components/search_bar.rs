//! Search Bar Component
//!
//! Keyword box plus a collapsible filter row. Every edit re-arms the debounced search.

use leptos::prelude::*;

use crate::api::SearchQuery;
use crate::loaders::UserLoaders;

#[component]
pub fn SearchBar(loaders: UserLoaders) -> impl IntoView {
    let query = RwSignal::new(SearchQuery::default());
    let (filters_open, set_filters_open) = signal(false);

    // apply one field edit, then search with the whole query
    let edit = move |apply: fn(&mut SearchQuery, String)| {
        move |ev: web_sys::Event| {
            query.update(|q| apply(q, event_target_value(&ev)));
            loaders.search_debounced(query.get_untracked());
        }
    };

    view! {
        <div class="search-bar">
            <div class="search-row">
                <input
                    id="searchInput"
                    type="search"
                    placeholder="Search by keyword..."
                    prop:value=move || query.with(|q| q.keyword.clone())
                    on:input=edit(|q, v| q.keyword = v)
                />
                <button
                    type="button"
                    class=move || if filters_open.get() { "btn btn-outline active" } else { "btn btn-outline" }
                    on:click=move |_| set_filters_open.update(|open| *open = !*open)
                >
                    "Filters"
                </button>
            </div>

            <Show when=move || filters_open.get()>
                <div class="filter-row">
                    <input
                        type="text"
                        placeholder="Category"
                        prop:value=move || query.with(|q| q.category.clone())
                        on:input=edit(|q, v| q.category = v)
                    />
                    <input
                        type="text"
                        placeholder="Location"
                        prop:value=move || query.with(|q| q.location.clone())
                        on:input=edit(|q, v| q.location = v)
                    />
                    <input
                        type="date"
                        prop:value=move || query.with(|q| q.date.clone())
                        on:input=edit(|q, v| q.date = v)
                    />
                </div>
            </Show>
        </div>
    }
}
