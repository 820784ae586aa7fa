//! Type Selector Component
//!
//! Lost / found toggle of the report form.

use leptos::prelude::*;

use crate::models::ItemKind;

/// Report type options
pub const ITEM_KINDS: &[(ItemKind, &str)] = &[
    (ItemKind::Lost, "I Lost Something"),
    (ItemKind::Found, "I Found Something"),
];

#[component]
pub fn TypeSelector(
    current_kind: ReadSignal<ItemKind>,
    on_change: impl Fn(ItemKind) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="type-selector">
            {ITEM_KINDS.iter().map(|(kind, label)| {
                let kind = *kind;
                let is_selected = move || current_kind.get() == kind;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() {
                            format!("type-btn {} active", kind.as_str())
                        } else {
                            format!("type-btn {}", kind.as_str())
                        }
                        on:click=move |_| on_change(kind)
                    >
                        {*label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
