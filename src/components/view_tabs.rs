//! View Tab Bar Component
//!
//! Nav buttons of a dashboard. The highlight is derived from the active view.

use leptos::prelude::*;

use crate::views::{tab_class, ViewName};

/// One button per view. Clicks hand the view name to `on_select`, which
/// owns switching.
#[component]
pub fn ViewTabs<V>(
    active: Signal<V>,
    #[prop(into)] on_select: Callback<String>,
    /// Optional badge per view, e.g. the pending count
    #[prop(optional, into)]
    badge: Option<Callback<V, Option<String>>>,
) -> impl IntoView
where
    V: ViewName,
{
    view! {
        <nav class="nav-tabs">
            {V::ALL.iter().copied().map(|tab| {
                view! {
                    <button
                        class=move || tab_class(active.get(), tab)
                        data-view=tab.as_str()
                        on:click=move |ev| {
                            ev.prevent_default();
                            on_select.run(tab.as_str().to_string());
                        }
                    >
                        {tab.label()}
                        {move || badge.and_then(|badge| badge.run(tab)).map(|text| view! {
                            <span class="badge">{text}</span>
                        })}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::UserView;

    /// Dashboards hand over a plain `Signal` of their own view type
    #[test]
    fn test_highlight_follows_active_signal() {
        let owner = Owner::new();
        owner.with(|| {
            let (view, set_view) = signal(UserView::Browse);
            let active: Signal<UserView> = Signal::derive(move || view.get());
            let classes = || {
                UserView::ALL
                    .iter()
                    .map(|&tab| tab_class(active.get(), tab))
                    .collect::<Vec<_>>()
            };
            assert_eq!(classes(), vec!["nav-btn active", "nav-btn"]);

            set_view.set(UserView::Submissions);
            assert_eq!(classes(), vec!["nav-btn", "nav-btn active"]);
        });
    }
}
