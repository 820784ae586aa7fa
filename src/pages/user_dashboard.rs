//! User Dashboard
//!
//! Browse and search approved items, report new ones, follow own submissions.

use leptos::prelude::*;
use leptos_toast::{use_toasts, Toasts};
use reactive_stores::Store;
use wasm_bindgen::JsCast;

use crate::actions;
use crate::components::{
    DetailModal, DiagPanelView, DisplayCard, ItemGrid, ReportForm, SearchBar, TopBar, ViewTabs,
};
use crate::context::use_session;
use crate::loaders::UserLoaders;
use crate::models::Item;
use crate::routes::{current_fragment, redirect, Page};
use crate::session::{gate, Gate};
use crate::store::{UserState, UserStateStoreFields};
use crate::views::{initial_view, section_display, switch_outcome, UserView, ViewLoad, ViewName};

use super::report_broken_link;

fn system_error_message(message: &str, line: u32) -> String {
    format!("System Error: {} (Line {})", message, line)
}

/// Surface uncaught script errors as toasts
fn bind_global_error_handler(toasts: Toasts) {
    use wasm_bindgen::closure::Closure;

    let on_error = Closure::<dyn FnMut(web_sys::ErrorEvent)>::new(move |ev: web_sys::ErrorEvent| {
        log::error!("uncaught error: {} at {}:{}", ev.message(), ev.filename(), ev.lineno());
        toasts.error(system_error_message(&ev.message(), ev.lineno()));
    });

    if let Some(win) = web_sys::window() {
        let _ = win.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref());
    }
    on_error.forget();
}

#[component]
pub fn UserDashboard() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();

    if let Gate::Login | Gate::Denied = gate(session.current(), None) {
        redirect(Page::Login);
        return ().into_any();
    }

    let store = Store::new(UserState::default());
    let loaders = UserLoaders::new(store, session, toasts);
    bind_global_error_handler(toasts);

    let switch_tab = move |name: String| {
        let current = store.active_view().get_untracked();
        match switch_outcome(current, &name) {
            (view, Ok(load)) => {
                log::debug!("switch to {}", view.as_str());
                *store.active_view().write() = view;
                match load {
                    ViewLoad::Approved => loaders.load_approved(),
                    ViewLoad::MyItems => loaders.load_my_items(),
                    ViewLoad::Pending | ViewLoad::Nothing => {}
                }
            }
            (_, Err(err)) => report_broken_link(toasts, &err),
        }
    };

    let open_detail = Callback::new(move |item: Item| *store.detail().write() = Some(item));
    let close_detail = Callback::new(move |_: ()| *store.detail().write() = None);
    let active = Signal::derive(move || store.active_view().get());

    let (start, dangling) = initial_view::<UserView>(current_fragment().as_deref());
    if let Some(err) = dangling {
        report_broken_link(toasts, &err);
    }
    switch_tab(start.as_str().to_string());
    actions::verify_session(session, toasts);

    view! {
        <div class="dashboard user-dashboard">
            <TopBar title="Lost & Found" />

            <ViewTabs active=active on_select=Callback::new(switch_tab) />

            <main class="dashboard-main">
                <section
                    class="tab-content"
                    data-view-content="browse"
                    style:display=move || section_display(active.get(), UserView::Browse)
                >
                    <SearchBar loaders=loaders />
                    <ItemGrid
                        listing=Signal::derive(move || store.browse().get())
                        card=move |item: Item| view! { <DisplayCard item=item on_open=open_detail /> }
                    />
                </section>

                <section
                    class="tab-content"
                    data-view-content="submissions"
                    style:display=move || section_display(active.get(), UserView::Submissions)
                >
                    <h2>"Report an Item"</h2>
                    <ReportForm
                        loaders=loaders
                        on_submitted=move |_: ()| switch_tab(UserView::Submissions.as_str().to_string())
                    />

                    <h2>"My Submissions"</h2>
                    <DiagPanelView
                        panel=Signal::derive(move || store.diag().get())
                        on_resync=move |_: ()| {
                            log::info!("manual re-sync");
                            loaders.load_my_items();
                        }
                    />
                    <ItemGrid
                        listing=Signal::derive(move || store.submissions().get())
                        card=move |item: Item| view! {
                            <DisplayCard item=item show_status=true on_open=open_detail />
                        }
                    />
                </section>
            </main>

            <DetailModal item=Signal::derive(move || store.detail().get()) on_close=close_detail />
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_error_message() {
        assert_eq!(
            system_error_message("x is undefined", 42),
            "System Error: x is undefined (Line 42)"
        );
    }
}
