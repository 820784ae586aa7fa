//! Admin Dashboard
//!
//! Moderation queue, verified items, and the users placeholder.

use leptos::prelude::*;
use leptos_toast::use_toasts;
use reactive_stores::Store;

use crate::actions;
use crate::api::ModerationAction;
use crate::components::{ItemGrid, ModerationCard, TopBar, ViewTabs};
use crate::context::use_session;
use crate::listing::USERS_PLACEHOLDER;
use crate::loaders::AdminLoaders;
use crate::models::{Item, Role};
use crate::routes::{redirect, Page};
use crate::session::{gate, Gate};
use crate::store::{AdminState, AdminStateStoreFields};
use crate::views::{switch_outcome, AdminView, ViewLoad, ViewName};

use super::report_broken_link;

const DENIED_MESSAGE: &str = "Access Denied: Admin privileges required.";

fn deny_access() {
    log::warn!("admin page opened without admin session");
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(DENIED_MESSAGE);
    }
    redirect(Page::Login);
}

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();

    match gate(session.current(), Some(Role::Admin)) {
        Gate::Allow(_) => {}
        Gate::Login => {
            redirect(Page::Login);
            return ().into_any();
        }
        Gate::Denied => {
            deny_access();
            return ().into_any();
        }
    }

    let store = Store::new(AdminState::default());
    let loaders = AdminLoaders { store, session, toasts };

    let switch_tab = move |name: String| {
        let current = store.active_view().get_untracked();
        match switch_outcome(current, &name) {
            (view, Ok(load)) => {
                log::debug!("switch to {}", view.as_str());
                *store.active_view().write() = view;
                let heading = view.heading_after(store.heading().get_untracked());
                *store.heading().write() = heading;
                match load {
                    ViewLoad::Pending => loaders.load_pending(),
                    ViewLoad::Approved => loaders.load_approved(),
                    ViewLoad::MyItems | ViewLoad::Nothing => {}
                }
            }
            (_, Err(err)) => report_broken_link(toasts, &err),
        }
    };

    let on_action = Callback::new(move |(id, action): (String, ModerationAction)| {
        actions::moderate(loaders, id, action);
    });

    // approve/reject only make sense on the pending queue
    let card = move |item: Item| {
        let buttons = (store.active_view().get_untracked() == AdminView::Pending).then_some(on_action);
        view! { <ModerationCard item=item on_action=buttons /> }
    };

    let badge = Callback::new(move |view: AdminView| {
        if view != AdminView::Pending {
            return None;
        }
        store.pending_count().get().map(|n| n.to_string())
    });

    loaders.load_pending();
    actions::verify_session(session, toasts);

    view! {
        <div class="dashboard admin-dashboard">
            <TopBar title="Admin Console" />

            <ViewTabs
                active=Signal::derive(move || store.active_view().get())
                on_select=Callback::new(switch_tab)
                badge=badge
            />

            <main class="dashboard-main">
                <header class="page-header">
                    <h1 id="pageTitle">{move || store.heading().get().title()}</h1>
                    <p id="pageSubtitle">{move || store.heading().get().subtitle()}</p>
                </header>

                <div id="dashboardContainer">
                    {move || match store.active_view().get() {
                        AdminView::Users => view! {
                            <div class="no-items"><p>{USERS_PLACEHOLDER}</p></div>
                        }.into_any(),
                        _ => view! {
                            <ItemGrid listing=Signal::derive(move || store.listing().get()) card=card />
                        }.into_any(),
                    }}
                </div>
            </main>
        </div>
    }
    .into_any()
}
