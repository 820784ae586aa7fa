//! Data Loaders
//!
//! Fetch item collections and write them into the dashboard stores.
//! A failed load leaves the loading placeholder in place and shows a toast.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_toast::Toasts;

use crate::api::{self, SearchQuery};
use crate::config::SEARCH_DEBOUNCE_MS;
use crate::context::SessionContext;
use crate::debounce::{self, DebounceGate};
use crate::error::ApiError;
use crate::listing::{
    settle, Settled, FEED_TEXT, MY_ITEMS_TEXT, PENDING_TEXT, SEARCH_TEXT, VERIFIED_TEXT,
};
use crate::store::{
    admin_set_listing, user_set_browse, user_set_submissions, AdminStateStoreFields, AdminStore,
    DiagPanel, DiagTone, UserStateStoreFields, UserStore,
};

/// Authorization failure: drop the session and go back to login
pub fn expire_session(session: SessionContext, toasts: Toasts) {
    // concurrent loaders can all see the 401
    if !session.expire() {
        return;
    }
    log::warn!("token rejected, ending session");
    toasts.error("Session expired. Please re-login.");
}

/// Loaders of the admin dashboard
#[derive(Clone, Copy)]
pub struct AdminLoaders {
    pub store: AdminStore,
    pub session: SessionContext,
    pub toasts: Toasts,
}

impl AdminLoaders {
    pub fn load_pending(self) {
        let Some(token) = self.session.token() else {
            expire_session(self.session, self.toasts);
            return;
        };
        if let Some(listing) = PENDING_TEXT.placeholder() {
            admin_set_listing(&self.store, listing);
        }
        spawn_local(async move {
            let settled = settle(api::list_pending(&token).await, &PENDING_TEXT);
            if let Settled::Show(listing) = &settled {
                log::info!("{} items pending", listing.card_count());
                *self.store.pending_count().write() = Some(listing.card_count());
            }
            self.apply(settled);
        });
    }

    pub fn load_approved(self) {
        if let Some(listing) = VERIFIED_TEXT.placeholder() {
            admin_set_listing(&self.store, listing);
        }
        spawn_local(async move {
            let result = api::list_approved().await;
            self.apply(settle(result, &VERIFIED_TEXT));
        });
    }

    fn apply(self, settled: Settled) {
        match settled {
            Settled::Show(listing) => admin_set_listing(&self.store, listing),
            Settled::Failed(message) => {
                self.toasts.error(message);
            }
            Settled::Expired => expire_session(self.session, self.toasts),
        }
    }
}

/// Loaders of the user dashboard
#[derive(Clone, Copy)]
pub struct UserLoaders {
    pub store: UserStore,
    pub session: SessionContext,
    pub toasts: Toasts,
    pub search_gate: StoredValue<DebounceGate>,
}

impl UserLoaders {
    pub fn new(store: UserStore, session: SessionContext, toasts: Toasts) -> Self {
        Self {
            store,
            session,
            toasts,
            search_gate: StoredValue::new(DebounceGate::default()),
        }
    }

    pub fn load_approved(self) {
        if let Some(listing) = FEED_TEXT.placeholder() {
            user_set_browse(&self.store, listing);
        }
        spawn_local(async move {
            let result = api::list_approved().await;
            self.apply_browse(settle(result, &FEED_TEXT));
        });
    }

    /// Run `query` once typing has paused. An empty query reloads the full feed.
    pub fn search_debounced(self, query: SearchQuery) {
        spawn_local(async move {
            let Some(ticket) = debounce::settle(self.search_gate, SEARCH_DEBOUNCE_MS).await else {
                return;
            };
            if query.is_empty() {
                self.load_approved();
                return;
            }
            log::debug!("search {}", query.to_query_string());
            let result = api::search(&query).await;
            if !debounce::still_current(self.search_gate, ticket) {
                log::debug!("dropping stale search response");
                return;
            }
            self.apply_browse(settle(result, &SEARCH_TEXT));
        });
    }

    fn apply_browse(self, settled: Settled) {
        match settled {
            Settled::Show(listing) => user_set_browse(&self.store, listing),
            Settled::Failed(message) => {
                self.toasts.error(message);
            }
            Settled::Expired => expire_session(self.session, self.toasts),
        }
    }

    /// Own submissions, preceded by the submitter diagnostics
    pub fn load_my_items(self) {
        let session = self.session.current();
        let username = session.as_ref().map(|s| s.username.clone()).unwrap_or_default();
        let token = session.map(|s| s.access_token);

        if let Some(listing) = MY_ITEMS_TEXT.placeholder() {
            user_set_submissions(&self.store, listing);
        }
        *self.store.diag().write() = DiagPanel::start(&username, token.is_some());

        let Some(token) = token else {
            self.toasts.error("Session expired. Please re-login.");
            return;
        };

        spawn_local(async move {
            match api::diag_users().await {
                Ok(diag) => self.store.diag().write().record_users(&diag),
                Err(err) => {
                    log::warn!("diagnostics unavailable: {}", err);
                    self.store.diag().write().record_users(&Default::default());
                }
            }

            let result = api::list_my_items(&token).await;
            if let Ok(items) = &result {
                log::info!("server returned {} submissions", items.len());
            }
            self.store.diag().write().record_fetch(&result);
            if let Err(ApiError::Rejected { status, .. }) = &result {
                self.toasts.error(format!("Fetch Error: {}", status));
                return;
            }

            match settle(result, &MY_ITEMS_TEXT) {
                Settled::Show(listing) => user_set_submissions(&self.store, listing),
                Settled::Failed(message) => {
                    self.toasts.error(message);
                }
                Settled::Expired => expire_session(self.session, self.toasts),
            }
        });
    }
}
