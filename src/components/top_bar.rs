//! Top Bar Component
//!
//! Page title, signed-in user, and logout.

use leptos::prelude::*;

use crate::context::use_session;

#[component]
pub fn TopBar(title: &'static str) -> impl IntoView {
    let session = use_session();

    let username = move || {
        session
            .session
            .with(|s| s.as_ref().map(|s| s.username.clone()))
            .unwrap_or_default()
    };

    view! {
        <header class="top-bar glass">
            <span class="top-bar-title">{title}</span>
            <div class="top-bar-user">
                <span id="usernameDisplay" class="user-name">{username}</span>
                <button id="logoutBtn" class="btn btn-outline" on:click=move |_| session.logout()>
                    "Logout"
                </button>
            </div>
        </header>
    }
}
