//! Lost & Found Frontend App
//!
//! Root component: session and toast contexts, page routes.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use leptos_toast::{provide_toasts, ToastConfig, ToastHost};

use crate::config::{TOAST_CAPACITY, TOAST_FADE_MS, TOAST_TTL_MS};
use crate::context::provide_session;
use crate::pages::{AdminDashboard, LoginPage, SignupPage, UserDashboard};

#[component]
pub fn App() -> impl IntoView {
    // Provide context to all children
    provide_session();
    provide_toasts(ToastConfig {
        capacity: TOAST_CAPACITY,
        ttl_ms: TOAST_TTL_MS,
        fade_ms: TOAST_FADE_MS,
    });

    view! {
        <Router>
            <Routes fallback=|| view! { <div class="no-items"><p>"Page not found."</p></div> }>
                <Route path=path!("/") view=LoginPage />
                <Route path=path!("/signup") view=SignupPage />
                <Route path=path!("/admin") view=AdminDashboard />
                <Route path=path!("/dashboard") view=UserDashboard />
            </Routes>
        </Router>
        <ToastHost />
    }
}
