//! Page Routes
//!
//! Client paths and full-page redirects. Redirects reload the bundle, so
//! every page starts from the session in storage.

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;

use crate::models::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    Signup,
    AdminDashboard,
    UserDashboard,
}

impl Page {
    pub fn path(&self) -> &'static str {
        match self {
            Page::Login => "/",
            Page::Signup => "/signup",
            Page::AdminDashboard => "/admin",
            Page::UserDashboard => "/dashboard",
        }
    }

    /// Where a freshly logged-in user goes, by the role the server returned
    pub fn landing_for(role: Role) -> Page {
        match role {
            Role::Admin => Page::AdminDashboard,
            Role::User => Page::UserDashboard,
        }
    }
}

pub fn redirect(page: Page) {
    log::info!("redirect to {}", page.path());
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(page.path());
    }
}

pub fn redirect_after(page: Page, delay_ms: u32) {
    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        redirect(page);
    });
}

/// `#submissions` -> `submissions`
pub fn current_fragment() -> Option<String> {
    let hash = web_sys::window()?.location().hash().ok()?;
    fragment_name(&hash)
}

fn fragment_name(hash: &str) -> Option<String> {
    let name = hash.trim_start_matches('#').trim();
    if name.is_empty() { None } else { Some(name.to_string()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landing_follows_server_role() {
        assert_eq!(Page::landing_for(Role::Admin), Page::AdminDashboard);
        assert_eq!(Page::landing_for(Role::User), Page::UserDashboard);
        assert_eq!(Page::landing_for(Role::Admin).path(), "/admin");
    }

    #[test]
    fn test_fragment_name() {
        assert_eq!(fragment_name("#submissions"), Some("submissions".to_string()));
        assert_eq!(fragment_name("#"), None);
        assert_eq!(fragment_name(""), None);
    }
}
