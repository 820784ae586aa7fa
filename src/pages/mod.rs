//! Pages
//!
//! One component per route.

mod admin_dashboard;
mod login;
mod signup;
mod user_dashboard;

pub use admin_dashboard::AdminDashboard;
pub use login::LoginPage;
pub use signup::SignupPage;
pub use user_dashboard::UserDashboard;

use leptos_toast::Toasts;

use crate::views::UnknownView;

/// Dangling view reference from a nav button or the URL fragment
fn report_broken_link(toasts: Toasts, err: &UnknownView) {
    log::error!("{}", err);
    toasts.error(err.notice());
}
