//! Action Handlers
//!
//! Form submissions and moderation actions. Every failure is terminal for
//! the action that triggered it: no retry and no optimistic update.

use leptos::task::spawn_local;
use leptos_toast::ToastLevel;

use crate::api::{self, ModerationAction, ReportDraft};
use crate::components::StatusLine;
use crate::config::{LOGIN_REDIRECT_DELAY_MS, SIGNUP_REDIRECT_DELAY_MS};
use crate::context::SessionContext;
use crate::error::ApiError;
use crate::loaders::{expire_session, AdminLoaders, UserLoaders};
use crate::models::{LoginRequest, LoginResponse, Role, SignupRequest};
use crate::routes::{redirect_after, Page};
use crate::session::Session;

/// Session and landing page for a successful login. The role comes from the
/// server response, never from what the form asked for.
pub fn login_outcome(resp: LoginResponse) -> (Session, Page) {
    let page = Page::landing_for(resp.role);
    (Session::from_login(resp), page)
}

pub fn signup(username: String, password: String, status: StatusLine) {
    let username = username.trim().to_string();
    let password = password.trim().to_string();
    status.show("Creating account...", ToastLevel::Info);

    spawn_local(async move {
        let req = SignupRequest {
            username: &username,
            password: &password,
        };
        match api::signup(&req).await {
            Ok(_) => {
                log::info!("account created for {}", username);
                status.show("Account created! Redirecting to login...", ToastLevel::Success);
                redirect_after(Page::Login, SIGNUP_REDIRECT_DELAY_MS);
            }
            Err(err) if err.is_transport() => {
                log::error!("signup: {}", err);
                status.show("Connection error", ToastLevel::Error);
            }
            Err(err) => status.show(err.detail_or("Signup failed"), ToastLevel::Error),
        }
    });
}

pub fn login(username: String, password: String, client_role: Role, session: SessionContext, status: StatusLine) {
    let username = username.trim().to_string();
    let password = password.trim().to_string();
    status.show("Verifying credentials...", ToastLevel::Info);

    spawn_local(async move {
        let req = LoginRequest {
            username: &username,
            password: &password,
            client_role: client_role.as_str(),
        };
        match api::login(&req).await {
            Ok(resp) => {
                let (new_session, landing) = login_outcome(resp);
                log::info!("logged in as {} ({})", new_session.username, new_session.role.as_str());
                let welcome = format!("Welcome back, {}!", new_session.username);
                if let Err(e) = session.login(new_session) {
                    log::error!("login: {}", e);
                    status.show("Could not save your session", ToastLevel::Error);
                    return;
                }
                status.show(welcome, ToastLevel::Success);
                redirect_after(landing, LOGIN_REDIRECT_DELAY_MS);
            }
            Err(err) if err.is_transport() => {
                log::error!("login: {}", err);
                status.show("Connection error", ToastLevel::Error);
            }
            // a 401 here is bad credentials, not an expired session
            Err(err) => status.show(err.detail_or("Login failed"), ToastLevel::Error),
        }
    });
}

/// What the admin page does after a moderation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Followup {
    /// Confirm, then reload the pending queue
    Reload(String),
    Expire,
    Report(String),
}

pub fn moderation_followup(result: &Result<(), ApiError>, action: ModerationAction) -> Followup {
    match result {
        Ok(()) => Followup::Reload(format!("Item successfully {}!", action.past_tense())),
        Err(ApiError::Unauthorized(_)) => Followup::Expire,
        Err(err) if err.is_transport() => Followup::Report("Moderation failed".to_string()),
        Err(_) => Followup::Report(format!("Could not {} item", action.as_str())),
    }
}

/// Approve or reject, then reload the pending queue
pub fn moderate(loaders: AdminLoaders, item_id: String, action: ModerationAction) {
    let Some(token) = loaders.session.token() else {
        expire_session(loaders.session, loaders.toasts);
        return;
    };

    spawn_local(async move {
        let result = api::moderate(&token, &item_id, action).await;
        if let Err(err) = &result {
            log::warn!("could not {} {}: {}", action.as_str(), item_id, err);
        }
        match moderation_followup(&result, action) {
            Followup::Reload(message) => {
                log::info!("item {} {}", item_id, action.past_tense());
                loaders.toasts.success(message);
                loaders.load_pending();
            }
            Followup::Expire => expire_session(loaders.session, loaders.toasts),
            Followup::Report(message) => {
                loaders.toasts.error(message);
            }
        }
    });
}

/// Submit a report. `on_success` runs after the confirmation toast (form reset, view switch).
pub fn submit_report(
    loaders: UserLoaders,
    draft: ReportDraft,
    file: Option<web_sys::File>,
    on_success: impl FnOnce() + 'static,
) {
    let Some(token) = loaders.session.token() else {
        expire_session(loaders.session, loaders.toasts);
        return;
    };
    loaders.toasts.info("Publishing your report...");

    spawn_local(async move {
        match api::submit_report(&token, &draft, file).await {
            Ok(()) => {
                log::info!("report submitted: {}", draft.title);
                loaders.toasts.success("Success! Your report is now in review.");
                on_success();
            }
            Err(ApiError::Unauthorized(_)) => expire_session(loaders.session, loaders.toasts),
            Err(err) if err.is_transport() => {
                log::error!("submit: {}", err);
                loaders.toasts.error("Network error");
            }
            Err(err) => {
                loaders.toasts.error(err.detail_or("Submission failed"));
            }
        }
    });
}

/// Check the stored token against the backend. Only a 401 ends the session.
pub fn verify_session(session: SessionContext, toasts: leptos_toast::Toasts) {
    let Some(token) = session.token() else {
        return;
    };
    spawn_local(async move {
        match api::me(&token).await {
            Ok(me) => log::debug!("session valid for {}", me.username),
            Err(ApiError::Unauthorized(_)) => expire_session(session, toasts),
            Err(err) => log::warn!("session check skipped: {}", err),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(role: Role) -> LoginResponse {
        LoginResponse {
            access_token: "jwt".into(),
            role,
            username: "carol".into(),
        }
    }

    #[test]
    fn test_server_role_decides_landing() {
        // form asked for "user", server says admin
        let (session, page) = login_outcome(response(Role::Admin));
        assert_eq!(page, Page::AdminDashboard);
        assert!(session.is_admin());

        let (_, page) = login_outcome(response(Role::User));
        assert_eq!(page, Page::UserDashboard);
    }

    #[test]
    fn test_moderation_success_reloads_pending() {
        assert_eq!(
            moderation_followup(&Ok(()), ModerationAction::Approve),
            Followup::Reload("Item successfully approved!".into())
        );
        assert_eq!(
            moderation_followup(&Ok(()), ModerationAction::Reject),
            Followup::Reload("Item successfully rejected!".into())
        );
    }

    #[test]
    fn test_moderation_failures() {
        let rejected = Err(ApiError::Rejected { status: 404, detail: None });
        assert_eq!(
            moderation_followup(&rejected, ModerationAction::Reject),
            Followup::Report("Could not reject item".into())
        );

        let offline = Err(ApiError::Network("offline".into()));
        assert_eq!(
            moderation_followup(&offline, ModerationAction::Approve),
            Followup::Report("Moderation failed".into())
        );

        let expired = Err(ApiError::Unauthorized(None));
        assert_eq!(moderation_followup(&expired, ModerationAction::Approve), Followup::Expire);
    }

    #[test]
    fn test_login_outcome_keeps_token() {
        let (session, _) = login_outcome(response(Role::User));
        assert_eq!(session.access_token, "jwt");
        assert_eq!(session.username, "carol");
    }
}
