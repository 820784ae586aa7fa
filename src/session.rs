//! Session
//!
//! Login session persisted in browser local storage.

use crate::models::{LoginResponse, Role};

pub const TOKEN_KEY: &str = "access_token";
pub const ROLE_KEY: &str = "role";
pub const USERNAME_KEY: &str = "username";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub access_token: String,
    pub role: Role,
    pub username: String,
}

impl Session {
    pub fn from_login(resp: LoginResponse) -> Self {
        Self {
            access_token: resp.access_token,
            role: resp.role,
            username: resp.username,
        }
    }

    /// Build a session from raw stored values. No token means no session.
    pub fn from_parts(token: Option<String>, role: Option<String>, username: Option<String>) -> Option<Self> {
        let access_token = token.filter(|t| !t.is_empty())?;
        Some(Self {
            access_token,
            role: role.as_deref().map(Role::parse).unwrap_or_default(),
            username: username.unwrap_or_default(),
        })
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Outcome of checking a session against a page's requirement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gate {
    Allow(Session),
    /// No token: go to login
    Login,
    /// Token present but the role does not match
    Denied,
}

pub fn gate(session: Option<Session>, required: Option<Role>) -> Gate {
    match (session, required) {
        (None, _) => Gate::Login,
        (Some(s), Some(role)) if s.role != role => Gate::Denied,
        (Some(s), _) => Gate::Allow(s),
    }
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

pub fn load() -> Option<Session> {
    let storage = storage()?;
    let get = |key: &str| storage.get_item(key).ok().flatten();
    Session::from_parts(get(TOKEN_KEY), get(ROLE_KEY), get(USERNAME_KEY))
}

pub fn persist(session: &Session) -> Result<(), String> {
    let storage = storage().ok_or_else(|| "local storage is unavailable".to_string())?;
    for (key, value) in [
        (TOKEN_KEY, session.access_token.as_str()),
        (ROLE_KEY, session.role.as_str()),
        (USERNAME_KEY, session.username.as_str()),
    ] {
        storage
            .set_item(key, value)
            .map_err(|_| format!("failed to persist {}", key))?;
    }
    Ok(())
}

/// Wipe everything, not only the session keys
pub fn clear() {
    if let Some(storage) = storage() {
        let _ = storage.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(role: Role) -> Session {
        Session {
            access_token: "tok".into(),
            role,
            username: "alice".into(),
        }
    }

    #[test]
    fn test_from_parts() {
        let s = Session::from_parts(Some("tok".into()), Some("admin".into()), Some("root".into())).unwrap();
        assert_eq!(s.role, Role::Admin);
        assert_eq!(s.access_token, "tok");

        assert!(Session::from_parts(None, Some("admin".into()), None).is_none());
        assert!(Session::from_parts(Some(String::new()), None, None).is_none());

        let s = Session::from_parts(Some("tok".into()), None, None).unwrap();
        assert_eq!(s.role, Role::User);
        assert_eq!(s.username, "");
    }

    #[test]
    fn test_gate_without_token_redirects_to_login() {
        assert_eq!(gate(None, None), Gate::Login);
        assert_eq!(gate(None, Some(Role::Admin)), Gate::Login);
    }

    #[test]
    fn test_gate_role_mismatch_is_denied() {
        assert_eq!(gate(Some(session(Role::User)), Some(Role::Admin)), Gate::Denied);
    }

    #[test]
    fn test_gate_allows() {
        assert_eq!(gate(Some(session(Role::Admin)), Some(Role::Admin)), Gate::Allow(session(Role::Admin)));
        // user pages only need a token
        assert_eq!(gate(Some(session(Role::Admin)), None), Gate::Allow(session(Role::Admin)));
    }

    #[test]
    fn test_from_login_trusts_response() {
        let resp = LoginResponse {
            access_token: "abc".into(),
            role: Role::Admin,
            username: "root".into(),
        };
        let s = Session::from_login(resp);
        assert!(s.is_admin());
        assert_eq!(s.username, "root");
    }
}
