//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::routes::{self, Page};
use crate::session::{self, Session};

/// Current login session, created at login and destroyed at logout
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// Active session - read
    pub session: ReadSignal<Option<Session>>,
    /// Active session - write
    set_session: WriteSignal<Option<Session>>,
}

impl SessionContext {
    pub fn new(session: (ReadSignal<Option<Session>>, WriteSignal<Option<Session>>)) -> Self {
        Self {
            session: session.0,
            set_session: session.1,
        }
    }

    /// Session as of now, without subscribing
    pub fn current(&self) -> Option<Session> {
        self.session.get_untracked()
    }

    pub fn token(&self) -> Option<String> {
        self.session.with_untracked(|s| s.as_ref().map(|s| s.access_token.clone()))
    }

    /// Store a new session
    pub fn login(&self, new_session: Session) -> Result<(), String> {
        session::persist(&new_session)?;
        self.set_session.set(Some(new_session));
        Ok(())
    }

    /// Remove the active session, returning it if there was one
    pub fn take(&self) -> Option<Session> {
        let previous = self.current();
        if previous.is_some() {
            self.set_session.set(None);
        }
        previous
    }

    /// Drop the session and go back to login
    pub fn logout(&self) {
        self.take();
        session::clear();
        routes::redirect(Page::Login);
    }

    /// End a session the server rejected. False if it already ended.
    pub fn expire(&self) -> bool {
        if self.take().is_none() {
            return false;
        }
        session::clear();
        routes::redirect(Page::Login);
        true
    }
}

/// Load the stored session and provide it to all children
pub fn provide_session() -> SessionContext {
    let ctx = SessionContext::new(signal(session::load()));
    provide_context(ctx);
    ctx
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    #[test]
    fn test_session_ends_once() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = SessionContext::new(signal(Some(Session {
                access_token: "abc".into(),
                role: Role::User,
                username: "alice".into(),
            })));
            assert_eq!(ctx.take().map(|s| s.access_token), Some("abc".to_string()));
            assert_eq!(ctx.take(), None);
            assert_eq!(ctx.token(), None);
        });
    }
}
