//! Explicit session context
//!
//! The original front end kept the token and admin flag in ambient
//! per-tab storage under the `user_token` / `isAdmin` keys. Here the
//! session is an owned context object with an explicit sign-in/sign-out
//! lifecycle; absence of a session means unauthenticated.

/// An authenticated session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Opaque bearer token proving the user is authenticated
    pub token: String,
    /// Whether the user may use the admin console
    pub is_admin: bool,
}

/// Holder for the current session, one per running client ("tab")
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    current: Option<Session>,
}

impl SessionStore {
    /// Create an empty (unauthenticated) store
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a session after a successful login
    pub fn sign_in(&mut self, token: impl Into<String>, is_admin: bool) {
        self.current = Some(Session {
            token: token.into(),
            is_admin,
        });
    }

    /// Destroy the session; token and admin flag go together
    pub fn sign_out(&mut self) {
        self.current = None;
    }

    /// Current session, if any
    pub fn session(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    /// Current bearer token, if any
    pub fn token(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.token.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// False whenever there is no session at all
    pub fn is_admin(&self) -> bool {
        self.current.as_ref().is_some_and(|s| s.is_admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_in_then_out() {
        let mut store = SessionStore::new();
        assert!(!store.is_authenticated());
        assert!(!store.is_admin());

        store.sign_in("tok-123", true);
        assert!(store.is_authenticated());
        assert!(store.is_admin());
        assert_eq!(store.token(), Some("tok-123"));

        store.sign_out();
        assert!(!store.is_authenticated());
        assert!(!store.is_admin());
        assert!(store.token().is_none());
    }

    #[test]
    fn non_admin_session() {
        let mut store = SessionStore::new();
        store.sign_in("tok-456", false);
        assert!(store.is_authenticated());
        assert!(!store.is_admin());
    }
}
