//! Session identity contract.
//!
//! The directory core never authenticates anyone; it only consumes an
//! authenticated identity through the narrow [`AuthProvider`] contract. The
//! ownership field on new listings is populated from this identity, and
//! ownership-gated mutations (update, delete) compare against it.

use serde::{Deserialize, Serialize};

/// An authenticated user's identity as seen by the directory.
///
/// The id is opaque to this layer; whatever backend authenticated the user
/// owns its meaning. `verified` reflects the backend's email-verification
/// state and gates listing creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque user id assigned by the authentication backend.
    pub user_id: String,

    /// Email address the user signed in with.
    pub email: String,

    /// Whether the backend has verified the user's email.
    pub verified: bool,
}

impl Session {
    /// Creates a session from backend-provided identity data.
    #[must_use]
    pub fn new(user_id: impl Into<String>, email: impl Into<String>, verified: bool) -> Self {
        Self {
            user_id: user_id.into(),
            email: email.into(),
            verified,
        }
    }

    /// Whether this session owns the given listing owner reference.
    ///
    /// Listings without an owner belong to nobody; they are never editable.
    #[must_use]
    pub fn owns(&self, owner_id: Option<&str>) -> bool {
        owner_id.is_some_and(|owner| owner == self.user_id)
    }
}

/// Source of the current authenticated identity.
///
/// The presentation shim supplies an implementation; screens only ask two
/// questions of it. A `None` answer means nobody is signed in.
pub trait AuthProvider {
    /// The current session, if someone is signed in.
    fn current_session(&self) -> Option<Session>;
}

/// An [`AuthProvider`] holding a fixed, locally-configured session.
///
/// Stands in for a real authentication backend: the shim builds one from
/// configuration at startup. Useful in tests for the same reason.
#[derive(Debug, Clone, Default)]
pub struct LocalAuth {
    session: Option<Session>,
}

impl LocalAuth {
    /// Creates a provider with a signed-in session.
    #[must_use]
    pub fn signed_in(session: Session) -> Self {
        Self {
            session: Some(session),
        }
    }

    /// Creates a provider with nobody signed in.
    #[must_use]
    pub fn signed_out() -> Self {
        Self { session: None }
    }
}

impl AuthProvider for LocalAuth {
    fn current_session(&self) -> Option<Session> {
        self.session.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ownership_requires_matching_owner_id() {
        let session = Session::new("user-1", "a@b.edu", true);
        assert!(session.owns(Some("user-1")));
        assert!(!session.owns(Some("user-2")));
        assert!(!session.owns(None));
    }

    #[test]
    fn local_auth_reports_configured_session() {
        let provider = LocalAuth::signed_in(Session::new("u", "u@x.edu", false));
        assert_eq!(provider.current_session().unwrap().user_id, "u");
        assert!(LocalAuth::signed_out().current_session().is_none());
    }
}
