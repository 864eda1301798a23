//! Session state: who is signed in and what is pending.

use waypoint_api::types::AuthStatus;
use waypoint_api::Credential;

/// Current authentication state.
///
/// `user_id` is private so the invariant holds structurally: a user id is
/// present exactly when the session is authenticated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    user_id: Option<String>,
    needs_phone_verification: bool,
}

impl SessionState {
    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn signed_in(user_id: impl Into<String>, needs_phone_verification: bool) -> Self {
        Self {
            user_id: Some(user_id.into()),
            needs_phone_verification,
        }
    }

    pub fn from_credential(credential: &Credential) -> Self {
        Self::signed_in(&credential.user_id, credential.need_phone_verification)
    }

    /// Adopt a backend status response. A response claiming authentication
    /// without a user id is treated as signed out.
    pub fn from_status(status: &AuthStatus) -> Self {
        match (&status.user_id, status.is_authenticated) {
            (Some(user_id), true) => Self::signed_in(user_id, status.need_phone_verification),
            _ => Self::signed_out(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn needs_phone_verification(&self) -> bool {
        self.needs_phone_verification
    }

    pub fn clear_phone_verification(&mut self) {
        self.needs_phone_verification = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_signed_out() {
        let state = SessionState::default();
        assert!(!state.is_authenticated());
        assert_eq!(state.user_id(), None);
        assert!(!state.needs_phone_verification());
    }

    #[test]
    fn test_signed_in_carries_user_id() {
        let state = SessionState::signed_in("42", true);
        assert!(state.is_authenticated());
        assert_eq!(state.user_id(), Some("42"));
        assert!(state.needs_phone_verification());
    }

    #[test]
    fn test_credential_adoption() {
        let credential = Credential {
            access_token: "a1".to_string(),
            refresh_token: None,
            user_id: "42".to_string(),
            need_phone_verification: false,
        };
        let state = SessionState::from_credential(&credential);
        assert!(state.is_authenticated());
        assert_eq!(state.user_id(), Some("42"));
    }

    #[test]
    fn test_status_without_user_id_is_signed_out() {
        let status = AuthStatus {
            is_authenticated: true,
            user_id: None,
            need_phone_verification: false,
            access_token: None,
            refresh_token: None,
        };
        assert!(!SessionState::from_status(&status).is_authenticated());
    }

    #[test]
    fn test_phone_verification_clears_independently() {
        let mut state = SessionState::signed_in("42", true);
        state.clear_phone_verification();
        assert!(state.is_authenticated());
        assert!(!state.needs_phone_verification());
    }
}
