//! Session context: the single source of truth for "am I signed in, as
//! whom, and what's pending."
//!
//! The context is created once at the application root and provided through
//! Dioxus context, so screens observe it instead of sharing a global.

pub mod handoff;
mod state;

pub use state::SessionState;

use dioxus::prelude::*;
use waypoint_api::types::AuthStatus;
use waypoint_api::{ApiClient, ApiError, Credential};

/// Session context provided to the entire app.
#[derive(Clone)]
pub struct SessionContext {
    /// Current authentication state.
    pub state: Signal<SessionState>,
    /// True while the initial credential check is in flight. The route
    /// guard makes no decision until this clears.
    pub loading: Signal<bool>,
    api: ApiClient,
}

impl SessionContext {
    pub fn new(api: ApiClient) -> Self {
        Self {
            state: Signal::new(SessionState::signed_out()),
            loading: Signal::new(true),
            api,
        }
    }

    /// The API client bound to this session's credential store.
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().is_authenticated()
    }

    /// Initial load: persisted credential first, then one backend status
    /// round trip. Always clears `loading`; failures degrade to signed out.
    pub async fn load_from_storage(&self) {
        let status = self.api.resolve_session().await;
        let mut state = self.state;
        state.set(SessionState::from_status(&status));
        let mut loading = self.loading;
        loading.set(false);
    }

    /// Re-validate the session: deep-link hand-off credential first, then
    /// persisted storage, then the backend. Returns the resolved
    /// authenticated flag.
    pub async fn check_status(&self) -> bool {
        let handoff = handoff::credential_from_location();
        if let Some(credential) = &handoff {
            if let Err(e) = self.api.store().save(credential) {
                tracing::warn!("failed to persist hand-off credential: {e}");
            }
        }

        let status = match handoff {
            Some(_) => None,
            None => Some(self.api.resolve_session().await),
        };
        let next = resolved_state(handoff.as_ref(), status.as_ref());
        let authenticated = next.is_authenticated();
        let mut state = self.state;
        state.set(next);
        authenticated
    }

    /// Drop the session: clear the persisted credential and reset state to
    /// signed out. The route guard observes the change and redirects.
    pub fn expire(&self) {
        if let Err(e) = self.api.store().clear() {
            tracing::warn!("failed to clear credentials: {e}");
        }
        let mut state = self.state;
        state.set(SessionState::signed_out());
    }

    /// Pass an API outcome through, dropping the session when the backend
    /// no longer recognizes it. Screens route every protected call through
    /// this so a dead session lands on the login redirect instead of an
    /// error banner over stale state.
    pub fn observe<T>(&self, result: Result<T, ApiError>) -> Result<T, ApiError> {
        if let Err(error) = &result {
            if let Some(next) = state_after_error(error) {
                if let Err(e) = self.api.store().clear() {
                    tracing::warn!("failed to clear credentials: {e}");
                }
                let mut state = self.state;
                state.set(next);
            }
        }
        result
    }

    /// Persist a credential and adopt it. Never navigates; the route guard
    /// reacts to the state change.
    pub fn login(&self, credential: &Credential) {
        if let Err(e) = self.api.store().save(credential) {
            tracing::warn!("failed to persist credential: {e}");
        }
        let mut state = self.state;
        state.set(SessionState::from_credential(credential));
    }

    /// Log out. Local state is reset even when the backend call fails; the
    /// backend error is returned for optional display.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let result = self.api.logout().await;
        let mut state = self.state;
        state.set(SessionState::signed_out());
        result
    }

    /// Mark the phone-verification requirement satisfied, in memory and in
    /// the persisted record.
    pub fn phone_verified(&self) {
        let mut state = self.state;
        state.write().clear_phone_verification();

        match self.api.store().load() {
            Ok(Some(mut credential)) => {
                credential.need_phone_verification = false;
                if let Err(e) = self.api.store().save(&credential) {
                    tracing::warn!("failed to persist verification flag: {e}");
                }
            }
            Ok(None) => {}
            Err(e) => tracing::warn!("credential storage read failed: {e}"),
        }
    }
}

/// State adopted by a re-validation pass: a hand-off credential wins,
/// otherwise the resolved backend status decides.
fn resolved_state(handoff: Option<&Credential>, status: Option<&AuthStatus>) -> SessionState {
    match (handoff, status) {
        (Some(credential), _) => SessionState::from_credential(credential),
        (None, Some(status)) => SessionState::from_status(status),
        (None, None) => SessionState::signed_out(),
    }
}

/// State to adopt after a failed API call, if the failure invalidates the
/// session.
fn state_after_error(error: &ApiError) -> Option<SessionState> {
    matches!(error, ApiError::Unauthorized).then(SessionState::signed_out)
}

/// Session provider component that wraps the app
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let session = use_context_provider(|| SessionContext::new(crate::config::api_client()));

    // Resolve the persisted session once at startup.
    use_effect(move || {
        let session = session.clone();
        spawn(async move {
            session.load_from_storage().await;
        });
    });

    children
}

/// Hook to access the session context
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guard::{redirect_for, Destination, RouteClass};

    fn credential() -> Credential {
        Credential {
            access_token: "a1".to_string(),
            refresh_token: Some("r1".to_string()),
            user_id: "42".to_string(),
            need_phone_verification: false,
        }
    }

    #[test]
    fn test_unauthorized_error_signs_the_session_out() {
        let next = state_after_error(&ApiError::Unauthorized).expect("state must reset");
        assert!(!next.is_authenticated());
        assert_eq!(next.user_id(), None);

        // The reset is what moves a protected screen off a dead session.
        assert_eq!(
            redirect_for(RouteClass::Protected, &next, false),
            Some(Destination::Landing)
        );
    }

    #[test]
    fn test_other_errors_leave_the_session_alone() {
        let server_error = ApiError::Status {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(state_after_error(&server_error), None);

        let decode_error = ApiError::from(serde_json::from_str::<u32>("x").unwrap_err());
        assert_eq!(state_after_error(&decode_error), None);
    }

    #[test]
    fn test_check_adopts_handoff_credential_over_status() {
        let credential = credential();
        let stale = AuthStatus::unauthenticated();
        let state = resolved_state(Some(&credential), Some(&stale));
        assert!(state.is_authenticated());
        assert_eq!(state.user_id(), Some("42"));
    }

    #[test]
    fn test_check_falls_back_to_resolved_status() {
        let status = AuthStatus {
            is_authenticated: true,
            user_id: Some("7".to_string()),
            need_phone_verification: true,
            access_token: None,
            refresh_token: None,
        };
        let state = resolved_state(None, Some(&status));
        assert!(state.is_authenticated());
        assert_eq!(state.user_id(), Some("7"));
        assert!(state.needs_phone_verification());

        assert!(!resolved_state(None, None).is_authenticated());
    }

    #[test]
    fn test_logout_target_state_is_fully_signed_out() {
        // Local reset applies whether or not the backend call succeeded.
        let state = SessionState::signed_out();
        assert!(!state.is_authenticated());
        assert_eq!(state.user_id(), None);
        assert!(!state.needs_phone_verification());
    }
}
