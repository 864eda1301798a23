//! Auth endpoints and session resolution.

use crate::client::ApiClient;
use crate::credentials::Credential;
use crate::error::ApiError;
use crate::types::{AuthStatus, LoginRequest, VerifyPhoneRequest};

pub(crate) const STATUS_PATH: &str = "/api/auth/status";
pub(crate) const REFRESH_PATH: &str = "/api/auth/refresh";
const LOGIN_PATH: &str = "/api/auth/login";
const LOGOUT_PATH: &str = "/api/auth/logout";
const VERIFY_PHONE_PATH: &str = "/api/auth/verify-phone";

impl ApiClient {
    /// Ask the backend whether the current session (cookie or bearer) is
    /// still valid. Never refresh-retried.
    pub async fn auth_status(&self) -> Result<AuthStatus, ApiError> {
        self.get(STATUS_PATH).await
    }

    /// Resolve the current session: persisted credential first, then one
    /// backend status round trip. A credential handed back by the status
    /// endpoint is persisted as a side effect. Never fails — network and
    /// storage errors degrade to an unauthenticated status.
    pub async fn resolve_session(&self) -> AuthStatus {
        match self.store().load() {
            Ok(Some(credential)) => {
                return AuthStatus {
                    is_authenticated: true,
                    user_id: Some(credential.user_id),
                    need_phone_verification: credential.need_phone_verification,
                    access_token: None,
                    refresh_token: None,
                };
            }
            Ok(None) => {}
            Err(e) => tracing::warn!("credential storage read failed: {e}"),
        }

        match self.auth_status().await {
            Ok(status) => {
                if status.is_authenticated {
                    if let (Some(token), Some(user_id)) = (&status.access_token, &status.user_id)
                    {
                        let credential = Credential {
                            access_token: token.clone(),
                            refresh_token: status.refresh_token.clone(),
                            user_id: user_id.clone(),
                            need_phone_verification: status.need_phone_verification,
                        };
                        if let Err(e) = self.store().save(&credential) {
                            tracing::warn!("failed to persist credential: {e}");
                        }
                    }
                }
                status
            }
            Err(e) => {
                tracing::debug!("status check failed, treating as signed out: {e}");
                AuthStatus::unauthenticated()
            }
        }
    }

    /// Password login. Returns the credential record; callers persist it via
    /// the session store.
    pub async fn login(&self, email: String, password: String) -> Result<Credential, ApiError> {
        self.post(LOGIN_PATH, &LoginRequest { email, password }).await
    }

    /// Confirm the phone-verification code for the current account.
    pub async fn verify_phone(&self, code: String) -> Result<(), ApiError> {
        self.post_accepted(VERIFY_PHONE_PATH, &VerifyPhoneRequest { code })
            .await
    }

    /// Log out: best-effort server-side invalidation, then unconditional
    /// local credential cleanup. The backend error, if any, is returned
    /// after cleanup for optional display.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let result = self.post_empty(LOGOUT_PATH).await;
        if let Err(e) = self.store().clear() {
            tracing::warn!("failed to clear credentials on logout: {e}");
        }
        result
    }
}
