//! Request pipeline: bearer attachment and the one-shot refresh interceptor.

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::auth::{REFRESH_PATH, STATUS_PATH};
use crate::credentials::{auth_header, Credential, SharedStore};
use crate::error::ApiError;
use crate::types::RefreshResponse;

/// How the client authenticates with the backend.
///
/// Native targets carry a refresh token and send it in the refresh body;
/// web targets ride the session cookie (the server rotates it) and pair it
/// with the `X-XSRF-TOKEN` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Native,
    Web,
}

/// HTTP client for the Waypoint backend.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    store: SharedStore,
    platform: Platform,
}

impl ApiClient {
    /// Create a client against the given base URL, persisting credentials
    /// through the given storage port.
    pub fn new(base_url: impl Into<String>, store: SharedStore, platform: Platform) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
            store,
            platform,
        }
    }

    /// The storage port this client persists credentials through.
    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    pub(crate) async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let response = self.send(Method::GET, path, None).await?;
        Ok(response.json().await?)
    }

    pub(crate) async fn post<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let body = serde_json::to_value(body)?;
        let response = self.send(Method::POST, path, Some(body)).await?;
        Ok(response.json().await?)
    }

    pub(crate) async fn post_accepted<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let body = serde_json::to_value(body)?;
        self.send(Method::POST, path, Some(body)).await?;
        Ok(())
    }

    pub(crate) async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        self.send(Method::POST, path, None).await?;
        Ok(())
    }

    pub(crate) async fn put<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let body = serde_json::to_value(body)?;
        let response = self.send(Method::PUT, path, Some(body)).await?;
        Ok(response.json().await?)
    }

    /// Issue a request, recovering from a single authorization failure.
    ///
    /// Retry state is an explicit local variable scoped to this call, so
    /// concurrent requests keep independent bookkeeping. The refresh and
    /// status endpoints are never themselves refresh-retried.
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<reqwest::Response, ApiError> {
        let mut retried = false;
        loop {
            let response = self.dispatch(method.clone(), path, body.as_ref()).await?;
            let status = response.status();

            if status == StatusCode::UNAUTHORIZED && !retried && !is_auth_endpoint(path) {
                retried = true;
                match self.refresh_access_token().await {
                    Ok(()) => {
                        tracing::debug!(path, "access token refreshed, retrying request");
                        continue;
                    }
                    Err(e) => {
                        tracing::warn!(path, "token refresh failed: {e}");
                        if let Err(e) = self.store.clear() {
                            tracing::warn!("failed to clear credentials: {e}");
                        }
                        return Err(ApiError::Unauthorized);
                    }
                }
            }

            if status == StatusCode::UNAUTHORIZED {
                return Err(ApiError::Unauthorized);
            }
            if !status.is_success() {
                let message = response.text().await.unwrap_or_default();
                return Err(ApiError::Status {
                    status: status.as_u16(),
                    message,
                });
            }
            return Ok(response);
        }
    }

    /// Build and fire one request with the current credential attached.
    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<reqwest::Response, reqwest::Error> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.request(method, &url);

        if let Some(header) = auth_header(self.store.as_ref()) {
            request = request.header(reqwest::header::AUTHORIZATION, header);
        }
        if self.platform == Platform::Web {
            if let Some(token) = self.store.csrf_token() {
                request = request.header("X-XSRF-TOKEN", token);
            }
        }
        #[cfg(target_arch = "wasm32")]
        {
            // Session cookies must accompany every request on web.
            request = request.fetch_credentials_include();
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        request.send().await
    }

    /// Obtain a new access token and persist it.
    ///
    /// Native: POST the stored refresh token. Web: POST with cookies and no
    /// body; the server rotates the cookie and returns the new access token.
    async fn refresh_access_token(&self) -> Result<(), ApiError> {
        let current = self
            .store
            .load()
            .map_err(|_| ApiError::Unauthorized)?;

        let url = format!("{}{}", self.base_url, REFRESH_PATH);
        let mut request = self.http.post(&url);
        #[cfg(target_arch = "wasm32")]
        {
            request = request.fetch_credentials_include();
        }

        let current = match self.platform {
            Platform::Native => {
                let current = current.ok_or(ApiError::Unauthorized)?;
                let refresh_token = current
                    .refresh_token
                    .clone()
                    .ok_or(ApiError::Unauthorized)?;
                request = request.json(&serde_json::json!({ "refreshToken": refresh_token }));
                Some(current)
            }
            Platform::Web => {
                if let Some(token) = self.store.csrf_token() {
                    request = request.header("X-XSRF-TOKEN", token);
                }
                current
            }
        };

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }
        let rotated: RefreshResponse = response.json().await?;

        // On web without a local record the session lives in the cookie;
        // there is nothing to persist.
        if let Some(current) = current {
            let updated = Credential {
                access_token: rotated.access_token,
                ..current
            };
            if let Err(e) = self.store.save(&updated) {
                tracing::warn!("failed to persist refreshed credential: {e}");
            }
        }
        Ok(())
    }
}

/// Auth endpoints that must never trigger a refresh-retry of themselves.
fn is_auth_endpoint(path: &str) -> bool {
    path == REFRESH_PATH || path == STATUS_PATH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_and_status_excluded_from_retry() {
        assert!(is_auth_endpoint("/api/auth/refresh"));
        assert!(is_auth_endpoint("/api/auth/status"));
        assert!(!is_auth_endpoint("/api/auth/logout"));
        assert!(!is_auth_endpoint("/api/trips"));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let store: SharedStore = std::sync::Arc::new(crate::MemoryStore::new());
        let client = ApiClient::new("http://localhost:8080/", store, Platform::Native);
        assert_eq!(client.base_url, "http://localhost:8080");
    }
}
