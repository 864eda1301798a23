//! Current-user profile endpoints.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::{UpdateProfile, UserProfile};

impl ApiClient {
    pub async fn current_user(&self) -> Result<UserProfile, ApiError> {
        self.get("/api/users/me").await
    }

    pub async fn update_profile(&self, update: UpdateProfile) -> Result<UserProfile, ApiError> {
        self.put("/api/users/me", &update).await
    }
}
