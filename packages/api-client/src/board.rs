//! Community board endpoints.

use uuid::Uuid;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::{BoardPost, NewBoardPost};

impl ApiClient {
    pub async fn list_posts(&self) -> Result<Vec<BoardPost>, ApiError> {
        self.get("/api/board/posts").await
    }

    pub async fn board_post(&self, id: Uuid) -> Result<BoardPost, ApiError> {
        self.get(&format!("/api/board/posts/{id}")).await
    }

    pub async fn create_post(&self, post: NewBoardPost) -> Result<BoardPost, ApiError> {
        self.post("/api/board/posts", &post).await
    }
}
