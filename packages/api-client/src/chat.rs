//! Chat endpoints: rooms and message history.

use uuid::Uuid;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::{ChatMessage, ChatRoom, NewChatMessage};

impl ApiClient {
    pub async fn list_rooms(&self) -> Result<Vec<ChatRoom>, ApiError> {
        self.get("/api/chat/rooms").await
    }

    pub async fn room_messages(&self, room_id: Uuid) -> Result<Vec<ChatMessage>, ApiError> {
        self.get(&format!("/api/chat/rooms/{room_id}/messages")).await
    }

    pub async fn send_message(
        &self,
        room_id: Uuid,
        body: String,
    ) -> Result<ChatMessage, ApiError> {
        self.post(
            &format!("/api/chat/rooms/{room_id}/messages"),
            &NewChatMessage { body },
        )
        .await
    }
}
