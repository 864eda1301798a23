//! Trip endpoints: listing, detail, and plan generation.

use uuid::Uuid;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::{GeneratePlanRequest, Trip};

impl ApiClient {
    pub async fn list_trips(&self) -> Result<Vec<Trip>, ApiError> {
        self.get("/api/trips").await
    }

    pub async fn trip(&self, id: Uuid) -> Result<Trip, ApiError> {
        self.get(&format!("/api/trips/{id}")).await
    }

    /// Ask the backend to generate a day-by-day plan for a destination and
    /// date range. The generated trip is persisted server-side.
    pub async fn generate_plan(&self, request: GeneratePlanRequest) -> Result<Trip, ApiError> {
        self.post("/api/trips/generate", &request).await
    }
}
