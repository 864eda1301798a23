//! API client construction and platform wiring.

use std::sync::Arc;

use waypoint_api::{ApiClient, Platform, SharedStore};

/// Storage port implementation for the current platform.
fn platform_store() -> SharedStore {
    #[cfg(feature = "web")]
    return Arc::new(crate::storage::BrowserStore);

    #[cfg(all(feature = "native", not(feature = "web")))]
    return match crate::storage::DeviceStore::new() {
        Ok(store) => Arc::new(store),
        Err(e) => {
            tracing::warn!("device storage unavailable, falling back to memory: {e}");
            Arc::new(waypoint_api::MemoryStore::new())
        }
    };

    #[cfg(all(not(feature = "web"), not(feature = "native")))]
    Arc::new(waypoint_api::MemoryStore::new())
}

fn base_url() -> String {
    // Same-origin on web; cookies ride along.
    #[cfg(feature = "web")]
    return String::new();

    #[cfg(not(feature = "web"))]
    std::env::var("WAYPOINT_API_URL").unwrap_or_else(|_| "http://localhost:8080".to_string())
}

fn platform() -> Platform {
    if cfg!(feature = "web") {
        Platform::Web
    } else {
        Platform::Native
    }
}

/// Build the API client for this process.
pub fn api_client() -> ApiClient {
    ApiClient::new(base_url(), platform_store(), platform())
}
