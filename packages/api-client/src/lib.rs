//! HTTP client for the Waypoint backend.
//!
//! Wraps every outgoing request with the stored bearer credential and
//! recovers transparently from a single authorization failure by refreshing
//! the access token and re-issuing the request once. Credentials live behind
//! the [`CredentialStore`] port so each platform (browser storage, on-device
//! file) plugs in its own persistence.

mod auth;
mod board;
mod chat;
mod client;
mod credentials;
mod error;
mod profile;
mod trips;
pub mod types;

pub use client::{ApiClient, Platform};
pub use credentials::{auth_header, Credential, CredentialStore, MemoryStore, SharedStore};
pub use error::{ApiError, StorageError};
