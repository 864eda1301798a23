//! Platform implementations of the credential storage port.
//!
//! One interface, one implementation per platform, selected at startup in
//! `config::platform_store`.

#[cfg(feature = "web")]
mod browser;
#[cfg(feature = "web")]
pub use browser::BrowserStore;

#[cfg(feature = "native")]
mod device;
#[cfg(feature = "native")]
pub use device::DeviceStore;
