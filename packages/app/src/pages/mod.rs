//! Page components

pub mod auth;
pub mod member;
pub mod public;
