//! Auth-flow pages

mod login;
mod verify_phone;

pub use login::Login;
pub use verify_phone::VerifyPhone;
