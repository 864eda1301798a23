//! Protected pages for signed-in members

mod board;
mod chat;
mod chat_room;
mod profile;
mod trip_detail;
mod trips;

pub use board::Board;
pub use chat::Chat;
pub use chat_room::ChatRoom;
pub use profile::Profile;
pub use trip_detail::TripDetail;
pub use trips::Trips;
