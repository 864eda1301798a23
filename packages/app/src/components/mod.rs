//! Reusable UI components

mod layout;
mod loading;
mod message;
mod nav;
mod notice;
mod post_card;
mod trip_card;

pub use layout::*;
pub use loading::*;
pub use message::*;
pub use nav::*;
pub use notice::*;
pub use post_card::*;
pub use trip_card::*;
