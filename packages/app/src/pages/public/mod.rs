//! Public pages

mod landing;

pub use landing::Landing;
