pub mod media;
pub mod reviews;
