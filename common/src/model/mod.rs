pub mod media;
pub mod review;
