//! Collection managers for the two persisted collections.
//!
//! `media` owns the movie collection, `reviews` owns the review collection
//! and consults the movie collection read-only when a review is created.
//! Both managers run every mutation as a full load-mutate-save cycle under
//! their own writer lock; the store below them knows nothing about
//! concurrency.

pub mod media;
pub mod reviews;
pub mod validate;
