//! `SeaORM` entities for the game review catalogue.
//!
//! A review belongs to exactly one game and one user. Games and users reach
//! their reviews by query through the `Related` impls, never through embedded
//! back-pointers.

pub mod game;
pub mod review;
pub mod user;

mod validation;

pub use validation::ValidationError;
