//! Game Review API
//!
//! A small REST service over three related records:
//! - games, each with an optional non-negative price
//! - users
//! - reviews scoring a game from 1 to 10 on behalf of a user
//!
//! Reviews can be created, patched and deleted; games and users are read-only
//! over HTTP and are populated by [`seed`].

pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod routes;
pub mod seed;
pub mod state;
pub mod views;
