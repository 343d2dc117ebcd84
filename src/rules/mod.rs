//! Win evaluation.
//!
//! `winner` is computed fresh for every game state; nothing is cached
//! between positions.

pub mod winner;

pub use winner::{victory, winner, Victory};
