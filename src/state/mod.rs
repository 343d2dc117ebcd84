//! Game state: the immutable position and the `advance` transition.
//!
//! - `board`: the read-only `Board` query trait
//! - `game`: `GameState`, validation, turn order
//! - `builder`: `GameBuilder` for opening positions

pub mod board;
pub mod game;
pub mod builder;

pub use board::Board;
pub use game::{GameState, Phase};
pub use builder::GameBuilder;
