//! Moves and legal move generation.
//!
//! - `action`: the `Move` sum type and its two payloads
//! - `generator`: pure functions enumerating legal moves

pub mod action;
pub mod generator;

pub use action::{DoubleMove, Move, SingleMove};
pub use generator::{
    available_moves, can_move, detective_moves, double_moves, mr_x_moves, occupied_locations,
    single_moves, Occupied,
};
