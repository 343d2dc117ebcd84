//! Observable model wrapping a game state.
//!
//! The core never calls back into anything. `Model` is the one place that
//! holds a mutable "current state" and fans out notifications after each
//! move.

pub mod observer;
pub mod game_model;

pub use observer::{Event, Notification, Observer, ObserverId};
pub use game_model::{Model, ModelError};
