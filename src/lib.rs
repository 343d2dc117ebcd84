//! # scotland-yard
//!
//! An immutable rules engine for the Scotland Yard pursuit board game.
//!
//! One fugitive, MrX, evades a group of detectives on a transport graph.
//! Every move spends a ticket; MrX's destination is only revealed on
//! certain rounds, and he can hide his mode of transport (Secret tickets)
//! or move twice in one turn (Double tickets).
//!
//! ## Design Principles
//!
//! 1. **States are values**: `GameState::advance` returns a new state and
//!    never mutates its receiver. Keep as many past states as you like.
//!
//! 2. **Validated on construction**: every state, including each one
//!    produced by `advance`, re-checks the game's invariants and recomputes
//!    the winner and legal moves.
//!
//! 3. **No ambient state**: move generation and win evaluation are pure
//!    functions of the setup and players they are handed.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) cloning via `im-rs`, so search
//!   code can branch on hypothetical futures cheaply.
//!
//! - **Ordered sets**: legal moves, winners and the remaining set are
//!   `im::OrdSet`s, so iteration order is deterministic.
//!
//! ## Modules
//!
//! - `core`: pieces, tickets, players, the transport graph, setup, travel log, errors
//! - `moves`: the `Move` sum type and legal move generation
//! - `rules`: win evaluation
//! - `state`: `GameState`, the `Board` query trait, `GameBuilder`
//! - `model`: observable wrapper notifying observers after each move

pub mod core;
pub mod moves;
pub mod rules;
pub mod state;
pub mod model;

// Re-export commonly used types
pub use crate::core::{
    Detective, Piece,
    Ticket, Tickets, Transport,
    Player,
    NodeId, Edge, TransportGraph,
    GameSetup, standard_reveal_schedule,
    LogEntry,
    GameError,
};

pub use crate::moves::{Move, SingleMove, DoubleMove};

pub use crate::rules::Victory;

pub use crate::state::{Board, GameState, GameBuilder, Phase};

pub use crate::model::{Model, ModelError, Observer, ObserverId, Event, Notification};
