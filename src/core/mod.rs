//! Core value types: pieces, tickets, players, the board, the travel log.
//!
//! Everything in this module is an immutable value. Game logic lives in
//! `moves`, `rules` and `state`; this module only describes the pieces the
//! rules move around.

pub mod piece;
pub mod ticket;
pub mod player;
pub mod graph;
pub mod setup;
pub mod log;
pub mod error;

pub use piece::{Detective, Piece};
pub use ticket::{Ticket, Tickets, Transport};
pub use player::Player;
pub use graph::{Edge, NodeId, TransportGraph};
pub use setup::{standard_reveal_schedule, GameSetup};
pub use log::LogEntry;
pub use error::GameError;
