//! Game construction and transition errors.
//!
//! Every error here is a configuration or programming error: a setup that
//! breaks the rules, or a move the current state does not allow. None are
//! retryable.

use derive_more::{Display, Error};

use super::graph::NodeId;
use super::piece::Piece;
use super::ticket::Ticket;
use crate::moves::Move;

/// Errors raised while building or advancing a game.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The reveal schedule has no rounds.
    #[display("reveal schedule is empty")]
    EmptySchedule,

    /// The transport graph has no edges.
    #[display("transport graph has no edges")]
    EmptyGraph,

    #[display("no detectives supplied")]
    NoDetectives,

    #[display("MrX was never placed on the board")]
    MissingMrX,

    /// The player given as MrX carries a detective piece.
    #[display("{piece} cannot play as MrX")]
    MrXMisconfigured { piece: Piece },

    /// A player in the detective list carries the MrX piece.
    #[display("{piece} cannot play as a detective")]
    NotADetective { piece: Piece },

    #[display("{piece} holds a {ticket} ticket")]
    SpecialTicketHeld { piece: Piece, ticket: Ticket },

    #[display("{piece} appears more than once")]
    DuplicateDetective { piece: Piece },

    #[display("{first} and {second} both stand on {location}")]
    SharedLocation {
        location: NodeId,
        first: Piece,
        second: Piece,
    },

    /// A player stands on a node that is not in the graph.
    #[display("{piece} stands on unknown location {location}")]
    UnknownLocation { piece: Piece, location: NodeId },

    #[display("travel log has {length} entries but the game only has {rounds} rounds")]
    LogOverflow { length: usize, rounds: usize },

    /// The move is not in the current legal move set.
    #[display("illegal move: {mv}")]
    IllegalMove { mv: Move },

    /// A deserialized edge links a node to itself.
    #[display("invalid edge {from} -> {to}")]
    InvalidEdge { from: NodeId, to: NodeId },
}
