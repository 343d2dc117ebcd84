//! Players: a piece standing somewhere with a ticket inventory.
//!
//! `Player` is an immutable value. Spending tickets, receiving tickets and
//! moving all return a new `Player`; the original is never touched, so old
//! game states keep describing the board exactly as it was.

use serde::{Deserialize, Serialize};

use super::graph::NodeId;
use super::piece::Piece;
use super::ticket::{Ticket, Tickets};

/// A piece, its location, and its tickets.
///
/// ## Example
///
/// ```
/// use scotland_yard::core::{NodeId, Piece, Player, Ticket, Tickets};
///
/// let mr_x = Player::new(Piece::MrX, Tickets::new().with(Ticket::Taxi, 1), NodeId(5));
/// let moved = mr_x.use_ticket(Ticket::Taxi).at(NodeId(6));
///
/// assert_eq!(moved.location(), NodeId(6));
/// assert!(!moved.has(Ticket::Taxi));
/// assert_eq!(mr_x.location(), NodeId(5));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    piece: Piece,
    tickets: Tickets,
    location: NodeId,
}

impl Player {
    /// Create a new player.
    #[must_use]
    pub const fn new(piece: Piece, tickets: Tickets, location: NodeId) -> Self {
        Self {
            piece,
            tickets,
            location,
        }
    }

    #[must_use]
    pub const fn piece(&self) -> Piece {
        self.piece
    }

    #[must_use]
    pub const fn tickets(&self) -> Tickets {
        self.tickets
    }

    #[must_use]
    pub const fn location(&self) -> NodeId {
        self.location
    }

    #[must_use]
    pub const fn is_mr_x(&self) -> bool {
        self.piece.is_mr_x()
    }

    #[must_use]
    pub const fn is_detective(&self) -> bool {
        self.piece.is_detective()
    }

    /// Check if the player holds at least one ticket of this kind.
    #[must_use]
    pub const fn has(&self, ticket: Ticket) -> bool {
        self.tickets.has(ticket)
    }

    /// The same player standing on `location`.
    #[must_use]
    pub const fn at(self, location: NodeId) -> Self {
        Self { location, ..self }
    }

    /// The same player with one ticket spent.
    #[must_use]
    pub fn use_ticket(self, ticket: Ticket) -> Self {
        Self {
            tickets: self.tickets.without(ticket),
            ..self
        }
    }

    /// The same player with every listed ticket spent.
    #[must_use]
    pub fn use_tickets(self, tickets: impl IntoIterator<Item = Ticket>) -> Self {
        tickets.into_iter().fold(self, Player::use_ticket)
    }

    /// The same player with one more ticket.
    #[must_use]
    pub fn give_ticket(self, ticket: Ticket) -> Self {
        Self {
            tickets: self.tickets.plus(ticket),
            ..self
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.piece, self.location)
    }
}
