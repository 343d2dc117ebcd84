//! Move representation.
//!
//! A move is either a single hop (one ticket, one destination) or MrX's
//! double move (a Double ticket plus two hops). `Move` is a plain sum type;
//! callers match on it instead of going through a visitor.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use crate::core::{NodeId, Piece, Ticket};

/// One hop along a single edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SingleMove {
    pub piece: Piece,
    pub source: NodeId,
    pub ticket: Ticket,
    pub destination: NodeId,
}

impl SingleMove {
    /// Create a new single move.
    #[must_use]
    pub const fn new(piece: Piece, source: NodeId, ticket: Ticket, destination: NodeId) -> Self {
        Self {
            piece,
            source,
            ticket,
            destination,
        }
    }
}

/// Two hops in one turn, paid for with a Double ticket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DoubleMove {
    pub piece: Piece,
    pub source: NodeId,
    pub ticket1: Ticket,
    pub destination1: NodeId,
    pub ticket2: Ticket,
    pub destination2: NodeId,
}

impl DoubleMove {
    /// Chain two single moves made by the same piece.
    ///
    /// `second` must start where `first` ends.
    #[must_use]
    pub fn chain(first: SingleMove, second: SingleMove) -> Self {
        debug_assert_eq!(first.piece, second.piece);
        debug_assert_eq!(first.destination, second.source);
        Self {
            piece: first.piece,
            source: first.source,
            ticket1: first.ticket,
            destination1: first.destination,
            ticket2: second.ticket,
            destination2: second.destination,
        }
    }

    /// The first leg as a single move.
    #[must_use]
    pub const fn first(&self) -> SingleMove {
        SingleMove::new(self.piece, self.source, self.ticket1, self.destination1)
    }

    /// The second leg as a single move.
    #[must_use]
    pub const fn second(&self) -> SingleMove {
        SingleMove::new(self.piece, self.destination1, self.ticket2, self.destination2)
    }
}

/// A complete move.
///
/// ## Example
///
/// ```
/// use scotland_yard::core::{NodeId, Piece, Ticket};
/// use scotland_yard::moves::{Move, SingleMove};
///
/// let mv = Move::from(SingleMove::new(Piece::MrX, NodeId(1), Ticket::Taxi, NodeId(2)));
/// assert_eq!(mv.piece(), Piece::MrX);
/// assert_eq!(mv.destination(), NodeId(2));
/// assert_eq!(mv.tickets().as_slice(), &[Ticket::Taxi]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Move {
    Single(SingleMove),
    Double(DoubleMove),
}

impl Move {
    /// The piece making the move.
    #[must_use]
    pub const fn piece(&self) -> Piece {
        match self {
            Move::Single(m) => m.piece,
            Move::Double(m) => m.piece,
        }
    }

    /// Where the piece ends up.
    #[must_use]
    pub const fn destination(&self) -> NodeId {
        match self {
            Move::Single(m) => m.destination,
            Move::Double(m) => m.destination2,
        }
    }

    /// Every ticket the move consumes. Double moves list the Double ticket last.
    #[must_use]
    pub fn tickets(&self) -> SmallVec<[Ticket; 3]> {
        match self {
            Move::Single(m) => smallvec![m.ticket],
            Move::Double(m) => smallvec![m.ticket1, m.ticket2, Ticket::Double],
        }
    }

    /// Number of travel-log entries this move writes when MrX makes it.
    #[must_use]
    pub const fn log_entries(&self) -> usize {
        match self {
            Move::Single(_) => 1,
            Move::Double(_) => 2,
        }
    }
}

impl From<SingleMove> for Move {
    fn from(m: SingleMove) -> Self {
        Move::Single(m)
    }
}

impl From<DoubleMove> for Move {
    fn from(m: DoubleMove) -> Self {
        Move::Double(m)
    }
}

impl std::fmt::Display for SingleMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} -({})-> {}",
            self.piece, self.source, self.ticket, self.destination
        )
    }
}

impl std::fmt::Display for DoubleMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} -({})-> {} -({})-> {}",
            self.piece, self.source, self.ticket1, self.destination1, self.ticket2, self.destination2
        )
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Single(m) => m.fmt(f),
            Move::Double(m) => m.fmt(f),
        }
    }
}
