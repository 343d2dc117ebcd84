//! MrX's travel log.
//!
//! Every MrX move appends one entry (two for a double move). The ticket is
//! always public; the destination only on reveal rounds.

use serde::{Deserialize, Serialize};

use super::graph::NodeId;
use super::ticket::Ticket;

/// One travel-log entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogEntry {
    /// MrX surfaced: ticket and destination are known.
    Revealed { ticket: Ticket, location: NodeId },
    /// Only the ticket is known.
    Hidden { ticket: Ticket },
}

impl LogEntry {
    /// Build the entry for a move, revealing the destination if `reveal`.
    #[must_use]
    pub const fn for_move(ticket: Ticket, destination: NodeId, reveal: bool) -> Self {
        if reveal {
            LogEntry::Revealed {
                ticket,
                location: destination,
            }
        } else {
            LogEntry::Hidden { ticket }
        }
    }

    #[must_use]
    pub const fn ticket(&self) -> Ticket {
        match self {
            LogEntry::Revealed { ticket, .. } | LogEntry::Hidden { ticket } => *ticket,
        }
    }

    /// The destination, if revealed.
    #[must_use]
    pub const fn location(&self) -> Option<NodeId> {
        match self {
            LogEntry::Revealed { location, .. } => Some(*location),
            LogEntry::Hidden { .. } => None,
        }
    }
}

impl std::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogEntry::Revealed { ticket, location } => write!(f, "{} to {}", ticket, location),
            LogEntry::Hidden { ticket } => write!(f, "{} to ?", ticket),
        }
    }
}
