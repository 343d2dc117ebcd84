//! Tickets, transport modes, and ticket inventories.
//!
//! ## Tickets
//!
//! Every move consumes a ticket. Taxi, bus and underground tickets match
//! the transport mode of the edge travelled. Secret tickets stand in for any
//! mode (and are the only way to take a ferry). Double tickets let MrX chain
//! two moves in one turn.
//!
//! ## Tickets inventory
//!
//! `Tickets` is a fixed-size count table, one slot per ticket kind. It is
//! `Copy`, so deriving a new inventory never allocates.

use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Ticket kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Ticket {
    Taxi,
    Bus,
    Underground,
    Double,
    Secret,
}

impl Ticket {
    /// Number of ticket kinds.
    pub const COUNT: usize = 5;

    /// All ticket kinds in table order.
    pub const ALL: [Ticket; Ticket::COUNT] = [
        Ticket::Taxi,
        Ticket::Bus,
        Ticket::Underground,
        Ticket::Double,
        Ticket::Secret,
    ];

    /// Slot of this kind in a `Tickets` table.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Secret and Double tickets may only be held by MrX.
    #[must_use]
    pub const fn is_special(self) -> bool {
        matches!(self, Ticket::Double | Ticket::Secret)
    }
}

impl std::fmt::Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Ticket::Taxi => "taxi",
            Ticket::Bus => "bus",
            Ticket::Underground => "underground",
            Ticket::Double => "double",
            Ticket::Secret => "secret",
        };
        f.write_str(name)
    }
}

/// Transport modes carried by graph edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Transport {
    Taxi,
    Bus,
    Underground,
    Ferry,
}

impl Transport {
    /// The ticket needed to travel by this mode.
    #[must_use]
    pub const fn required_ticket(self) -> Ticket {
        match self {
            Transport::Taxi => Ticket::Taxi,
            Transport::Bus => Ticket::Bus,
            Transport::Underground => Ticket::Underground,
            Transport::Ferry => Ticket::Secret,
        }
    }
}

impl std::fmt::Display for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Transport::Taxi => "taxi",
            Transport::Bus => "bus",
            Transport::Underground => "underground",
            Transport::Ferry => "ferry",
        };
        f.write_str(name)
    }
}

/// Ticket inventory: one non-negative count per ticket kind.
///
/// ```
/// use scotland_yard::core::{Ticket, Tickets};
///
/// let tickets = Tickets::new().with(Ticket::Taxi, 2).with(Ticket::Secret, 1);
/// assert_eq!(tickets[Ticket::Taxi], 2);
///
/// let spent = tickets.without(Ticket::Taxi);
/// assert_eq!(spent[Ticket::Taxi], 1);
/// assert_eq!(tickets[Ticket::Taxi], 2); // original untouched
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tickets {
    counts: [u32; Ticket::COUNT],
}

impl Tickets {
    /// Create an empty inventory.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counts: [0; Ticket::COUNT],
        }
    }

    /// MrX's starting inventory in the board game.
    #[must_use]
    pub const fn default_mr_x() -> Self {
        Self {
            counts: [4, 3, 3, 2, 5],
        }
    }

    /// A detective's starting inventory in the board game.
    #[must_use]
    pub const fn default_detective() -> Self {
        Self {
            counts: [11, 8, 4, 0, 0],
        }
    }

    /// Set the count of one kind (builder pattern).
    #[must_use]
    pub fn with(mut self, ticket: Ticket, count: u32) -> Self {
        self.counts[ticket.index()] = count;
        self
    }

    /// Get the count of one kind.
    #[must_use]
    pub const fn count(&self, ticket: Ticket) -> u32 {
        self.counts[ticket.index()]
    }

    /// Check if at least one ticket of this kind is held.
    #[must_use]
    pub const fn has(&self, ticket: Ticket) -> bool {
        self.count(ticket) > 0
    }

    /// A copy with one more ticket of this kind.
    #[must_use]
    pub fn plus(mut self, ticket: Ticket) -> Self {
        self.counts[ticket.index()] = self.counts[ticket.index()].saturating_add(1);
        self
    }

    /// A copy with one ticket of this kind removed.
    ///
    /// Callers only spend tickets for moves already known to be legal, so
    /// an empty slot stays at zero.
    #[must_use]
    pub fn without(mut self, ticket: Ticket) -> Self {
        debug_assert!(self.has(ticket), "spending a {} ticket that is not held", ticket);
        self.counts[ticket.index()] = self.counts[ticket.index()].saturating_sub(1);
        self
    }

    /// Iterate over (Ticket, count) pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (Ticket, u32)> + '_ {
        Ticket::ALL.iter().map(move |&t| (t, self.count(t)))
    }
}

impl Index<Ticket> for Tickets {
    type Output = u32;

    fn index(&self, ticket: Ticket) -> &Self::Output {
        &self.counts[ticket.index()]
    }
}
