//! Game setup: the board plus the reveal schedule.
//!
//! The reveal schedule has one entry per round. When MrX moves in a round
//! whose entry is `true`, his destination is written to the travel log;
//! otherwise only the ticket he used is. The number of rounds in the game is
//! the schedule length.

use serde::{Deserialize, Serialize};

use super::graph::TransportGraph;

/// Rounds (1-based) on which MrX surfaces in the standard game.
const STANDARD_REVEAL_ROUNDS: [usize; 5] = [3, 8, 13, 18, 24];

/// Rounds in the standard game.
const STANDARD_ROUNDS: usize = 24;

/// The standard 24-round schedule, revealing MrX on rounds 3, 8, 13, 18 and 24.
#[must_use]
pub fn standard_reveal_schedule() -> Vec<bool> {
    (1..=STANDARD_ROUNDS)
        .map(|round| STANDARD_REVEAL_ROUNDS.contains(&round))
        .collect()
}

/// Immutable game configuration.
///
/// Validation happens when a `GameState` is built from it, not here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSetup {
    /// The board.
    pub graph: TransportGraph,

    /// One entry per round: is MrX revealed after moving in that round?
    pub reveal_schedule: Vec<bool>,
}

impl GameSetup {
    /// Create a new setup.
    #[must_use]
    pub fn new(graph: TransportGraph, reveal_schedule: Vec<bool>) -> Self {
        Self {
            graph,
            reveal_schedule,
        }
    }

    /// Total number of rounds.
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.reveal_schedule.len()
    }

    /// Is MrX revealed on the round with this 0-based index?
    ///
    /// Rounds past the end of the schedule are never revealed.
    #[must_use]
    pub fn is_reveal_round(&self, round: usize) -> bool {
        self.reveal_schedule.get(round).copied().unwrap_or(false)
    }
}
