//! Win conditions.
//!
//! Checked in order, first match wins:
//!
//! 1. A detective stands on MrX: the detectives win.
//! 2. The travel log is full and the detectives have answered MrX's last
//!    move: MrX wins.
//! 3. It is MrX's turn and he has no move at all: the detectives win.
//! 4. No detective has a legal move, whoever is to act: MrX wins.
//!
//! Both full-log and cornered checks only apply on MrX's turn, so the
//! detectives always get their reply to MrX's final move.
//!
//! The winner is always a set: every detective, or MrX alone.

use im::{OrdSet, Vector};

use crate::core::{GameSetup, Piece, Player};
use crate::moves::{can_move, double_moves, occupied_locations, single_moves};

/// Which rule ended the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Victory {
    /// A detective caught MrX.
    Capture,
    /// MrX had no legal move on his turn.
    Cornered,
    /// Every detective is stuck.
    DetectivesStuck,
    /// MrX survived every round, detectives' replies included.
    Escaped,
}

impl Victory {
    /// Check if this victory goes to the detectives.
    #[must_use]
    pub const fn detectives_win(self) -> bool {
        matches!(self, Victory::Capture | Victory::Cornered)
    }
}

/// Evaluate the win conditions against one position.
///
/// `remaining` decides whether it is MrX's turn; `log_len` is the number of
/// travel-log entries written so far.
#[must_use]
pub fn victory(
    setup: &GameSetup,
    mr_x: &Player,
    detectives: &Vector<Player>,
    remaining: &OrdSet<Piece>,
    log_len: usize,
) -> Option<Victory> {
    if detectives.iter().any(|d| d.location() == mr_x.location()) {
        return Some(Victory::Capture);
    }

    let mr_x_turn = remaining.contains(&mr_x.piece());

    if mr_x_turn && log_len >= setup.rounds() {
        return Some(Victory::Escaped);
    }

    if mr_x_turn && is_cornered(setup, mr_x, detectives, log_len) {
        return Some(Victory::Cornered);
    }

    if detectives.iter().all(|d| !can_move(setup, detectives, d)) {
        return Some(Victory::DetectivesStuck);
    }

    None
}

/// The set of winning pieces; empty while the game is on.
#[must_use]
pub fn winner(
    setup: &GameSetup,
    mr_x: &Player,
    detectives: &Vector<Player>,
    remaining: &OrdSet<Piece>,
    log_len: usize,
) -> OrdSet<Piece> {
    match victory(setup, mr_x, detectives, remaining, log_len) {
        Some(v) if v.detectives_win() => detectives.iter().map(Player::piece).collect(),
        Some(_) => OrdSet::unit(mr_x.piece()),
        None => OrdSet::new(),
    }
}

/// MrX has neither a single nor a double move.
fn is_cornered(
    setup: &GameSetup,
    mr_x: &Player,
    detectives: &Vector<Player>,
    log_len: usize,
) -> bool {
    let occupied = occupied_locations(detectives, mr_x.piece());
    let source = mr_x.location();
    let rounds_remaining = setup.rounds().saturating_sub(log_len);

    single_moves(setup, &occupied, mr_x, source).is_empty()
        && double_moves(setup, &occupied, mr_x, source, rounds_remaining).is_empty()
}
