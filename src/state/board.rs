//! Read-only view of a game in progress.

use im::{OrdSet, Vector};

use crate::core::{Detective, GameSetup, LogEntry, NodeId, Piece, Tickets};
use crate::moves::Move;

/// Queries every game state answers.
///
/// Observers and search code can be written against `Board` without being
/// able to advance the game.
pub trait Board {
    /// The setup this game was built from.
    fn setup(&self) -> &GameSetup;

    /// Every piece in the game, MrX first.
    fn players(&self) -> OrdSet<Piece>;

    /// Where a detective stands, or `None` if that detective is not playing.
    fn detective_location(&self, detective: Detective) -> Option<NodeId>;

    /// A piece's tickets, or `None` if that piece is not playing.
    fn player_tickets(&self, piece: Piece) -> Option<Tickets>;

    /// MrX's travel log so far.
    fn mr_x_travel_log(&self) -> &Vector<LogEntry>;

    /// The winning pieces; empty while the game is on.
    fn winner(&self) -> &OrdSet<Piece>;

    /// Every legal move; empty once the game is over.
    fn available_moves(&self) -> &OrdSet<Move>;

    // === Convenience Methods ===

    /// Check if the game has ended.
    fn is_game_over(&self) -> bool {
        !self.winner().is_empty()
    }
}
