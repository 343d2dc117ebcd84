//! The game state and its one transition, `advance`.
//!
//! ## Turn order
//!
//! A round starts with MrX alone in the remaining set. Once he moves, every
//! detective that has a legal move is owed a turn; each detective leaves the
//! set as it moves. When nobody is left, MrX is up again.
//!
//! A detective with no legal move is never put into (or kept in) the
//! remaining set, so a stuck detective cannot stall the round. Stuckness is
//! re-checked every time the set is rebuilt: a detective blocked this round
//! may play again next round.
//!
//! ## Immutability
//!
//! `advance` never touches its receiver. It returns a new state built
//! through the same validating constructor as the first one, which also
//! recomputes the winner and the legal moves. All collections are `im`
//! persistent structures and the setup is shared, so states are cheap to
//! clone and keep around.

use std::sync::Arc;

use im::{OrdSet, Vector};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, info, instrument, warn};

use crate::core::{
    Detective, GameError, GameSetup, LogEntry, NodeId, Piece, Player, Ticket, Tickets,
};
use crate::moves::{available_moves, can_move, Move};
use crate::rules::winner;

use super::board::Board;

/// Where the game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// MrX is to move.
    MrXToMove,
    /// Some detectives still owe a move this round.
    DetectivesToMove,
    /// Someone won. No further moves are accepted.
    GameOver,
}

/// Immutable snapshot of a game.
#[derive(Clone, Debug)]
pub struct GameState {
    setup: Arc<GameSetup>,

    /// Pieces still owed a move this round.
    remaining: OrdSet<Piece>,

    log: Vector<LogEntry>,

    mr_x: Player,

    /// Detectives in seating order.
    detectives: Vector<Player>,

    // === Derived at construction ===
    winner: OrdSet<Piece>,

    moves: OrdSet<Move>,
}

impl GameState {
    /// Build the opening state: empty log, MrX to move.
    ///
    /// Fails if the setup or the players break the rules (see `GameError`).
    #[instrument(skip_all, fields(detectives = detectives.len()))]
    pub fn new(
        setup: impl Into<Arc<GameSetup>>,
        mr_x: Player,
        detectives: Vec<Player>,
    ) -> Result<Self, GameError> {
        let state = Self::from_parts(
            setup.into(),
            OrdSet::unit(mr_x.piece()),
            Vector::new(),
            mr_x,
            detectives.into_iter().collect(),
        );

        match &state {
            Ok(state) => debug!(
                rounds = state.setup.rounds(),
                edges = state.setup.graph.edge_count(),
                "game created"
            ),
            Err(err) => warn!(%err, "rejected game configuration"),
        }
        state
    }

    /// Validate the parts and derive the winner and legal moves.
    fn from_parts(
        setup: Arc<GameSetup>,
        remaining: OrdSet<Piece>,
        log: Vector<LogEntry>,
        mr_x: Player,
        detectives: Vector<Player>,
    ) -> Result<Self, GameError> {
        validate(&setup, &mr_x, &detectives, &log)?;

        let winner = winner(&setup, &mr_x, &detectives, &remaining, log.len());
        let moves = if winner.is_empty() {
            let rounds_remaining = setup.rounds().saturating_sub(log.len());
            available_moves(&setup, &mr_x, &detectives, &remaining, rounds_remaining)
        } else {
            OrdSet::new()
        };
        debug_assert_ne!(winner.is_empty(), moves.is_empty());

        Ok(Self {
            setup,
            remaining,
            log,
            mr_x,
            detectives,
            winner,
            moves,
        })
    }

    /// Play a move, producing the next state.
    ///
    /// The move must be one of `available_moves()`; anything else (including
    /// any move once the game is over) fails with `GameError::IllegalMove`.
    #[instrument(skip(self), fields(round = self.log.len()))]
    pub fn advance(&self, mv: &Move) -> Result<GameState, GameError> {
        if !self.moves.contains(mv) {
            warn!(%mv, "rejected illegal move");
            return Err(GameError::IllegalMove { mv: *mv });
        }

        let mut mr_x = self.mr_x;
        let mut detectives = self.detectives.clone();
        let mut log = self.log.clone();

        match *mv {
            Move::Single(m) if m.piece.is_mr_x() => {
                mr_x = mr_x.use_ticket(m.ticket).at(m.destination);
                log.push_back(self.log_entry(log.len(), m.ticket, m.destination));
            }
            Move::Single(m) => {
                let index = detectives
                    .iter()
                    .position(|d| d.piece() == m.piece)
                    .ok_or(GameError::IllegalMove { mv: *mv })?;
                let moved = detectives[index].use_ticket(m.ticket).at(m.destination);
                detectives = detectives.update(index, moved);
                // Spent detective tickets go to MrX
                mr_x = mr_x.give_ticket(m.ticket);
            }
            Move::Double(m) => {
                // Only MrX can hold a Double ticket
                mr_x = mr_x
                    .use_tickets([Ticket::Double, m.ticket1, m.ticket2])
                    .at(m.destination2);
                for leg in [m.first(), m.second()] {
                    log.push_back(self.log_entry(log.len(), leg.ticket, leg.destination));
                }
            }
        }

        let remaining = self.next_remaining(mv.piece(), &detectives);
        debug!(%mv, ?remaining, "applied move");

        let next = Self::from_parts(Arc::clone(&self.setup), remaining, log, mr_x, detectives)?;
        if !next.winner.is_empty() {
            info!(winner = ?next.winner, round = next.round(), "game over");
        }
        Ok(next)
    }

    /// Log entry for MrX reaching `destination` as entry number `index`.
    fn log_entry(&self, index: usize, ticket: Ticket, destination: NodeId) -> LogEntry {
        LogEntry::for_move(ticket, destination, self.setup.is_reveal_round(index))
    }

    /// Remaining set after `mover` has moved, given the updated detectives.
    fn next_remaining(&self, mover: Piece, detectives: &Vector<Player>) -> OrdSet<Piece> {
        let movable = |d: &&Player| can_move(&self.setup, detectives, d);

        if mover.is_mr_x() {
            return detectives.iter().filter(movable).map(Player::piece).collect();
        }

        let pending: OrdSet<Piece> = detectives
            .iter()
            .filter(|d| d.piece() != mover && self.remaining.contains(&d.piece()))
            .filter(movable)
            .map(Player::piece)
            .collect();

        if pending.is_empty() {
            OrdSet::unit(self.mr_x.piece())
        } else {
            pending
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn mr_x(&self) -> &Player {
        &self.mr_x
    }

    #[must_use]
    pub fn detectives(&self) -> &Vector<Player> {
        &self.detectives
    }

    /// Pieces still owed a move this round.
    #[must_use]
    pub fn remaining(&self) -> &OrdSet<Piece> {
        &self.remaining
    }

    /// Number of MrX moves logged so far.
    #[must_use]
    pub fn round(&self) -> usize {
        self.log.len()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if !self.winner.is_empty() {
            Phase::GameOver
        } else if self.remaining.contains(&self.mr_x.piece()) {
            Phase::MrXToMove
        } else {
            Phase::DetectivesToMove
        }
    }

    fn player(&self, piece: Piece) -> Option<&Player> {
        if piece.is_mr_x() {
            Some(&self.mr_x)
        } else {
            self.detectives.iter().find(|d| d.piece() == piece)
        }
    }
}

impl Board for GameState {
    fn setup(&self) -> &GameSetup {
        &self.setup
    }

    fn players(&self) -> OrdSet<Piece> {
        std::iter::once(&self.mr_x)
            .chain(self.detectives.iter())
            .map(Player::piece)
            .collect()
    }

    fn detective_location(&self, detective: Detective) -> Option<NodeId> {
        self.player(Piece::Detective(detective)).map(Player::location)
    }

    fn player_tickets(&self, piece: Piece) -> Option<Tickets> {
        self.player(piece).map(Player::tickets)
    }

    fn mr_x_travel_log(&self) -> &Vector<LogEntry> {
        &self.log
    }

    fn winner(&self) -> &OrdSet<Piece> {
        &self.winner
    }

    fn available_moves(&self) -> &OrdSet<Move> {
        &self.moves
    }
}

/// Check every construction invariant.
fn validate(
    setup: &GameSetup,
    mr_x: &Player,
    detectives: &Vector<Player>,
    log: &Vector<LogEntry>,
) -> Result<(), GameError> {
    if setup.reveal_schedule.is_empty() {
        return Err(GameError::EmptySchedule);
    }
    if setup.graph.is_empty() {
        return Err(GameError::EmptyGraph);
    }
    if detectives.is_empty() {
        return Err(GameError::NoDetectives);
    }
    if !mr_x.is_mr_x() {
        return Err(GameError::MrXMisconfigured { piece: mr_x.piece() });
    }
    check_location(setup, mr_x)?;

    let mut pieces = FxHashSet::default();
    let mut locations: FxHashMap<NodeId, Piece> = FxHashMap::default();

    for detective in detectives {
        let piece = detective.piece();
        if !piece.is_detective() {
            return Err(GameError::NotADetective { piece });
        }
        if let Some((ticket, _)) = detective
            .tickets()
            .iter()
            .find(|&(t, n)| t.is_special() && n > 0)
        {
            return Err(GameError::SpecialTicketHeld { piece, ticket });
        }
        if !pieces.insert(piece) {
            return Err(GameError::DuplicateDetective { piece });
        }
        if let Some(&first) = locations.get(&detective.location()) {
            return Err(GameError::SharedLocation {
                location: detective.location(),
                first,
                second: piece,
            });
        }
        locations.insert(detective.location(), piece);
        check_location(setup, detective)?;
    }

    if log.len() > setup.rounds() {
        return Err(GameError::LogOverflow {
            length: log.len(),
            rounds: setup.rounds(),
        });
    }

    Ok(())
}

fn check_location(setup: &GameSetup, player: &Player) -> Result<(), GameError> {
    if setup.graph.contains_node(player.location()) {
        Ok(())
    } else {
        Err(GameError::UnknownLocation {
            piece: player.piece(),
            location: player.location(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Transport, TransportGraph};
    use crate::moves::SingleMove;

    const RED: Piece = Piece::Detective(Detective::Red);
    const BLUE: Piece = Piece::Detective(Detective::Blue);

    /// 1 - 2 - 3 - 4 in a line, taxi only, plus a bus 1 - 4.
    fn setup(schedule: Vec<bool>) -> GameSetup {
        let graph = TransportGraph::new()
            .with_edge(NodeId(1), NodeId(2), Transport::Taxi)
            .with_edge(NodeId(2), NodeId(3), Transport::Taxi)
            .with_edge(NodeId(3), NodeId(4), Transport::Taxi)
            .with_edge(NodeId(1), NodeId(4), Transport::Bus);
        GameSetup::new(graph, schedule)
    }

    fn taxis(n: u32) -> Tickets {
        Tickets::new().with(Ticket::Taxi, n)
    }

    fn single(piece: Piece, from: u32, ticket: Ticket, to: u32) -> Move {
        Move::Single(SingleMove::new(piece, NodeId(from), ticket, NodeId(to)))
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::new(
            setup(vec![true; 3]),
            Player::new(Piece::MrX, taxis(2), NodeId(1)),
            vec![Player::new(RED, taxis(2), NodeId(3))],
        )
        .unwrap();

        assert_eq!(state.round(), 0);
        assert_eq!(state.phase(), Phase::MrXToMove);
        assert_eq!(state.remaining(), &OrdSet::unit(Piece::MrX));
        assert!(state.mr_x_travel_log().is_empty());
        assert!(state.winner().is_empty());
        assert!(state.available_moves().iter().all(|m| m.piece() == Piece::MrX));
    }

    #[test]
    fn test_validation_errors() {
        let mr_x = Player::new(Piece::MrX, taxis(1), NodeId(1));
        let red = Player::new(RED, taxis(1), NodeId(3));

        assert_eq!(
            GameState::new(setup(vec![]), mr_x, vec![red]).unwrap_err(),
            GameError::EmptySchedule
        );
        assert_eq!(
            GameState::new(GameSetup::new(TransportGraph::new(), vec![true]), mr_x, vec![red])
                .unwrap_err(),
            GameError::EmptyGraph
        );
        assert_eq!(
            GameState::new(setup(vec![true]), mr_x, vec![]).unwrap_err(),
            GameError::NoDetectives
        );
        assert_eq!(
            GameState::new(setup(vec![true]), red, vec![red.at(NodeId(4))]).unwrap_err(),
            GameError::MrXMisconfigured { piece: RED }
        );
        assert_eq!(
            GameState::new(setup(vec![true]), mr_x, vec![mr_x.at(NodeId(3))]).unwrap_err(),
            GameError::NotADetective { piece: Piece::MrX }
        );
        assert_eq!(
            GameState::new(setup(vec![true]), mr_x, vec![red, red.at(NodeId(4))]).unwrap_err(),
            GameError::DuplicateDetective { piece: RED }
        );
        assert_eq!(
            GameState::new(setup(vec![true]), mr_x, vec![red.at(NodeId(99))]).unwrap_err(),
            GameError::UnknownLocation {
                piece: RED,
                location: NodeId(99)
            }
        );
    }

    #[test]
    fn test_shared_location_rejected() {
        let mr_x = Player::new(Piece::MrX, taxis(1), NodeId(1));
        let red = Player::new(RED, taxis(1), NodeId(3));
        let blue = Player::new(BLUE, taxis(1), NodeId(3));

        assert_eq!(
            GameState::new(setup(vec![true]), mr_x, vec![red, blue]).unwrap_err(),
            GameError::SharedLocation {
                location: NodeId(3),
                first: RED,
                second: BLUE
            }
        );
    }

    #[test]
    fn test_special_tickets_rejected_for_detectives() {
        let mr_x = Player::new(Piece::MrX, taxis(1), NodeId(1));
        let red = Player::new(RED, taxis(1).with(Ticket::Double, 1), NodeId(3));

        assert_eq!(
            GameState::new(setup(vec![true]), mr_x, vec![red]).unwrap_err(),
            GameError::SpecialTicketHeld {
                piece: RED,
                ticket: Ticket::Double
            }
        );
    }

    #[test]
    fn test_advance_does_not_mutate_receiver() {
        let state = GameState::new(
            setup(vec![false; 3]),
            Player::new(Piece::MrX, taxis(2), NodeId(1)),
            vec![Player::new(RED, taxis(2), NodeId(3))],
        )
        .unwrap();

        let next = state.advance(&single(Piece::MrX, 1, Ticket::Taxi, 2)).unwrap();

        assert_eq!(state.mr_x().location(), NodeId(1));
        assert_eq!(state.round(), 0);
        assert_eq!(next.mr_x().location(), NodeId(2));
        assert_eq!(next.round(), 1);
        assert_eq!(next.phase(), Phase::DetectivesToMove);
    }

    #[test]
    fn test_detective_ticket_goes_to_mr_x() {
        let state = GameState::new(
            setup(vec![false; 3]),
            Player::new(Piece::MrX, taxis(1), NodeId(1)),
            vec![Player::new(RED, taxis(2), NodeId(4))],
        )
        .unwrap();

        let state = state.advance(&single(Piece::MrX, 1, Ticket::Taxi, 2)).unwrap();
        assert_eq!(state.player_tickets(Piece::MrX).unwrap()[Ticket::Taxi], 0);

        let state = state.advance(&single(RED, 4, Ticket::Taxi, 3)).unwrap();
        assert_eq!(state.player_tickets(Piece::MrX).unwrap()[Ticket::Taxi], 1);
        assert_eq!(state.player_tickets(RED).unwrap()[Ticket::Taxi], 1);
        assert_eq!(state.detective_location(Detective::Red), Some(NodeId(3)));
        assert_eq!(state.phase(), Phase::MrXToMove);
    }

    #[test]
    fn test_illegal_move_rejected() {
        let state = GameState::new(
            setup(vec![false; 3]),
            Player::new(Piece::MrX, taxis(1), NodeId(1)),
            vec![Player::new(RED, taxis(2), NodeId(4))],
        )
        .unwrap();

        // Red is not to move yet
        let mv = single(RED, 4, Ticket::Taxi, 3);
        assert_eq!(state.advance(&mv).unwrap_err(), GameError::IllegalMove { mv });
    }

    #[test]
    fn test_players_and_unknown_pieces() {
        let state = GameState::new(
            setup(vec![false; 3]),
            Player::new(Piece::MrX, taxis(1), NodeId(1)),
            vec![Player::new(RED, taxis(2), NodeId(4))],
        )
        .unwrap();

        assert_eq!(state.players(), [Piece::MrX, RED].into_iter().collect::<OrdSet<_>>());
        assert_eq!(state.detective_location(Detective::Blue), None);
        assert_eq!(state.player_tickets(BLUE), None);
    }
}
