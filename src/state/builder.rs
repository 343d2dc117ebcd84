//! Builder for opening positions.

use tracing::instrument;

use crate::core::{
    standard_reveal_schedule, Detective, GameError, GameSetup, NodeId, Piece, Player, Tickets,
    TransportGraph,
};

use super::game::GameState;

/// Builder for a new game.
///
/// Defaults to the standard 24-round schedule and the board game's starting
/// tickets; both can be overridden.
///
/// ```
/// use scotland_yard::core::{Detective, NodeId, Transport, TransportGraph};
/// use scotland_yard::state::GameBuilder;
///
/// let graph = TransportGraph::new()
///     .with_edge(NodeId(1), NodeId(2), Transport::Taxi)
///     .with_edge(NodeId(2), NodeId(3), Transport::Taxi);
///
/// let state = GameBuilder::new(graph)
///     .mr_x(NodeId(1))
///     .detective(Detective::Red, NodeId(3))
///     .build()
///     .unwrap();
///
/// assert_eq!(state.round(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct GameBuilder {
    graph: TransportGraph,
    reveal_schedule: Vec<bool>,
    mr_x: Option<Player>,
    detectives: Vec<Player>,
}

impl GameBuilder {
    pub fn new(graph: TransportGraph) -> Self {
        Self {
            graph,
            reveal_schedule: standard_reveal_schedule(),
            mr_x: None,
            detectives: Vec::new(),
        }
    }

    #[must_use]
    pub fn reveal_schedule(mut self, schedule: Vec<bool>) -> Self {
        self.reveal_schedule = schedule;
        self
    }

    /// Place MrX with the standard starting tickets.
    #[must_use]
    pub fn mr_x(self, location: NodeId) -> Self {
        self.mr_x_with_tickets(location, Tickets::default_mr_x())
    }

    #[must_use]
    pub fn mr_x_with_tickets(mut self, location: NodeId, tickets: Tickets) -> Self {
        self.mr_x = Some(Player::new(Piece::MrX, tickets, location));
        self
    }

    /// Seat a detective with the standard starting tickets.
    #[must_use]
    pub fn detective(self, colour: Detective, location: NodeId) -> Self {
        self.detective_with_tickets(colour, location, Tickets::default_detective())
    }

    #[must_use]
    pub fn detective_with_tickets(
        mut self,
        colour: Detective,
        location: NodeId,
        tickets: Tickets,
    ) -> Self {
        self.detectives
            .push(Player::new(Piece::Detective(colour), tickets, location));
        self
    }

    /// Build the opening state, running full validation.
    #[instrument(skip(self), fields(detectives = self.detectives.len()))]
    pub fn build(self) -> Result<GameState, GameError> {
        let mr_x = self.mr_x.ok_or(GameError::MissingMrX)?;
        let setup = GameSetup::new(self.graph, self.reveal_schedule);
        GameState::new(setup, mr_x, self.detectives)
    }
}
