//! The observable game model.
//!
//! `Model` owns the current `GameState` and a list of observers. Each
//! successful `choose_move` replaces the state and then notifies every
//! observer in registration order, synchronously.

use derive_more::{Display, Error};
use tracing::{info, instrument};

use crate::core::{GameError, GameSetup, Player};
use crate::moves::Move;
use crate::state::{Board, GameState};

use super::observer::{Event, Observer, ObserverId};

/// Errors raised at the model boundary.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ModelError {
    #[display("{id} is already registered")]
    DuplicateObserver { id: ObserverId },

    #[display("{id} is not registered")]
    UnknownObserver { id: ObserverId },

    /// The underlying game rejected the move.
    #[display("{source}")]
    Game { source: GameError },
}

impl From<GameError> for ModelError {
    fn from(source: GameError) -> Self {
        ModelError::Game { source }
    }
}

/// A game plus the observers watching it.
pub struct Model {
    state: GameState,
    observers: Vec<(ObserverId, Box<dyn Observer>)>,
}

impl Model {
    /// Wrap an existing state.
    #[must_use]
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            observers: Vec::new(),
        }
    }

    /// Build the opening state and wrap it.
    pub fn build(
        setup: GameSetup,
        mr_x: Player,
        detectives: Vec<Player>,
    ) -> Result<Self, GameError> {
        GameState::new(setup, mr_x, detectives).map(Self::new)
    }

    /// The current board.
    #[must_use]
    pub fn current_board(&self) -> &GameState {
        &self.state
    }

    /// Register an observer under `id`.
    pub fn register_observer(
        &mut self,
        id: ObserverId,
        observer: Box<dyn Observer>,
    ) -> Result<(), ModelError> {
        if self.is_registered(id) {
            return Err(ModelError::DuplicateObserver { id });
        }
        self.observers.push((id, observer));
        Ok(())
    }

    /// Remove the observer registered under `id` and hand it back.
    pub fn unregister_observer(&mut self, id: ObserverId) -> Result<Box<dyn Observer>, ModelError> {
        let index = self
            .observers
            .iter()
            .position(|(registered, _)| *registered == id)
            .ok_or(ModelError::UnknownObserver { id })?;
        Ok(self.observers.remove(index).1)
    }

    /// Iterate over registered observer IDs in registration order.
    pub fn observers(&self) -> impl Iterator<Item = ObserverId> + '_ {
        self.observers.iter().map(|(id, _)| *id)
    }

    #[must_use]
    pub fn is_registered(&self, id: ObserverId) -> bool {
        self.observers.iter().any(|(registered, _)| *registered == id)
    }

    /// Play a move and notify every observer.
    ///
    /// An illegal move leaves the model unchanged and notifies nobody.
    #[instrument(skip(self), fields(observers = self.observers.len()))]
    pub fn choose_move(&mut self, mv: &Move) -> Result<Event, ModelError> {
        self.state = self.state.advance(mv)?;

        let event = if self.state.winner().is_empty() {
            Event::MoveMade
        } else {
            info!(winner = ?self.state.winner(), "notifying observers of game over");
            Event::GameOver
        };

        for (_, observer) in &mut self.observers {
            observer.on_model_changed(&self.state, event);
        }
        Ok(event)
    }
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("state", &self.state)
            .field("observers", &self.observers().collect::<Vec<_>>())
            .finish()
    }
}
