//! Observers and the events they receive.

use std::sync::mpsc::Sender;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::state::GameState;

/// Unique identifier for a registered observer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObserverId(pub u32);

impl std::fmt::Display for ObserverId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Observer({})", self.0)
    }
}

/// What changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Event {
    /// A move was played and the game goes on.
    MoveMade,
    /// A move was played and it ended the game.
    GameOver,
}

/// Something that wants to hear about every move.
pub trait Observer {
    /// Called after each successful move with the new board.
    fn on_model_changed(&mut self, board: &GameState, event: Event);
}

/// A message sent to channel observers.
#[derive(Clone, Debug)]
pub struct Notification {
    pub event: Event,
    pub board: GameState,
}

/// Channel senders observe by forwarding a `Notification`.
///
/// A dropped receiver is not an error for the model; the notification is
/// discarded.
impl Observer for Sender<Notification> {
    fn on_model_changed(&mut self, board: &GameState, event: Event) {
        let notification = Notification {
            event,
            board: board.clone(),
        };
        if self.send(notification).is_err() {
            debug!(?event, "observer channel closed, notification dropped");
        }
    }
}
