//! Level mini-games.
//!
//! A level talks to the player and reports a [`LevelOutcome`]. Levels never
//! touch the game state themselves: lives are only changed by the
//! level-result handler in [`crate::handlers`].

pub mod desert;
pub mod divisibility;
pub mod gate;
pub mod relay;

use crate::config::GameConfig;
use crate::console::{Console, ConsoleResult};
use crate::dice::Dice;
use crate::state::StateId;

pub use desert::DesertRoad;
pub use divisibility::{Divisibility, Division};
pub use gate::Gate;
pub use relay::Relay;

/// What a level reports back to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelOutcome {
    /// Whether the player beat the challenge.
    pub success: bool,
    /// Where to go next. On failure this is the retry or regression target.
    pub next: StateId,
    /// Refill lives to the starting amount.
    pub restore_lives: bool,
}

impl LevelOutcome {
    pub fn passed(next: StateId) -> Self {
        Self {
            success: true,
            next,
            restore_lives: false,
        }
    }

    pub fn failed(next: StateId) -> Self {
        Self {
            success: false,
            next,
            restore_lives: false,
        }
    }

    /// Success that also refills lives.
    pub fn rested(next: StateId) -> Self {
        Self {
            success: true,
            next,
            restore_lives: true,
        }
    }
}

/// An interactive challenge.
pub trait Level {
    /// Run the challenge to completion.
    fn play(
        &self,
        console: &mut dyn Console,
        dice: &mut dyn Dice,
        config: &GameConfig,
    ) -> ConsoleResult<LevelOutcome>;
}
