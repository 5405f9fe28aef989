//! Narrative pass-through levels.

use super::{Level, LevelOutcome};
use crate::config::GameConfig;
use crate::console::{Console, ConsoleResult};
use crate::dice::Dice;
use crate::state::StateId;

/// A level that always succeeds without asking anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relay {
    pub number: u8,
    pub scene: &'static str,
    pub next: StateId,
}

impl Level for Relay {
    fn play(
        &self,
        console: &mut dyn Console,
        _dice: &mut dyn Dice,
        _config: &GameConfig,
    ) -> ConsoleResult<LevelOutcome> {
        console.say(&format!("Level {}: {}", self.number, self.scene))?;
        Ok(LevelOutcome::passed(self.next))
    }
}
