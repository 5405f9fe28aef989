//! Keyword gates: say the right word or fall back.

use super::{Level, LevelOutcome};
use crate::config::GameConfig;
use crate::console::{read_validated, Console, ConsoleResult};
use crate::dice::Dice;
use crate::state::StateId;

const INVALID: &str = "Invalid input. Say something.";

/// A level passed by answering with one exact keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gate {
    pub number: u8,
    /// Scene text shown before the prompt.
    pub scene: &'static str,
    pub prompt: &'static str,
    /// Compared case-insensitively after trimming.
    pub keyword: &'static str,
    /// Shown on the right answer.
    pub reward: &'static str,
    /// Shown on a wrong answer.
    pub rebuke: &'static str,
    pub on_success: StateId,
    /// Retry of this gate, or an earlier level.
    pub on_failure: StateId,
}

impl Gate {
    pub fn accepts(&self, answer: &str) -> bool {
        answer.trim().eq_ignore_ascii_case(self.keyword)
    }
}

impl Level for Gate {
    fn play(
        &self,
        console: &mut dyn Console,
        _dice: &mut dyn Dice,
        _config: &GameConfig,
    ) -> ConsoleResult<LevelOutcome> {
        console.say(&format!("Level {}: {}", self.number, self.scene))?;

        let answer = read_validated(console, self.prompt, INVALID, |input| {
            (!input.is_empty()).then(|| input.to_string())
        })?;

        if self.accepts(&answer) {
            console.say(self.reward)?;
            Ok(LevelOutcome::passed(self.on_success))
        } else {
            log::debug!("gate {}: wrong keyword {answer:?}", self.number);
            console.say(self.rebuke)?;
            Ok(LevelOutcome::failed(self.on_failure))
        }
    }
}
