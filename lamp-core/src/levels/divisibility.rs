//! Divisibility check: does the division leave a remainder?

use super::{Level, LevelOutcome};
use crate::config::GameConfig;
use crate::console::{parse_yes_no, read_validated, Console, ConsoleResult};
use crate::dice::Dice;
use crate::state::StateId;
use std::ops::RangeInclusive;

/// Three-digit dividends.
pub const DIVIDEND_RANGE: RangeInclusive<u32> = 100..=998;

/// Divisors, never zero.
pub const DIVISOR_RANGE: RangeInclusive<u32> = 1..=99;

const PROMPT: &str = "Answer 'y' for divisible, 'n' for remainder: ";
const INVALID: &str = "Invalid input. Please answer 'y' or 'n'.";

/// One drawn problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Division {
    pub dividend: u32,
    pub divisor: u32,
}

impl Division {
    pub fn new(dividend: u32, divisor: u32) -> Self {
        debug_assert!(divisor > 0, "divisor must be positive");
        Self { dividend, divisor }
    }

    /// Draw dividend then divisor.
    pub fn roll(dice: &mut dyn Dice) -> Self {
        let dividend = dice.roll(DIVIDEND_RANGE);
        let divisor = dice.roll(DIVISOR_RANGE);
        Self::new(dividend, divisor)
    }

    pub fn remainder(&self) -> u32 {
        self.dividend % self.divisor
    }

    pub fn is_divisible(&self) -> bool {
        self.remainder() == 0
    }

    /// Whether the player's claim matches the arithmetic.
    pub fn judge(&self, claims_divisible: bool) -> bool {
        claims_divisible == self.is_divisible()
    }
}

/// The divisibility level. New operands are drawn on every visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Divisibility {
    pub number: u8,
    pub on_success: StateId,
    pub on_failure: StateId,
}

impl Divisibility {
    /// Put a specific problem to the player.
    pub fn ask(&self, division: Division, console: &mut dyn Console) -> ConsoleResult<LevelOutcome> {
        let Division { dividend, divisor } = division;
        console.say(&format!(
            "Level {}: Is {dividend} divisible by {divisor}? (no remainder)",
            self.number
        ))?;

        let claims_divisible = read_validated(console, PROMPT, INVALID, parse_yes_no)?;
        let remainder = division.remainder();

        if division.judge(claims_divisible) {
            console.say(&format!("Correct! {dividend} % {divisor} = {remainder}"))?;
            Ok(LevelOutcome::passed(self.on_success))
        } else {
            console.say(&format!("Incorrect. {dividend} % {divisor} = {remainder}"))?;
            Ok(LevelOutcome::failed(self.on_failure))
        }
    }
}

impl Level for Divisibility {
    fn play(
        &self,
        console: &mut dyn Console,
        dice: &mut dyn Dice,
        _config: &GameConfig,
    ) -> ConsoleResult<LevelOutcome> {
        let division = Division::roll(dice);
        log::debug!(
            "divisibility: {} / {} (remainder {})",
            division.dividend,
            division.divisor,
            division.remainder()
        );
        self.ask(division, console)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::RngDice;
    use crate::testing::{LoadedDice, ScriptedConsole};

    const LEVEL: Divisibility = Divisibility {
        number: 1,
        on_success: StateId::Level2,
        on_failure: StateId::Level1,
    };

    #[test]
    fn test_divisible_answered_yes() {
        let mut console = ScriptedConsole::new(["y"]);
        let outcome = LEVEL.ask(Division::new(100, 10), &mut console).unwrap();
        assert_eq!(outcome, LevelOutcome::passed(StateId::Level2));
        assert!(console.said("Correct! 100 % 10 = 0"));
    }

    #[test]
    fn test_divisible_answered_no() {
        let mut console = ScriptedConsole::new(["n"]);
        let outcome = LEVEL.ask(Division::new(100, 10), &mut console).unwrap();
        assert_eq!(outcome, LevelOutcome::failed(StateId::Level1));
        assert!(console.said("Incorrect. 100 % 10 = 0"));
    }

    #[test]
    fn test_remainder_answered_no() {
        let mut console = ScriptedConsole::new(["N"]);
        let outcome = LEVEL.ask(Division::new(101, 10), &mut console).unwrap();
        assert!(outcome.success);
        assert!(console.said("Correct! 101 % 10 = 1"));
    }

    #[test]
    fn test_invalid_answers_reprompt() {
        let mut console = ScriptedConsole::new(["maybe", "", "yes"]);
        let outcome = LEVEL.ask(Division::new(500, 25), &mut console).unwrap();
        assert!(outcome.success);
        assert_eq!(console.count_said(INVALID), 2);
        assert_eq!(console.remaining_inputs(), 0);
    }

    #[test]
    fn test_play_draws_dividend_then_divisor() {
        let mut console = ScriptedConsole::new(["n"]);
        let mut dice = LoadedDice::new([998, 99]);
        let outcome = LEVEL
            .play(&mut console, &mut dice, &GameConfig::default())
            .unwrap();
        // 998 = 99 * 10 + 8
        assert!(outcome.success);
        assert!(console.said("Is 998 divisible by 99?"));
        assert!(console.said("998 % 99 = 8"));
    }

    #[test]
    fn test_judge_matches_remainder() {
        let mut dice = RngDice::new();
        for _ in 0..500 {
            let division = Division::roll(&mut dice);
            assert!(DIVIDEND_RANGE.contains(&division.dividend));
            assert!(DIVISOR_RANGE.contains(&division.divisor));
            let divisible = division.dividend % division.divisor == 0;
            assert_eq!(division.judge(true), divisible);
            assert_eq!(division.judge(false), !divisible);
        }
    }
}
