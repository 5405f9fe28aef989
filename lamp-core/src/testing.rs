//! Testing utilities for the lamp game.
//!
//! This module provides tools for integration testing:
//! - `ScriptedConsole` for driving the game with queued input lines
//! - `LoadedDice` for deterministic random draws
//! - `TestHarness` for scripted game scenarios
//! - Assertion helpers for verifying game state

use crate::config::GameConfig;
use crate::console::{Console, ConsoleError, ConsoleResult};
use crate::controller::Controller;
use crate::dice::Dice;
use crate::state::StateId;
use std::collections::VecDeque;
use std::ops::RangeInclusive;
use std::time::Duration;

/// A console that reads from a script and records everything shown.
///
/// Running out of script behaves like a closed standard input.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    /// Input lines still to be read.
    inputs: VecDeque<String>,
    /// Every line said and every prompt shown, in order.
    transcript: Vec<String>,
    /// Number of screen clears.
    clears: usize,
}

impl ScriptedConsole {
    /// Create a console with scripted input lines.
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Add an input line to the end of the script.
    pub fn push_input(&mut self, line: impl Into<String>) {
        self.inputs.push_back(line.into());
    }

    /// Throw away the remaining script and use `inputs` instead.
    pub fn replace_inputs<I, S>(&mut self, inputs: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inputs = inputs.into_iter().map(Into::into).collect();
    }

    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }

    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Whether any transcript line contains `needle`.
    pub fn said(&self, needle: &str) -> bool {
        self.transcript.iter().any(|line| line.contains(needle))
    }

    /// How many transcript lines contain `needle`.
    pub fn count_said(&self, needle: &str) -> usize {
        self.transcript
            .iter()
            .filter(|line| line.contains(needle))
            .count()
    }

    pub fn clears(&self) -> usize {
        self.clears
    }
}

impl Console for ScriptedConsole {
    fn say(&mut self, text: &str) -> ConsoleResult<()> {
        self.transcript.push(text.to_string());
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> ConsoleResult<String> {
        self.transcript.push(prompt.to_string());
        self.inputs.pop_front().ok_or(ConsoleError::Closed)
    }

    fn clear(&mut self) -> ConsoleResult<()> {
        self.clears += 1;
        Ok(())
    }
}

/// Dice that return scripted values.
///
/// Panics when a value falls outside the requested range or the script
/// runs out, so a test notices draws it did not plan for.
#[derive(Debug, Clone, Default)]
pub struct LoadedDice {
    values: VecDeque<u32>,
}

impl LoadedDice {
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Dice for code paths that must not roll.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: u32) {
        self.values.push_back(value);
    }

    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl Dice for LoadedDice {
    fn roll(&mut self, range: RangeInclusive<u32>) -> u32 {
        let value = self
            .values
            .pop_front()
            .unwrap_or_else(|| panic!("LoadedDice has no value left for a roll in {range:?}"));
        assert!(
            range.contains(&value),
            "LoadedDice value {value} is outside {range:?}"
        );
        value
    }
}

/// Test harness for running game scenarios.
pub struct TestHarness {
    /// The controller under test.
    pub controller: Controller<ScriptedConsole, LoadedDice>,
}

impl TestHarness {
    /// Create a new harness at the boot screen, with no dramatic pauses.
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// Create a harness with a custom configuration.
    ///
    /// The dramatic pause is always disabled.
    pub fn with_config(config: GameConfig) -> Self {
        let config = config.with_dramatic_pause(Duration::ZERO);
        Self {
            controller: Controller::new(config, ScriptedConsole::default(), LoadedDice::empty()),
        }
    }

    /// Create a harness that starts in `state`.
    pub fn at(state: StateId) -> Self {
        let mut harness = Self::new();
        harness.controller.game_mut().state = state;
        harness
    }

    /// Set the current number of lives.
    pub fn with_lives(mut self, lives: u32) -> Self {
        self.controller.game_mut().lives = lives;
        self
    }

    /// Queue an input line.
    pub fn input(&mut self, line: &str) -> &mut Self {
        self.controller.console_mut().push_input(line);
        self
    }

    /// Queue several input lines.
    pub fn inputs(&mut self, lines: &[&str]) -> &mut Self {
        for line in lines {
            self.input(line);
        }
        self
    }

    /// Queue a dice value.
    pub fn roll(&mut self, value: u32) -> &mut Self {
        self.controller.dice_mut().push(value);
        self
    }

    /// Run one handler.
    pub fn step(&mut self) -> ConsoleResult<()> {
        self.controller.step()
    }

    /// Run until exit or until the script runs out.
    pub fn run(&mut self) -> ConsoleResult<()> {
        self.controller.run()
    }

    pub fn state(&self) -> StateId {
        self.controller.game().state
    }

    pub fn lives(&self) -> u32 {
        self.controller.game().lives
    }

    pub fn exited(&self) -> bool {
        self.controller.is_finished()
    }

    pub fn console(&self) -> &ScriptedConsole {
        self.controller.console()
    }

    pub fn said(&self, needle: &str) -> bool {
        self.console().said(needle)
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert the controller is in `state`.
#[track_caller]
pub fn assert_state(harness: &TestHarness, state: StateId) {
    assert_eq!(
        harness.state(),
        state,
        "Expected state {state}, got {}",
        harness.state()
    );
}

/// Assert the player has `lives` lives.
#[track_caller]
pub fn assert_lives(harness: &TestHarness, lives: u32) {
    assert_eq!(
        harness.lives(),
        lives,
        "Expected {lives} lives, got {}",
        harness.lives()
    );
}

/// Assert some transcript line contains `needle`.
#[track_caller]
pub fn assert_said(harness: &TestHarness, needle: &str) {
    assert!(
        harness.said(needle),
        "Expected the game to say '{needle}', transcript: {:#?}",
        harness.console().transcript()
    );
}

/// Assert no transcript line contains `needle`.
#[track_caller]
pub fn assert_not_said(harness: &TestHarness, needle: &str) {
    assert!(
        !harness.said(needle),
        "Expected the game NOT to say '{needle}'"
    );
}

/// Assert the exit flag is set.
#[track_caller]
pub fn assert_exited(harness: &TestHarness) {
    assert!(harness.exited(), "Expected the game to have exited");
}
