//! The state controller: dispatch the current state's handler until exit.

use crate::config::GameConfig;
use crate::console::{Console, ConsoleResult, Terminal};
use crate::dice::{Dice, RngDice};
use crate::handlers;
use crate::script;
use crate::state::{GameState, StateId};
use std::io::{StdinLock, Stdout};

/// Owns the game state and the I/O the handlers run against.
pub struct Controller<C, D> {
    game: GameState,
    config: GameConfig,
    console: C,
    dice: D,
}

impl<C: Console, D: Dice> Controller<C, D> {
    /// Fresh game at the boot screen.
    pub fn new(config: GameConfig, console: C, dice: D) -> Self {
        Self {
            game: GameState::new(config.starting_lives),
            config,
            console,
            dice,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Mutable access for setting up fixtures.
    pub fn game_mut(&mut self) -> &mut GameState {
        &mut self.game
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    pub fn dice_mut(&mut self) -> &mut D {
        &mut self.dice
    }

    pub fn current_state_name(&self) -> &'static str {
        self.game.state.name()
    }

    pub fn is_finished(&self) -> bool {
        self.game.exit
    }

    /// Run the handler for the current state once.
    pub fn step(&mut self) -> ConsoleResult<()> {
        let Self {
            game,
            config,
            console,
            dice,
        } = self;
        let from = game.state;

        match from {
            StateId::Boot => handlers::boot(game, console)?,
            StateId::Welcome => handlers::welcome(game, console)?,
            StateId::Intro => handlers::intro(game, console)?,
            StateId::Level1 => handlers::level(game, console, dice, config, &script::LEVEL_1)?,
            StateId::Level2 => handlers::level(game, console, dice, config, &script::LEVEL_2)?,
            StateId::Level3 => handlers::level(game, console, dice, config, &script::LEVEL_3)?,
            StateId::Level4 => handlers::level(game, console, dice, config, &script::LEVEL_4)?,
            StateId::Level5 => handlers::level(game, console, dice, config, &script::LEVEL_5)?,
            StateId::Level6 => handlers::level(game, console, dice, config, &script::LEVEL_6)?,
            StateId::End => handlers::end(game, console, config)?,
        }

        log::info!("{}", transition_line(from, game));
        Ok(())
    }

    /// Dispatch until the exit flag is set.
    pub fn run(&mut self) -> ConsoleResult<()> {
        log::info!(
            "starting at {} with {} lives",
            self.game.state,
            self.game.lives
        );
        while !self.game.exit {
            self.step()?;
        }
        Ok(())
    }
}

/// Log line for one step that started at `from`.
fn transition_line(from: StateId, game: &GameState) -> String {
    if game.exit {
        format!("{from}: exit requested")
    } else if game.state == from && from.is_level() {
        format!("{from} retry (lives: {})", game.lives)
    } else {
        format!("{from} -> {} (lives: {})", game.state, game.lives)
    }
}

impl Controller<Terminal<StdinLock<'static>, Stdout>, RngDice> {
    /// A game on standard input and output with unseeded dice.
    pub fn stdio(config: GameConfig) -> Self {
        let console = Terminal::stdio(config.clear_style);
        Self::new(config, console, RngDice::new())
    }
}
