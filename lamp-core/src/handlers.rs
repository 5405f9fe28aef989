//! State handlers.
//!
//! One function per kind of screen. Each handler performs its I/O and writes
//! the next state into [`GameState`] before returning.

use crate::config::GameConfig;
use crate::console::{parse_yes_no, pause, Console, ConsoleResult};
use crate::dice::Dice;
use crate::levels::Level;
use crate::script;
use crate::state::{GameState, StateId};

pub fn boot(game: &mut GameState, console: &mut dyn Console) -> ConsoleResult<()> {
    console.clear()?;
    console.say(script::TITLE)?;
    pause(console, "Press Enter to start...")?;
    game.state = StateId::Welcome;
    Ok(())
}

pub fn welcome(game: &mut GameState, console: &mut dyn Console) -> ConsoleResult<()> {
    console.clear()?;
    for line in script::WELCOME {
        console.say(line)?;
    }
    pause(console, "Press Enter to continue...")?;
    game.state = StateId::Intro;
    Ok(())
}

pub fn intro(game: &mut GameState, console: &mut dyn Console) -> ConsoleResult<()> {
    console.clear()?;
    console.say(script::INTRO)?;
    console.say(&format!("You have {} lives.", game.lives))?;
    pause(console, "Press Enter to face Level 1...")?;
    game.state = StateId::Level1;
    Ok(())
}

/// Run a level and apply its outcome.
///
/// This is the only place lives are lost. Running out of lives sends the
/// game to [`StateId::End`] whatever the level asked for.
pub fn level(
    game: &mut GameState,
    console: &mut dyn Console,
    dice: &mut dyn Dice,
    config: &GameConfig,
    level: &dyn Level,
) -> ConsoleResult<()> {
    let outcome = level.play(console, dice, config)?;
    log::debug!("level outcome: {outcome:?}");
    console.clear()?;

    if outcome.success {
        console.say("Success! Moving on...")?;
        if outcome.restore_lives {
            game.restore_lives(config.starting_lives);
        }
        game.state = outcome.next;
    } else {
        let lives = game.lose_life();
        console.say(&format!("Miss! Lives left: {lives}"))?;
        if game.is_out_of_lives() {
            log::warn!("out of lives, ignoring fallback to {}", outcome.next);
            game.state = StateId::End;
        } else {
            game.state = outcome.next;
        }
    }

    pause(console, "Press Enter...")
}

/// The end screen. Offers a replay, otherwise sets the exit flag.
pub fn end(game: &mut GameState, console: &mut dyn Console, config: &GameConfig) -> ConsoleResult<()> {
    console.clear()?;
    if !game.is_out_of_lives() {
        console.say(script::ESCAPE)?;
    }
    console.say(script::GAME_OVER)?;

    let answer = console.ask("Play again? (y/n): ")?;
    if parse_yes_no(&answer) == Some(true) {
        log::info!("replaying");
        game.replay(config.starting_lives);
    } else {
        game.exit = true;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::levels::LevelOutcome;
    use crate::testing::{LoadedDice, ScriptedConsole};

    /// A level that reports a fixed outcome.
    struct Fixed(LevelOutcome);

    impl Level for Fixed {
        fn play(
            &self,
            _console: &mut dyn Console,
            _dice: &mut dyn Dice,
            _config: &GameConfig,
        ) -> ConsoleResult<LevelOutcome> {
            Ok(self.0)
        }
    }

    fn run_level(game: &mut GameState, outcome: LevelOutcome) -> ScriptedConsole {
        let mut console = ScriptedConsole::new([""]);
        level(
            game,
            &mut console,
            &mut LoadedDice::empty(),
            &GameConfig::default(),
            &Fixed(outcome),
        )
        .unwrap();
        assert_eq!(console.remaining_inputs(), 0);
        console
    }

    #[test]
    fn test_narration_spine() {
        let mut game = GameState::default();
        let mut console = ScriptedConsole::new(["", "", ""]);

        boot(&mut game, &mut console).unwrap();
        assert_eq!(game.state, StateId::Welcome);
        welcome(&mut game, &mut console).unwrap();
        assert_eq!(game.state, StateId::Intro);
        intro(&mut game, &mut console).unwrap();
        assert_eq!(game.state, StateId::Level1);

        assert!(console.said(script::TITLE));
        assert!(console.said("You have 3 lives."));
        assert_eq!(console.clears(), 3);
    }

    #[test]
    fn test_success_follows_level() {
        let mut game = GameState::default();
        game.state = StateId::Level1;
        let console = run_level(&mut game, LevelOutcome::passed(StateId::Level2));
        assert_eq!(game.state, StateId::Level2);
        assert_eq!(game.lives, 3);
        assert!(console.said("Success! Moving on..."));
    }

    #[test]
    fn test_failure_costs_a_life() {
        let mut game = GameState::default();
        game.state = StateId::Level5;
        let console = run_level(&mut game, LevelOutcome::failed(StateId::Level3));
        assert_eq!(game.state, StateId::Level3);
        assert_eq!(game.lives, 2);
        assert!(console.said("Miss! Lives left: 2"));
    }

    #[test]
    fn test_last_life_forces_end() {
        let mut game = GameState::new(1);
        game.state = StateId::Level1;
        run_level(&mut game, LevelOutcome::failed(StateId::Level1));
        assert_eq!(game.lives, 0);
        assert_eq!(game.state, StateId::End);
    }

    #[test]
    fn test_rest_restores_lives() {
        let mut game = GameState::new(1);
        game.state = StateId::Level2;
        run_level(&mut game, LevelOutcome::rested(StateId::Level3));
        assert_eq!(game.lives, 3);
        assert_eq!(game.state, StateId::Level3);
    }

    #[test]
    fn test_end_replay() {
        let mut game = GameState::new(0);
        game.state = StateId::End;
        let mut console = ScriptedConsole::new(["Y"]);
        end(&mut game, &mut console, &GameConfig::default()).unwrap();
        assert_eq!(game.lives, 3);
        assert_eq!(game.state, StateId::Boot);
        assert!(!game.exit);
        assert!(!console.said(script::ESCAPE));
    }

    #[test]
    fn test_end_anything_else_exits() {
        for answer in ["n", "", "later"] {
            let mut game = GameState::new(2);
            game.state = StateId::End;
            let mut console = ScriptedConsole::new([answer]);
            end(&mut game, &mut console, &GameConfig::default()).unwrap();
            assert!(game.exit, "answer {answer:?} should exit");
            assert_eq!(game.state, StateId::End);
            assert!(console.said(script::ESCAPE));
        }
    }
}
