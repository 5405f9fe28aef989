//! The desert road: press on and fight, or rest.

use super::{Level, LevelOutcome};
use crate::config::GameConfig;
use crate::console::{read_validated, Console, ConsoleResult};
use crate::dice::Dice;
use crate::state::StateId;
use std::thread;

/// Dates Aladdin carries into a fight.
pub const STARTING_DATES: u32 = 3;

/// One in this many won fights ends in an ambush.
pub const AMBUSH_ODDS: u32 = 3;

const MENU: &str = "You see a path ahead. Do you want to (1) Move forward or (2) Rest? ";
const ATTACK: &str = "Do you want to (3) Slash with a scimitar or (4) Throw a date? (enter 3 or 4): ";
const INVALID: &str = "Invalid choice, try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Path {
    Forward,
    Rest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Attack {
    Slash,
    ThrowDate,
}

/// How a fight ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fight {
    Won,
    OutOfDates,
}

fn parse_path(input: &str) -> Option<Path> {
    match input {
        "1" => Some(Path::Forward),
        "2" => Some(Path::Rest),
        _ => None,
    }
}

fn parse_attack(input: &str) -> Option<Attack> {
    match input {
        "3" => Some(Attack::Slash),
        "4" => Some(Attack::ThrowDate),
        _ => None,
    }
}

/// The branching desert level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesertRoad {
    pub number: u8,
    pub on_success: StateId,
    pub on_failure: StateId,
}

impl DesertRoad {
    /// Fight until the enemy falls or a date is thrown with none left.
    pub fn fight(&self, console: &mut dyn Console) -> ConsoleResult<Fight> {
        console.say("An enemy appears!")?;
        let mut dates = STARTING_DATES;

        loop {
            console.say(&format!("You have {dates} dates left."))?;
            match read_validated(console, ATTACK, INVALID, parse_attack)? {
                Attack::Slash => {
                    console.say("You slash the enemy with your scimitar!")?;
                    console.say("Enemy defeated!")?;
                    return Ok(Fight::Won);
                }
                Attack::ThrowDate if dates == 0 => {
                    console.say("You ran out of dates!")?;
                    return Ok(Fight::OutOfDates);
                }
                Attack::ThrowDate => {
                    dates -= 1;
                    console.say("You throw a date at the enemy! It swallows it and keeps coming.")?;
                }
            }
        }
    }
}

impl Level for DesertRoad {
    fn play(
        &self,
        console: &mut dyn Console,
        dice: &mut dyn Dice,
        config: &GameConfig,
    ) -> ConsoleResult<LevelOutcome> {
        console.say(&format!(
            "Level {}: The lamp spills Aladdin onto a burning desert road.",
            self.number
        ))?;

        match read_validated(console, MENU, INVALID, parse_path)? {
            Path::Rest => {
                console.say("You rest and restore your health to full.")?;
                Ok(LevelOutcome::rested(self.on_success))
            }
            Path::Forward => {
                if self.fight(console)? == Fight::OutOfDates {
                    log::debug!("desert: out of dates");
                    return Ok(LevelOutcome::failed(self.on_failure));
                }

                let ambushed = dice.one_in(AMBUSH_ODDS);
                log::debug!("desert: ambush roll, ambushed={ambushed}");
                if ambushed {
                    console.say("The enemy was only playing dead! It strikes while your back is turned.")?;
                    thread::sleep(config.dramatic_pause);
                    return Ok(LevelOutcome::failed(self.on_failure));
                }

                console.say("You move forward and find a hidden door out of the desert.")?;
                Ok(LevelOutcome::passed(self.on_success))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{LoadedDice, ScriptedConsole};
    use std::time::Duration;

    const LEVEL: DesertRoad = DesertRoad {
        number: 2,
        on_success: StateId::Level3,
        on_failure: StateId::Level2,
    };

    fn play(inputs: &[&str], rolls: &[u32]) -> (LevelOutcome, ScriptedConsole) {
        let mut console = ScriptedConsole::new(inputs.iter().copied());
        let mut dice = LoadedDice::new(rolls.iter().copied());
        let config = GameConfig::default().with_dramatic_pause(Duration::ZERO);
        let outcome = LEVEL.play(&mut console, &mut dice, &config).unwrap();
        assert_eq!(dice.remaining(), 0, "unused rolls");
        (outcome, console)
    }

    #[test]
    fn test_rest_restores_lives() {
        let (outcome, console) = play(&["2"], &[]);
        assert_eq!(outcome, LevelOutcome::rested(StateId::Level3));
        assert!(console.said("restore your health"));
    }

    #[test]
    fn test_slash_without_ambush() {
        let (outcome, console) = play(&["1", "3"], &[2]);
        assert_eq!(outcome, LevelOutcome::passed(StateId::Level3));
        assert!(console.said("Enemy defeated!"));
        assert!(console.said("hidden door"));
    }

    #[test]
    fn test_slash_then_ambush() {
        let (outcome, console) = play(&["1", "3"], &[1]);
        assert_eq!(outcome, LevelOutcome::failed(StateId::Level2));
        assert!(console.said("playing dead"));
    }

    #[test]
    fn test_throwing_dates_spends_them() {
        let (outcome, console) = play(&["1", "4", "4", "3"], &[3]);
        assert!(outcome.success);
        assert!(console.said("You have 3 dates left."));
        assert!(console.said("You have 2 dates left."));
        assert!(console.said("You have 1 dates left."));
        assert!(!console.said("You have 0 dates left."));
    }

    #[test]
    fn test_out_of_dates_fails_without_ambush_roll() {
        let (outcome, console) = play(&["1", "4", "4", "4", "4"], &[]);
        assert_eq!(outcome, LevelOutcome::failed(StateId::Level2));
        assert!(console.said("You have 0 dates left."));
        assert!(console.said("You ran out of dates!"));
    }

    #[test]
    fn test_invalid_menu_and_attack_reprompt() {
        let (outcome, console) = play(&["forward", "0", "1", "slash", "3"], &[2]);
        assert!(outcome.success);
        assert_eq!(console.count_said(INVALID), 3);
    }
}
