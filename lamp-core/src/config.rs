//! Game configuration.

use crate::console::ClearStyle;
use crate::state::DEFAULT_LIVES;
use std::time::Duration;

/// Configuration for a game run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Lives at the start of a game and after every replay.
    pub starting_lives: u32,

    /// How screens are cleared.
    pub clear_style: ClearStyle,

    /// Pause after dramatic moments, such as the desert ambush.
    pub dramatic_pause: Duration,
}

impl GameConfig {
    pub fn new() -> Self {
        Self {
            starting_lives: DEFAULT_LIVES,
            clear_style: ClearStyle::default(),
            dramatic_pause: Duration::from_secs(2),
        }
    }

    /// Set the number of lives.
    pub fn with_starting_lives(mut self, lives: u32) -> Self {
        self.starting_lives = lives;
        self
    }

    /// Set how the screen is cleared.
    pub fn with_clear_style(mut self, style: ClearStyle) -> Self {
        self.clear_style = style;
        self
    }

    /// Set the dramatic pause. Use `Duration::ZERO` to disable it.
    pub fn with_dramatic_pause(mut self, pause: Duration) -> Self {
        self.dramatic_pause = pause;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
