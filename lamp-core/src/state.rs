//! Game state and the closed set of controller states.

use std::fmt;

/// Lives a fresh game starts with.
pub const DEFAULT_LIVES: u32 = 3;

/// Every screen or level the controller can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateId {
    Boot,
    Welcome,
    Intro,
    Level1,
    Level2,
    Level3,
    Level4,
    Level5,
    Level6,
    End,
}

impl StateId {
    /// All states, in script order.
    pub const ALL: [StateId; 10] = [
        StateId::Boot,
        StateId::Welcome,
        StateId::Intro,
        StateId::Level1,
        StateId::Level2,
        StateId::Level3,
        StateId::Level4,
        StateId::Level5,
        StateId::Level6,
        StateId::End,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            StateId::Boot => "BOOT_STATE_ID",
            StateId::Welcome => "WELCOME_STATE_ID",
            StateId::Intro => "INTRO_STATE_ID",
            StateId::Level1 => "LEVEL_1_STATE_ID",
            StateId::Level2 => "LEVEL_2_STATE_ID",
            StateId::Level3 => "LEVEL_3_STATE_ID",
            StateId::Level4 => "LEVEL_4_STATE_ID",
            StateId::Level5 => "LEVEL_5_STATE_ID",
            StateId::Level6 => "LEVEL_6_STATE_ID",
            StateId::End => "END_STATE_ID",
        }
    }

    /// The level number for level states, `None` for narration screens.
    pub fn level_number(&self) -> Option<u8> {
        match self {
            StateId::Level1 => Some(1),
            StateId::Level2 => Some(2),
            StateId::Level3 => Some(3),
            StateId::Level4 => Some(4),
            StateId::Level5 => Some(5),
            StateId::Level6 => Some(6),
            StateId::Boot | StateId::Welcome | StateId::Intro | StateId::End => None,
        }
    }

    pub fn is_level(&self) -> bool {
        self.level_number().is_some()
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Mutable record shared by every handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Lives remaining. Zero forces the game to the end screen.
    pub lives: u32,
    /// The state whose handler runs next.
    pub state: StateId,
    /// Once set, the dispatch loop stops. Never cleared.
    pub exit: bool,
}

impl GameState {
    /// Fresh state at the boot screen.
    pub fn new(lives: u32) -> Self {
        Self {
            lives,
            state: StateId::Boot,
            exit: false,
        }
    }

    /// Take one life away and return how many are left.
    pub fn lose_life(&mut self) -> u32 {
        self.lives = self.lives.saturating_sub(1);
        self.lives
    }

    pub fn restore_lives(&mut self, lives: u32) {
        self.lives = lives;
    }

    pub fn is_out_of_lives(&self) -> bool {
        self.lives == 0
    }

    /// Start over from the boot screen with full lives.
    pub fn replay(&mut self, lives: u32) {
        self.lives = lives;
        self.state = StateId::Boot;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(DEFAULT_LIVES)
    }
}
