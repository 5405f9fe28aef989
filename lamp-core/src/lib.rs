//! Aladdin and the Evil Genie Lamp: game engine.
//!
//! This crate provides:
//! - A finite-state controller that dispatches one handler per screen
//! - Level mini-games (divisibility check, desert road, keyword gates, relays)
//! - A `Console` abstraction over line-based input and output
//! - Scripted consoles and loaded dice for deterministic tests
//!
//! # Quick Start
//!
//! ```no_run
//! use lamp_core::{Controller, GameConfig};
//!
//! fn main() -> Result<(), lamp_core::ConsoleError> {
//!     let mut controller = Controller::stdio(GameConfig::default());
//!     controller.run()
//! }
//! ```

pub mod config;
pub mod console;
pub mod controller;
pub mod dice;
pub mod handlers;
pub mod levels;
pub mod script;
pub mod state;
pub mod testing;

// Primary public API
pub use config::GameConfig;
pub use console::{exit_code, ClearStyle, Console, ConsoleError, ConsoleResult, Terminal};
pub use controller::Controller;
pub use dice::{Dice, RngDice};
pub use levels::{Level, LevelOutcome};
pub use state::{GameState, StateId, DEFAULT_LIVES};
pub use testing::{LoadedDice, ScriptedConsole, TestHarness};
