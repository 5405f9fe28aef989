//! Aladdin and the Evil Genie Lamp.
//!
//! Plays the game on standard input and output. Diagnostics go to stderr,
//! filtered by `RUST_LOG` (a `.env` file is honoured):
//!
//! ```bash
//! RUST_LOG=lamp_core=debug cargo run -p lamp
//! ```

use lamp_core::{exit_code, ConsoleError, Controller, GameConfig};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Load .env file if present
    dotenvy::dotenv().ok();
    env_logger::init();

    let mut controller = Controller::stdio(GameConfig::default());

    let result = controller.run();
    match &result {
        Ok(()) => {}
        Err(ConsoleError::Closed) => {
            log::info!("input closed at {}", controller.current_state_name());
            println!();
            println!("Goodbye!");
        }
        Err(e) => eprintln!("Error: {e}"),
    }

    ExitCode::from(exit_code(&result))
}
