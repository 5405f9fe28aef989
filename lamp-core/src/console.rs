//! Line-based console I/O.
//!
//! Every handler and level talks to the player through the [`Console`] trait,
//! so the whole game can be driven by a script in tests
//! (see [`crate::testing::ScriptedConsole`]) or by a real terminal.

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use thiserror::Error;

/// Error type for console reads and writes.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Input closed")]
    Closed,
}

pub type ConsoleResult<T> = Result<T, ConsoleError>;

/// Process exit code for the end of a game.
///
/// Finishing normally and closing standard input both count as success;
/// any other console failure does not.
pub fn exit_code(result: &ConsoleResult<()>) -> u8 {
    match result {
        Ok(()) | Err(ConsoleError::Closed) => 0,
        Err(ConsoleError::Io(_)) => 1,
    }
}

/// How a "clear screen" is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearStyle {
    /// Push old text out of view with blank lines.
    BlankLines(usize),
    /// Real terminal clear via an escape sequence.
    Terminal,
}

impl Default for ClearStyle {
    fn default() -> Self {
        ClearStyle::BlankLines(50)
    }
}

/// The player's side of the game.
pub trait Console {
    /// Print one line of text.
    fn say(&mut self, text: &str) -> ConsoleResult<()>;

    /// Show `prompt` and block until the player enters a line.
    ///
    /// The returned line has its line ending removed but is otherwise raw.
    fn ask(&mut self, prompt: &str) -> ConsoleResult<String>;

    /// Clear the screen.
    fn clear(&mut self) -> ConsoleResult<()>;
}

/// Block on a "press Enter" prompt, ignoring whatever was typed.
pub fn pause(console: &mut dyn Console, prompt: &str) -> ConsoleResult<()> {
    console.ask(prompt).map(|_| ())
}

/// Ask until `parse` accepts the (trimmed) answer.
///
/// Every rejected answer prints `invalid` before the prompt is shown again.
pub fn read_validated<T, F>(
    console: &mut dyn Console,
    prompt: &str,
    invalid: &str,
    mut parse: F,
) -> ConsoleResult<T>
where
    F: FnMut(&str) -> Option<T>,
{
    loop {
        let line = console.ask(prompt)?;
        if let Some(value) = parse(line.trim()) {
            return Ok(value);
        }
        console.say(invalid)?;
    }
}

/// `y`/`yes` and `n`/`no`, case-insensitive.
pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// A console over any reader and writer.
pub struct Terminal<R, W> {
    input: R,
    output: W,
    clear_style: ClearStyle,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W, clear_style: ClearStyle) -> Self {
        Self {
            input,
            output,
            clear_style,
        }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl Terminal<StdinLock<'static>, Stdout> {
    /// Console on the process's standard input and output.
    pub fn stdio(clear_style: ClearStyle) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), clear_style)
    }
}

impl<R: BufRead, W: Write> Console for Terminal<R, W> {
    fn say(&mut self, text: &str) -> ConsoleResult<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> ConsoleResult<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        // Raw bytes, so a line that is not UTF-8 is just a wrong answer.
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(ConsoleError::Closed);
        }

        let line = String::from_utf8_lossy(&buf)
            .trim_end_matches(['\r', '\n'])
            .to_string();
        log::trace!("input: {line:?}");
        Ok(line)
    }

    fn clear(&mut self) -> ConsoleResult<()> {
        match self.clear_style {
            ClearStyle::BlankLines(count) => {
                for _ in 0..count {
                    writeln!(self.output)?;
                }
            }
            ClearStyle::Terminal => {
                execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
            }
        }
        self.output.flush()?;
        Ok(())
    }
}
