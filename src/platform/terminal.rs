//! Raw terminal session
//!
//! Keystrokes reach the input reader unbuffered and unechoed while a
//! [`RawTerminal`] is alive. Dropping it restores the terminal, also when
//! the game loop bails out with an error.

use std::io::{self, stdout};

use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode},
};

/// Guard holding the terminal in raw mode with the cursor hidden
pub struct RawTerminal {
    _private: (),
}

impl RawTerminal {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        // From here on Drop undoes raw mode even if hiding the cursor fails
        let guard = Self { _private: () };
        execute!(stdout(), cursor::Hide)?;
        log::debug!("Terminal in raw mode");
        Ok(guard)
    }
}

impl Drop for RawTerminal {
    fn drop(&mut self) {
        if let Err(err) = execute!(stdout(), cursor::Show) {
            log::error!("Unable to show cursor: {err}");
        }
        if let Err(err) = disable_raw_mode() {
            log::error!("Unable to leave raw mode: {err}");
        }
        log::debug!("Terminal restored");
    }
}
