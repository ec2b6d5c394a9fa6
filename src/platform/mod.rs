//! Platform layer
//!
//! Handles everything that touches the real terminal:
//! - Raw mode session (`terminal`)
//! - Keyboard input thread and command channel (`input`)

pub mod input;
pub mod terminal;

pub use input::{CommandReceiver, CommandSender, channel, decode, spawn_reader};
pub use terminal::RawTerminal;
