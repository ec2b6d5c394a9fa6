//! Keyboard input on its own thread
//!
//! The reader blocks on raw bytes, decodes them into [`Command`]s and hands
//! them to the game loop through an unbounded channel. The loop only ever
//! polls the channel, so neither side waits on the other.

use std::io::{self, ErrorKind, Read};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread::{Builder, JoinHandle};

use crate::consts::INPUT_BUFFER_LEN;
use crate::sim::Command;

const ESC: u8 = 0x1b;
const CTRL_C: u8 = 0x03;

/// Decode one raw read into a command
///
/// A lone ESC quits, `ESC [ A` / `ESC [ B` (cursor up/down) move the paddle.
/// Raw mode swallows SIGINT, so a lone Ctrl-C byte quits too. Anything else
/// is ignored.
pub fn decode(bytes: &[u8]) -> Option<Command> {
    match bytes {
        [ESC] | [CTRL_C] => Some(Command::Quit),
        [ESC, b'[', b'A', ..] => Some(Command::Up),
        [ESC, b'[', b'B', ..] => Some(Command::Down),
        _ => None,
    }
}

/// Producer half of the hand-off channel
#[derive(Debug, Clone)]
pub struct CommandSender(Sender<Command>);

/// Consumer half of the hand-off channel, owned by the game loop
#[derive(Debug)]
pub struct CommandReceiver(Receiver<Command>);

/// Create an unbounded command channel
pub fn channel() -> (CommandSender, CommandReceiver) {
    let (tx, rx) = mpsc::channel();
    (CommandSender(tx), CommandReceiver(rx))
}

impl CommandSender {
    /// Queue a command without blocking. Returns false once the loop is gone.
    pub fn send(&self, command: Command) -> bool {
        self.0.send(command).is_ok()
    }
}

impl CommandReceiver {
    /// Take the oldest pending command, if any, without blocking
    pub fn try_next(&self) -> Option<Command> {
        match self.0.try_recv() {
            Ok(command) => Some(command),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }
}

/// Read and forward commands until the source fails or the loop goes away
///
/// A read error or end of input is turned into a final `Quit` so the game
/// ends instead of hanging.
pub fn read_commands<R: Read>(mut source: R, sender: &CommandSender) {
    let mut buffer = [0u8; INPUT_BUFFER_LEN];
    loop {
        let count = match source.read(&mut buffer) {
            Ok(0) => {
                log::warn!("Input closed, quitting");
                sender.send(Command::Quit);
                return;
            }
            Ok(count) => count,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => {
                log::warn!("Error reading input: {err}");
                sender.send(Command::Quit);
                return;
            }
        };

        let Some(command) = decode(&buffer[..count]) else {
            continue;
        };
        log::debug!("Input command {command:?}");
        if !sender.send(command) {
            return;
        }
    }
}

/// Spawn the input reader thread. It is never joined; process exit
/// reclaims it.
pub fn spawn_reader<R>(source: R, sender: CommandSender) -> io::Result<JoinHandle<()>>
where
    R: Read + Send + 'static,
{
    Builder::new()
        .name("input_reader".to_owned())
        .spawn(move || read_commands(source, &sender))
}
