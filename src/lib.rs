//! Bounce Arena - a bouncing-ball game in the terminal
//!
//! Core modules:
//! - `sim`: Deterministic simulation (arena, collisions, game state)
//! - `game`: Fixed-tick game loop
//! - `renderer`: Terminal rendering
//! - `platform`: Raw terminal session and keyboard input
//! - `settings`: Glyph configuration

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use std::error::Error;
use std::fmt::Display;
use std::io;

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    /// Fixed simulation tick (the ball moves one cell per tick)
    pub const TICK_PERIOD: Duration = Duration::from_millis(200);

    /// The game is lost once the ball's column drops below this
    pub const EXIT_COLUMN: i32 = 2;

    /// Rows the paddle extends above and below its center cell
    pub const PADDLE_HALF_SPAN: i32 = 1;

    /// Size of a single raw read from the keyboard
    pub const INPUT_BUFFER_LEN: usize = 100;

    pub const DEFAULT_ARENA_PATH: &str = "assets/battle_field_1.txt";
    pub const DEFAULT_CONFIG_PATH: &str = "assets/config.json";
}

/// Which entity marker an arena error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Ball,
    Paddle,
}

impl Marker {
    pub fn as_char(&self) -> char {
        match self {
            Marker::Ball => 'B',
            Marker::Paddle => 'P',
        }
    }
}

/// Grid edge, used when an arena has no wall along one side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

/// Failure to load the arena or the glyph configuration
#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    Config(serde_json::Error),
    Empty,
    RaggedRow { row: usize, len: usize, expected: usize },
    MissingMarker(Marker),
    DuplicateMarker { marker: Marker, row: usize, col: usize },
    OpenEdge(Edge),
}

impl Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(err) => Display::fmt(err, f),
            LoadError::Config(err) => write!(f, "invalid config: {err}"),
            LoadError::Empty => Display::fmt("arena has no rows", f),
            LoadError::RaggedRow { row, len, expected } => {
                write!(f, "arena row {row} has {len} cells, expected {expected}")
            }
            LoadError::MissingMarker(marker) => {
                write!(f, "arena has no '{}' marker", marker.as_char())
            }
            LoadError::DuplicateMarker { marker, row, col } => write!(
                f,
                "second '{}' marker at row {row}, col {col}",
                marker.as_char()
            ),
            LoadError::OpenEdge(edge) => write!(f, "arena has no wall on its {edge:?} edge"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoadError::Io(source) => Some(source),
            LoadError::Config(source) => Some(source),
            LoadError::Empty
            | LoadError::RaggedRow { .. }
            | LoadError::MissingMarker(_)
            | LoadError::DuplicateMarker { .. }
            | LoadError::OpenEdge(_) => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        LoadError::Io(err)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Config(err)
    }
}
