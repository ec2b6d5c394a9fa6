//! Game state and core simulation types
//!
//! Everything the game loop mutates between ticks lives in [`GameState`].
//! Positions are `IVec2` with `x` = column and `y` = row.

use glam::IVec2;

use crate::consts::PADDLE_HALF_SPAN;

/// Vertical component of the ball's velocity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vertical {
    Up,
    Down,
}

impl Vertical {
    /// Row offset for one tick
    pub fn delta(self) -> i32 {
        match self {
            Vertical::Up => -1,
            Vertical::Down => 1,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Vertical::Up => Vertical::Down,
            Vertical::Down => Vertical::Up,
        }
    }
}

/// Horizontal component of the ball's velocity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Horizontal {
    Left,
    Right,
}

impl Horizontal {
    /// Column offset for one tick
    pub fn delta(self) -> i32 {
        match self {
            Horizontal::Left => -1,
            Horizontal::Right => 1,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Horizontal::Left => Horizontal::Right,
            Horizontal::Right => Horizontal::Left,
        }
    }
}

/// Direction of travel, one cell per tick on each axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Velocity {
    pub vertical: Vertical,
    pub horizontal: Horizontal,
}

impl Velocity {
    pub fn new(vertical: Vertical, horizontal: Horizontal) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }

    /// Offset applied to a position in one tick
    pub fn offset(&self) -> IVec2 {
        IVec2::new(self.horizontal.delta(), self.vertical.delta())
    }
}

impl Default for Velocity {
    /// A freshly spawned ball heads right and down
    fn default() -> Self {
        Self::new(Vertical::Down, Horizontal::Right)
    }
}

/// The ball entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ball {
    pub pos: IVec2,
    pub vel: Velocity,
}

impl Ball {
    pub fn new(row: i32, col: i32) -> Self {
        Self {
            pos: IVec2::new(col, row),
            vel: Velocity::default(),
        }
    }

    pub fn with_velocity(mut self, vel: Velocity) -> Self {
        self.vel = vel;
        self
    }

    pub fn row(&self) -> i32 {
        self.pos.y
    }

    pub fn col(&self) -> i32 {
        self.pos.x
    }

    /// Cell the ball would enter if nothing were in the way
    pub fn candidate(&self) -> IVec2 {
        self.pos + self.vel.offset()
    }
}

/// The player's paddle, three cells tall around its center
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paddle {
    /// Center cell
    pub pos: IVec2,
}

impl Paddle {
    pub fn new(row: i32, col: i32) -> Self {
        Self {
            pos: IVec2::new(col, row),
        }
    }

    pub fn row(&self) -> i32 {
        self.pos.y
    }

    pub fn col(&self) -> i32 {
        self.pos.x
    }

    pub fn top(&self) -> i32 {
        self.pos.y - PADDLE_HALF_SPAN
    }

    pub fn bottom(&self) -> i32 {
        self.pos.y + PADDLE_HALF_SPAN
    }

    /// Whether `pos` is one of the paddle's cells
    pub fn covers(&self, pos: IVec2) -> bool {
        pos.x == self.col() && (self.top()..=self.bottom()).contains(&pos.y)
    }

    /// The paddle's cells, top to bottom
    pub fn cells(&self) -> impl Iterator<Item = IVec2> + '_ {
        (self.top()..=self.bottom()).map(|row| IVec2::new(self.col(), row))
    }
}

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// The player pressed ESC (or the input stream failed)
    Quit,
    /// The ball got past the paddle
    BallLost,
}

/// Current status of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    Running,
    /// Terminal; never goes back to `Running`
    Over(EndReason),
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::Over(_))
    }
}

/// Complete mutable simulation state, owned by the game loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub ball: Ball,
    pub paddle: Paddle,
    pub status: GameStatus,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    pub fn new(ball: Ball, paddle: Paddle) -> Self {
        Self {
            ball,
            paddle,
            status: GameStatus::Running,
            time_ticks: 0,
        }
    }

    /// Move to the terminal state; the first reason wins
    pub fn end(&mut self, reason: EndReason) {
        if !self.status.is_over() {
            self.status = GameStatus::Over(reason);
        }
    }
}
