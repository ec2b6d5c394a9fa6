//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One cell per tick, no timing inside the simulation
//! - State mutated only through `tick`
//! - No rendering or platform dependencies

pub mod arena;
pub mod collision;
pub mod state;
pub mod tick;

pub use arena::{Arena, Cell, Layout};
pub use collision::{Step, move_paddle, step_ball};
pub use state::{Ball, EndReason, GameState, GameStatus, Horizontal, Paddle, Velocity, Vertical};
pub use tick::{Command, tick};
