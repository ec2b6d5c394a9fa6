//! Ball movement and collision response on the grid
//!
//! The ball moves one cell diagonally per tick. Collisions use
//! bounce-in-place: the velocity reflects and the ball keeps its cell for
//! that tick. With a fixed speed of one cell no cell can be skipped, so the
//! single candidate check is enough.

use super::arena::Arena;
use super::state::{Ball, Paddle, Vertical};

/// Result of stepping the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub ball: Ball,
    pub hit_wall: bool,
    pub hit_paddle: bool,
}

impl Step {
    pub fn bounced(&self) -> bool {
        self.hit_wall || self.hit_paddle
    }
}

/// Advance the ball by one tick against the arena walls and the paddle
///
/// Wall and paddle checks both look at the candidate cell, so they can
/// stack in the same tick.
pub fn step_ball(ball: &Ball, paddle: &Paddle, arena: &Arena) -> Step {
    let candidate = ball.candidate();
    let mut next = *ball;
    next.pos = candidate;

    let hit_wall = arena.is_wall(candidate);
    if hit_wall {
        if arena.is_top_or_bottom(candidate.y) {
            next.vel.vertical = ball.vel.vertical.reversed();
        }
        if arena.is_left_or_right(candidate.x) {
            next.vel.horizontal = ball.vel.horizontal.reversed();
        }
        next.pos = ball.pos;
    }

    let hit_paddle = paddle.covers(candidate);
    if hit_paddle {
        // Reverse relative to the incoming direction, not the wall result
        next.vel.horizontal = ball.vel.horizontal.reversed();
        next.pos = ball.pos;
    }

    if hit_wall || hit_paddle {
        log::debug!(
            "Ball bounced at ({}, {}) wall={} paddle={} -> {:?}",
            ball.row(),
            ball.col(),
            hit_wall,
            hit_paddle,
            next.vel
        );
    }

    Step {
        ball: next,
        hit_wall,
        hit_paddle,
    }
}

/// Move the paddle one row, refusing moves that would touch the top or
/// bottom row. Returns whether the paddle moved.
pub fn move_paddle(paddle: &mut Paddle, arena: &Arena, direction: Vertical) -> bool {
    let mut moved = *paddle;
    moved.pos.y += direction.delta();

    if moved.top() <= 0 || moved.bottom() >= arena.last_row() {
        return false;
    }

    *paddle = moved;
    true
}
