//! Fixed timestep simulation tick
//!
//! Advances the game by exactly one tick. Pure apart from `log` output.

use super::arena::Arena;
use super::collision::{move_paddle, step_ball};
use super::state::{EndReason, GameState, Vertical};
use crate::consts::EXIT_COLUMN;

/// A player command, decoded from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Up,
    Down,
    Quit,
}

/// Advance the game state by one tick, applying at most one command
pub fn tick(state: &mut GameState, arena: &Arena, command: Option<Command>) {
    if state.status.is_over() {
        return;
    }

    match command {
        Some(Command::Quit) => {
            log::info!("Quit requested at tick {}", state.time_ticks);
            state.end(EndReason::Quit);
        }
        Some(Command::Up) => nudge_paddle(state, arena, Vertical::Up),
        Some(Command::Down) => nudge_paddle(state, arena, Vertical::Down),
        None => {}
    }

    // The ball moves every tick, including the one that ends the game
    state.ball = step_ball(&state.ball, &state.paddle, arena).ball;

    if state.ball.col() < EXIT_COLUMN && !state.status.is_over() {
        log::info!(
            "Ball lost at ({}, {}) after {} ticks",
            state.ball.row(),
            state.ball.col(),
            state.time_ticks + 1
        );
        state.end(EndReason::BallLost);
    }

    state.time_ticks += 1;
}

fn nudge_paddle(state: &mut GameState, arena: &Arena, direction: Vertical) {
    if move_paddle(&mut state.paddle, arena, direction) {
        log::debug!("Paddle moved {:?} to row {}", direction, state.paddle.row());
    } else {
        log::debug!("Paddle blocked moving {:?}", direction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::arena::parse;
    use crate::sim::state::{GameStatus, Horizontal};
    use glam::IVec2;

    const MAP: &str = "\
##########
#B       #
#        #
#        #
#        #
#       P#
#        #
#        #
#        #
##########";

    #[test]
    fn test_tick_moves_ball_every_tick() {
        let layout = parse(MAP).unwrap();
        let mut state = layout.initial_state();
        tick(&mut state, &layout.arena, None);
        assert_eq!(state.ball.pos, IVec2::new(2, 2));
        tick(&mut state, &layout.arena, Some(Command::Up));
        assert_eq!(state.ball.pos, IVec2::new(3, 3));
        assert_eq!(state.paddle.row(), 4);
        assert_eq!(state.time_ticks, 2);
        assert_eq!(state.status, GameStatus::Running);
    }

    #[test]
    fn test_tick_quit_still_steps_ball() {
        let layout = parse(MAP).unwrap();
        let mut state = layout.initial_state();
        tick(&mut state, &layout.arena, Some(Command::Quit));
        assert_eq!(state.status, GameStatus::Over(EndReason::Quit));
        assert_eq!(state.ball.pos, IVec2::new(2, 2));
    }

    #[test]
    fn test_ball_lost_below_exit_column() {
        let layout = parse(MAP).unwrap();
        let mut state = layout.initial_state();
        state.ball.pos = IVec2::new(2, 4);
        state.ball.vel.horizontal = Horizontal::Left;
        tick(&mut state, &layout.arena, None);
        assert_eq!(state.ball.col(), 1);
        assert_eq!(state.status, GameStatus::Over(EndReason::BallLost));
    }

    #[test]
    fn test_over_is_terminal() {
        let layout = parse(MAP).unwrap();
        let mut state = layout.initial_state();
        tick(&mut state, &layout.arena, Some(Command::Quit));
        let frozen = state.clone();
        for command in [None, Some(Command::Down), Some(Command::Quit)] {
            tick(&mut state, &layout.arena, command);
            assert_eq!(state, frozen);
        }
    }

    #[test]
    fn test_determinism() {
        let layout = parse(MAP).unwrap();
        let mut state1 = layout.initial_state();
        let mut state2 = layout.initial_state();

        let inputs = [
            Some(Command::Up),
            None,
            Some(Command::Down),
            Some(Command::Down),
            None,
        ];

        for input in inputs {
            tick(&mut state1, &layout.arena, input);
            tick(&mut state2, &layout.arena, input);
        }

        assert_eq!(state1, state2);
    }
}
