//! Fixed-tick game loop
//!
//! Each tick polls at most one command, advances the simulation, renders a
//! frame and stops right after the frame that shows the game over.

use std::io;
use std::thread::sleep;
use std::time::{Duration, Instant};

use crate::platform::CommandReceiver;
use crate::renderer::Renderer;
use crate::sim::{Arena, GameState, tick};

/// Run the game until it is over and return the final state
///
/// `period` is the tick length; the loop sleeps until the next period
/// boundary counted from the start. A slow frame delays only its own tick,
/// later ticks keep one period apart.
pub fn run<R: Renderer>(
    arena: &Arena,
    mut state: GameState,
    commands: &CommandReceiver,
    renderer: &mut R,
    period: Duration,
) -> io::Result<GameState> {
    log::info!("Game started ({} ms per tick)", period.as_millis());
    let start = Instant::now();
    let mut next_tick = start;

    loop {
        let command = commands.try_next();
        tick(&mut state, arena, command);
        renderer.render(arena, &state)?;

        if state.status.is_over() {
            log::info!(
                "Game over after {} ticks: {:?}",
                state.time_ticks,
                state.status
            );
            return Ok(state);
        }

        next_tick = next_boundary(next_tick + period, Instant::now(), period);
        let now = Instant::now();
        if next_tick > now {
            sleep(next_tick - now);
        }
    }
}

/// First tick boundary after `now`, on the schedule of `scheduled`
///
/// Boundaries missed during a slow frame are dropped rather than run back
/// to back.
fn next_boundary(scheduled: Instant, now: Instant, period: Duration) -> Instant {
    if scheduled > now || period.is_zero() {
        return scheduled;
    }
    let overshoot = (now - scheduled).as_nanos() % period.as_nanos();
    let next = now + period - Duration::from_nanos(overshoot as u64);
    log::debug!("Tick overran by {:?}, skipping missed ticks", now - scheduled);
    next
}
