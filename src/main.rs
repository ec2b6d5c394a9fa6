//! Bounce Arena entry point
//!
//! Loads the map and glyphs, puts the terminal in raw mode and runs the game.

use std::io::{stdin, stdout};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use bounce_arena::consts::{DEFAULT_ARENA_PATH, DEFAULT_CONFIG_PATH, TICK_PERIOD};
use bounce_arena::platform::{self, RawTerminal};
use bounce_arena::renderer::TerminalRenderer;
use bounce_arena::sim::{EndReason, GameStatus, arena};
use bounce_arena::{Settings, game};

#[derive(Parser)]
#[command(version, about = "Keep the ball from getting past your paddle")]
struct Cli {
    /// Map file (`#` wall, `G` ghost, `B` ball, `P` paddle)
    #[arg(long, default_value = DEFAULT_ARENA_PATH)]
    arena: PathBuf,
    /// Glyph settings (JSON)
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::info!("Bounce Arena starting...");

    let settings = Settings::load(&cli.config)
        .inspect_err(|err| log::error!("Error loading configuration: {err}"))
        .with_context(|| format!("loading config {}", cli.config.display()))?;
    let layout = arena::load(&cli.arena)
        .inspect_err(|err| log::error!("Error loading arena: {err}"))
        .with_context(|| format!("loading arena {}", cli.arena.display()))?;

    let outcome = {
        let _terminal = RawTerminal::enter().context("enabling raw terminal mode")?;
        let (tx, rx) = platform::channel();
        platform::spawn_reader(stdin(), tx).context("starting input reader")?;
        let mut renderer = TerminalRenderer::new(stdout(), settings);
        game::run(
            &layout.arena,
            layout.initial_state(),
            &rx,
            &mut renderer,
            TICK_PERIOD,
        )
    };
    let state = outcome.context("drawing the game")?;

    match state.status {
        GameStatus::Over(EndReason::BallLost) => println!("game over"),
        GameStatus::Over(EndReason::Quit) => println!("bye"),
        GameStatus::Running => {}
    }
    Ok(())
}
