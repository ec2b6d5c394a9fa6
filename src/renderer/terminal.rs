//! Full-frame terminal renderer

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use glam::IVec2;

use super::{Renderer, screen_position, screen_row};
use crate::settings::Settings;
use crate::sim::{Arena, Cell, GameState};

/// Clears the screen and redraws arena, ball and paddle every frame
pub struct TerminalRenderer<W: Write> {
    out: W,
    settings: Settings,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, settings: Settings) -> Self {
        Self { out, settings }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn cell_glyph(&self, cell: Cell) -> &str {
        match cell {
            Cell::Wall => &self.settings.wall,
            Cell::Decoration => &self.settings.ghost,
            Cell::Empty => &self.settings.space,
        }
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, arena: &Arena, state: &GameState) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All))?;

        for (row, cells) in arena.row_cells().enumerate() {
            let Some(y) = screen_row(row) else {
                break;
            };
            let line: String = cells.iter().map(|&cell| self.cell_glyph(cell)).collect();
            queue!(self.out, MoveTo(0, y), Print(line))?;
        }

        let width = self.settings.cell_width();
        let ball = if state.status.is_over() {
            &self.settings.death
        } else {
            &self.settings.ball
        };
        draw_glyph(&mut self.out, arena, state.ball.pos, width, ball)?;
        for pos in state.paddle.cells() {
            draw_glyph(&mut self.out, arena, pos, width, &self.settings.dot)?;
        }

        // Park the cursor under the arena, or on the last row for huge maps
        let below = screen_row(arena.rows()).unwrap_or(u16::MAX - 1);
        queue!(self.out, MoveTo(0, below))?;
        self.out.flush()
    }
}

fn draw_glyph<W: Write>(
    out: &mut W,
    arena: &Arena,
    pos: IVec2,
    cell_width: u16,
    glyph: &str,
) -> io::Result<()> {
    if !arena.contains(pos) {
        return Ok(());
    }
    if let Some((x, y)) = screen_position(pos, cell_width) {
        queue!(out, MoveTo(x, y), Print(glyph))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::arena::parse;
    use crate::sim::{EndReason, GameState};

    const MAP: &str = "\
######
#B  G#
#    #
#   P#
#    #
######";

    fn render(state: &GameState, settings: Settings) -> String {
        let layout = parse(MAP).unwrap();
        let mut renderer = TerminalRenderer::new(Vec::new(), settings);
        renderer.render(&layout.arena, state).unwrap();
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn test_frame_draws_arena_and_entities() {
        let state = parse(MAP).unwrap().initial_state();
        let frame = render(&state, Settings::default());

        assert!(frame.starts_with("\x1b[2J"));
        assert!(frame.contains("\x1b[1;1H######"));
        assert!(frame.contains("\x1b[2;1H#   G#"));
        // Ball at row 1, col 1
        assert!(frame.contains("\x1b[2;2Ho"));
        // Paddle around row 3, col 4
        for row in [3, 4, 5] {
            assert!(frame.contains(&format!("\x1b[{row};5H|")));
        }
        assert!(frame.ends_with("\x1b[7;1H"));
    }

    #[test]
    fn test_death_glyph_once_over() {
        let mut state = parse(MAP).unwrap().initial_state();
        state.end(EndReason::BallLost);
        let frame = render(&state, Settings::default());
        assert!(frame.contains("\x1b[2;2HX"));
        assert!(!frame.contains("\x1b[2;2Ho"));
    }

    #[test]
    fn test_wide_glyphs_double_the_column() {
        let state = parse(MAP).unwrap().initial_state();
        let settings = Settings {
            ball: "⚽".to_string(),
            use_emoji: true,
            ..Settings::default()
        };
        let frame = render(&state, settings);
        assert!(frame.contains("\x1b[2;3H⚽"));
        assert!(frame.contains("\x1b[4;9H|"));
    }

    #[test]
    fn test_paddle_cells_off_grid_are_skipped() {
        let mut state = parse(MAP).unwrap().initial_state();
        state.paddle.pos = IVec2::new(4, 0);
        let frame = render(&state, Settings::default());
        assert!(!frame.contains("\x1b[0;5H"));
        assert!(frame.contains("\x1b[1;5H|"));
        assert!(frame.contains("\x1b[2;5H|"));
    }

    #[test]
    fn test_rows_past_terminal_limit_are_skipped() {
        // More rows than a cursor escape can address
        let rows = 65_537;
        let mut text = String::from("###\n#B#\n#P#\n");
        for _ in 3..rows - 1 {
            text.push_str("# #\n");
        }
        text.push_str("###\n");
        let layout = parse(&text).unwrap();
        assert_eq!(layout.arena.rows(), rows);

        let mut renderer = TerminalRenderer::new(Vec::new(), Settings::default());
        renderer
            .render(&layout.arena, &layout.initial_state())
            .unwrap();
        let frame = String::from_utf8(renderer.into_inner()).unwrap();

        // Rows must not wrap around onto the top of the screen
        assert_eq!(frame.matches("\x1b[1;1H").count(), 1);
        assert_eq!(frame.matches("\x1b[2;1H").count(), 1);
        assert!(frame.contains("\x1b[65535;1H# #"));
        assert!(!frame.contains("\x1b[65536;"));
        assert!(frame.ends_with("\x1b[65535;1H"));
    }
}
