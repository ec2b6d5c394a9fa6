//! Terminal rendering module
//!
//! The game loop only knows the [`Renderer`] trait; [`TerminalRenderer`]
//! draws full frames with crossterm escape sequences.

pub mod terminal;

pub use terminal::TerminalRenderer;

use std::io;

use glam::IVec2;

use crate::sim::{Arena, GameState};

/// Draws one frame per tick
pub trait Renderer {
    fn render(&mut self, arena: &Arena, state: &GameState) -> io::Result<()>;
}

/// Map a grid position to a terminal `(column, row)`
///
/// Each cell is `cell_width` columns wide (2 for emoji glyphs). `None` when
/// the position cannot be addressed on screen.
pub fn screen_position(pos: IVec2, cell_width: u16) -> Option<(u16, u16)> {
    let col = u16::try_from(pos.x).ok()?.checked_mul(cell_width)?;
    let row = usize::try_from(pos.y).ok()?;
    Some((addressable(col)?, screen_row(row)?))
}

/// Terminal row for a grid row, `None` past the last addressable row
pub fn screen_row(row: usize) -> Option<u16> {
    addressable(u16::try_from(row).ok()?)
}

/// Cursor escapes are 1-based, so `u16::MAX` itself cannot be written
fn addressable(coord: u16) -> Option<u16> {
    (coord < u16::MAX).then_some(coord)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_position() {
        assert_eq!(screen_position(IVec2::new(3, 5), 1), Some((3, 5)));
        assert_eq!(screen_position(IVec2::new(3, 5), 2), Some((6, 5)));
        assert_eq!(screen_position(IVec2::new(-1, 5), 1), None);
        assert_eq!(screen_position(IVec2::new(1, -1), 2), None);
        assert_eq!(screen_position(IVec2::new(40_000, 0), 2), None);
        assert_eq!(screen_position(IVec2::new(0, 70_000), 1), None);
    }

    #[test]
    fn test_screen_row_limits() {
        assert_eq!(screen_row(0), Some(0));
        assert_eq!(screen_row(65_534), Some(65_534));
        assert_eq!(screen_row(65_535), None);
        assert_eq!(screen_row(70_000), None);
    }
}
