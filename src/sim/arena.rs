//! Arena grid and map loading
//!
//! Maps are plain text, one row per line:
//! `#` wall, `G` ghost (decoration only), `B` ball start, `P` paddle center,
//! anything else is empty floor.

use std::fs;
use std::path::Path;

use glam::IVec2;

use super::state::{Ball, GameState, Paddle};
use crate::{Edge, LoadError, Marker};

/// One cell of the arena grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Wall,
    /// Drawn but never collided with
    Decoration,
    Empty,
}

impl Cell {
    fn from_char(c: char) -> Self {
        match c {
            '#' => Cell::Wall,
            'G' => Cell::Decoration,
            _ => Cell::Empty,
        }
    }
}

/// Immutable grid of cells; every row has the same length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arena {
    cells: Vec<Vec<Cell>>,
    cols: usize,
}

/// A parsed map: the arena plus the entities found in it
#[derive(Debug, Clone)]
pub struct Layout {
    pub arena: Arena,
    pub ball: Ball,
    pub paddle: Paddle,
}

impl Layout {
    /// Initial game state for this map
    pub fn initial_state(&self) -> GameState {
        GameState::new(self.ball, self.paddle)
    }
}

impl Arena {
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn last_row(&self) -> i32 {
        self.rows() as i32 - 1
    }

    pub fn last_col(&self) -> i32 {
        self.cols as i32 - 1
    }

    pub fn contains(&self, pos: IVec2) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x <= self.last_col() && pos.y <= self.last_row()
    }

    /// Cell at `pos`, `None` off the grid
    pub fn cell(&self, pos: IVec2) -> Option<Cell> {
        if !self.contains(pos) {
            return None;
        }
        Some(self.cells[pos.y as usize][pos.x as usize])
    }

    /// Off-grid positions block like walls
    pub fn is_wall(&self, pos: IVec2) -> bool {
        !matches!(self.cell(pos), Some(Cell::Empty | Cell::Decoration))
    }

    pub fn is_top_or_bottom(&self, row: i32) -> bool {
        row <= 0 || row >= self.last_row()
    }

    pub fn is_left_or_right(&self, col: i32) -> bool {
        col <= 0 || col >= self.last_col()
    }

    pub fn row_cells(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(Vec::as_slice)
    }
}

/// Read and parse a map file
pub fn load(path: impl AsRef<Path>) -> Result<Layout, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let layout = parse(&text)?;
    log::info!(
        "Loaded arena {} ({}x{})",
        path.display(),
        layout.arena.rows(),
        layout.arena.cols()
    );
    Ok(layout)
}

/// Parse map text into an arena, rejecting malformed maps
pub fn parse(text: &str) -> Result<Layout, LoadError> {
    let mut lines: Vec<&str> = text
        .lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    if lines.is_empty() {
        return Err(LoadError::Empty);
    }

    let expected = lines[0].chars().count();
    let mut cells = Vec::with_capacity(lines.len());
    let mut ball = None;
    let mut paddle = None;

    for (row, line) in lines.iter().enumerate() {
        let len = line.chars().count();
        if len != expected {
            return Err(LoadError::RaggedRow { row, len, expected });
        }
        let mut row_cells = Vec::with_capacity(len);
        for (col, c) in line.chars().enumerate() {
            let slot = match c {
                'B' => Some((&mut ball, Marker::Ball)),
                'P' => Some((&mut paddle, Marker::Paddle)),
                _ => None,
            };
            if let Some((slot, marker)) = slot {
                if slot.is_some() {
                    return Err(LoadError::DuplicateMarker { marker, row, col });
                }
                *slot = Some(IVec2::new(col as i32, row as i32));
            }
            row_cells.push(Cell::from_char(c));
        }
        cells.push(row_cells);
    }

    let ball = ball.ok_or(LoadError::MissingMarker(Marker::Ball))?;
    let paddle = paddle.ok_or(LoadError::MissingMarker(Marker::Paddle))?;
    let arena = Arena {
        cells,
        cols: expected,
    };
    check_edges(&arena)?;

    Ok(Layout {
        arena,
        ball: Ball::new(ball.y, ball.x),
        paddle: Paddle::new(paddle.y, paddle.x),
    })
}

fn check_edges(arena: &Arena) -> Result<(), LoadError> {
    let last_row = arena.rows() - 1;
    let last_col = arena.cols() - 1;
    let row_has_wall = |row: usize| arena.cells[row].contains(&Cell::Wall);
    let col_has_wall = |col: usize| arena.cells.iter().any(|r| r[col] == Cell::Wall);

    if !row_has_wall(0) {
        return Err(LoadError::OpenEdge(Edge::Top));
    }
    if !row_has_wall(last_row) {
        return Err(LoadError::OpenEdge(Edge::Bottom));
    }
    if !col_has_wall(0) {
        return Err(LoadError::OpenEdge(Edge::Left));
    }
    if !col_has_wall(last_col) {
        return Err(LoadError::OpenEdge(Edge::Right));
    }
    Ok(())
}
