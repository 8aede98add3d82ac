//! Raw 8x8 cell storage.
//!
//! The grid knows nothing about the rules; `GameState` keeps it consistent
//! with the chip counters.

use serde::{Deserialize, Serialize};

use super::config::BOARD_LENGTH;
use super::coord::Coord;
use super::side::Side;

/// Contents of one cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    /// The side whose chip is here, if any.
    #[inline]
    #[must_use]
    pub const fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Side::Black),
            Cell::White => Some(Side::White),
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Glyph for the board rendering.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => 'B',
            Cell::White => 'W',
        }
    }
}

impl From<Side> for Cell {
    fn from(side: Side) -> Self {
        match side {
            Side::Black => Cell::Black,
            Side::White => Cell::White,
        }
    }
}

/// Fixed 8x8 array of cells, row-major.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    cells: Vec<Cell>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// An empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: vec![Cell::Empty; BOARD_LENGTH * BOARD_LENGTH],
        }
    }

    #[inline]
    #[must_use]
    pub fn get(&self, at: Coord) -> Cell {
        self.cells[at.index()]
    }

    #[inline]
    pub fn set(&mut self, at: Coord, cell: Cell) {
        self.cells[at.index()] = cell;
    }

    /// True if `side` has a chip at `at`.
    #[inline]
    #[must_use]
    pub fn holds(&self, at: Coord, side: Side) -> bool {
        self.get(at) == Cell::from(side)
    }

    /// Cells holding `side`'s chips, row-major.
    pub fn chips(&self, side: Side) -> impl Iterator<Item = Coord> + '_ {
        let wanted = Cell::from(side);
        Coord::all().filter(move |&c| self.get(c) == wanted)
    }

    /// Number of cells holding `side`'s chips.
    #[must_use]
    pub fn count(&self, side: Side) -> usize {
        let wanted = Cell::from(side);
        self.cells.iter().filter(|&&c| c == wanted).count()
    }

    /// One row of cells, left to right.
    #[must_use]
    pub fn row(&self, y: usize) -> &[Cell] {
        &self.cells[y * BOARD_LENGTH..(y + 1) * BOARD_LENGTH]
    }
}
