//! Board coordinates and compass directions.
//!
//! `x` is the column (left to right) and `y` the row (top to bottom), both
//! starting at zero. Every `Coord` is on the board: `Coord::new` asserts it,
//! `Coord::try_new` reports it as a `CoordError`.

use serde::{Deserialize, Serialize};

use super::config::BOARD_LENGTH;
use crate::error::CoordError;

const LAST: u8 = BOARD_LENGTH as u8 - 1;

/// A cell on the 8x8 board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    x: u8,
    y: u8,
}

impl Coord {
    /// Create a coordinate.
    ///
    /// # Panics
    ///
    /// Panics if either component is off the board. Call sites pass
    /// board-bounded values by construction; use [`Coord::try_new`] for
    /// untrusted input.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x <= LAST && y <= LAST, "coordinate off the board");
        Self { x, y }
    }

    /// Create a coordinate from possibly out-of-range values.
    ///
    /// ```
    /// use network_engine::core::Coord;
    ///
    /// assert_eq!(Coord::try_new(3, 4), Ok(Coord::new(3, 4)));
    /// assert!(Coord::try_new(8, 0).is_err());
    /// assert!(Coord::try_new(0, -1).is_err());
    /// ```
    pub fn try_new(x: i32, y: i32) -> Result<Self, CoordError> {
        if (0..BOARD_LENGTH as i32).contains(&x) && (0..BOARD_LENGTH as i32).contains(&y) {
            Ok(Self {
                x: x as u8,
                y: y as u8,
            })
        } else {
            Err(CoordError::OutOfRange { x, y })
        }
    }

    /// Column.
    #[inline]
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Row.
    #[inline]
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Move by `(dx, dy)`, or `None` when that leaves the board.
    #[inline]
    #[must_use]
    pub fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        let x = self.x as i8 + dx;
        let y = self.y as i8 + dy;
        if (0..BOARD_LENGTH as i8).contains(&x) && (0..BOARD_LENGTH as i8).contains(&y) {
            Some(Self {
                x: x as u8,
                y: y as u8,
            })
        } else {
            None
        }
    }

    /// One step in `dir`, or `None` at the board boundary.
    #[inline]
    #[must_use]
    pub fn step(self, dir: Direction) -> Option<Self> {
        let (dx, dy) = dir.delta();
        self.offset(dx, dy)
    }

    /// True for cells in the outermost ring (any row or column 0 or 7).
    #[must_use]
    pub const fn is_on_edge(self) -> bool {
        self.x == 0 || self.x == LAST || self.y == 0 || self.y == LAST
    }

    /// The up to eight cells touching this one.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        Direction::ALL.into_iter().filter_map(move |d| self.step(d))
    }

    /// Cells within `radius` in both axes, excluding `self`, clipped to the
    /// board. Row-major order.
    pub fn within(self, radius: u8) -> impl Iterator<Item = Coord> {
        let lo_x = self.x.saturating_sub(radius);
        let hi_x = (self.x + radius).min(LAST);
        let lo_y = self.y.saturating_sub(radius);
        let hi_y = (self.y + radius).min(LAST);
        (lo_y..=hi_y)
            .flat_map(move |y| (lo_x..=hi_x).map(move |x| Coord { x, y }))
            .filter(move |&c| c != self)
    }

    /// Every cell on the board, row-major (row 0 first).
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..=LAST).flat_map(|y| (0..=LAST).map(move |x| Coord { x, y }))
    }

    /// Flat index `y * 8 + x`.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.y as usize * BOARD_LENGTH + self.x as usize
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// The eight compass directions, starting north and turning counter-clockwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    NorthWest,
    West,
    SouthWest,
    South,
    SouthEast,
    East,
    NorthEast,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthWest,
        Direction::West,
        Direction::SouthWest,
        Direction::South,
        Direction::SouthEast,
        Direction::East,
        Direction::NorthEast,
    ];

    /// `(dx, dy)` for one step. North is decreasing `y`.
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::North => (0, -1),
            Direction::NorthWest => (-1, -1),
            Direction::West => (-1, 0),
            Direction::SouthWest => (-1, 1),
            Direction::South => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::East => (1, 0),
            Direction::NorthEast => (1, -1),
        }
    }

    /// The line this direction runs along. Opposite directions share an axis.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Direction::North | Direction::South => Axis::Vertical,
            Direction::West | Direction::East => Axis::Horizontal,
            Direction::NorthEast | Direction::SouthWest => Axis::Rising,
            Direction::NorthWest | Direction::SouthEast => Axis::Falling,
        }
    }
}

/// A line through the board. Network hops are compared by axis: two
/// consecutive hops along the same axis are not allowed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Same column.
    Vertical,
    /// Same row.
    Horizontal,
    /// Lower-left to upper-right.
    Rising,
    /// Upper-left to lower-right.
    Falling,
}

impl Axis {
    /// Axis of the straight line from `from` to `to`.
    ///
    /// Only meaningful for distinct cells on a shared row, column or diagonal,
    /// which is all the network search ever produces.
    #[must_use]
    pub fn between(from: Coord, to: Coord) -> Axis {
        let dx = to.x as i8 - from.x as i8;
        let dy = to.y as i8 - from.y as i8;
        if dx == 0 {
            Axis::Vertical
        } else if dy == 0 {
            Axis::Horizontal
        } else if (dx > 0) != (dy > 0) {
            Axis::Rising
        } else {
            Axis::Falling
        }
    }
}
