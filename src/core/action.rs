//! Move representation.
//!
//! A move only makes sense relative to a side and a position: the same
//! `Move::Place` can be legal for Black and illegal for White. Validation
//! lives in `rules`.

use serde::{Deserialize, Serialize};

use super::coord::Coord;

/// A complete game move.
///
/// ## Example
///
/// ```
/// use network_engine::core::{Coord, Move};
///
/// let place = Move::place(Coord::new(3, 4));
/// let step = Move::reposition(Coord::new(3, 2), Coord::new(3, 4));
///
/// assert_eq!(place.destination(), Some(Coord::new(3, 4)));
/// assert_eq!(step.origin(), Some(Coord::new(3, 4)));
/// assert_eq!(step.inverse(), Some(Move::reposition(Coord::new(3, 4), Coord::new(3, 2))));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Put a new chip on an empty cell.
    Place { to: Coord },
    /// Move one of the side's chips from `from` to `to`.
    Reposition { to: Coord, from: Coord },
    /// Give up the game.
    Resign,
}

/// Working list of moves returned by move generation.
pub type MoveList = Vec<Move>;

impl Move {
    #[must_use]
    pub const fn place(to: Coord) -> Self {
        Move::Place { to }
    }

    #[must_use]
    pub const fn reposition(to: Coord, from: Coord) -> Self {
        Move::Reposition { to, from }
    }

    /// The cell that receives a chip.
    #[must_use]
    pub const fn destination(self) -> Option<Coord> {
        match self {
            Move::Place { to } | Move::Reposition { to, .. } => Some(to),
            Move::Resign => None,
        }
    }

    /// The cell a repositioned chip leaves.
    #[must_use]
    pub const fn origin(self) -> Option<Coord> {
        match self {
            Move::Reposition { from, .. } => Some(from),
            Move::Place { .. } | Move::Resign => None,
        }
    }

    /// The reposition that takes the chip back. Only repositions have one.
    #[must_use]
    pub const fn inverse(self) -> Option<Move> {
        match self {
            Move::Reposition { to, from } => Some(Move::Reposition { to: from, from: to }),
            Move::Place { .. } | Move::Resign => None,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Place { to } => write!(f, "place {}", to),
            Move::Reposition { to, from } => write!(f, "step {} -> {}", from, to),
            Move::Resign => write!(f, "resign"),
        }
    }
}
