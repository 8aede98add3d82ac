//! Move validation: goal orientation, occupancy, chip supply and the cluster
//! rule.
//!
//! Validation never touches the grid. A reposition is checked as if its
//! origin were already empty by passing the origin along as `vacated`.

use smallvec::SmallVec;

use crate::core::{Coord, GameState, Move, Side, BOARD_LENGTH};
use crate::error::IllegalMove;

/// Same-side chips touching a cell. At most eight.
pub type Adjacent = SmallVec<[Coord; 8]>;

const LAST: u8 = BOARD_LENGTH as u8 - 1;

/// True if `side` may never put a chip on `at`: Black is kept off columns
/// 0 and 7, White off rows 0 and 7. Corners are forbidden to both.
#[must_use]
pub const fn is_forbidden(at: Coord, side: Side) -> bool {
    match side {
        Side::Black => at.x() == 0 || at.x() == LAST,
        Side::White => at.y() == 0 || at.y() == LAST,
    }
}

impl GameState {
    /// Whether `mv` is legal for `side` in this position.
    #[must_use]
    pub fn is_valid(&self, mv: Move, side: Side) -> bool {
        self.check(mv, side).is_ok()
    }

    /// Like [`GameState::is_valid`], but says which rule a move breaks.
    ///
    /// Rules are checked in order and the first failure is reported:
    /// resign, chip supply (placements), ownership of the origin
    /// (repositions), goal orientation, occupancy, cluster.
    pub fn check(&self, mv: Move, side: Side) -> Result<(), IllegalMove> {
        match mv {
            Move::Resign => Err(IllegalMove::Resign),
            Move::Place { to } => {
                if self.must_reposition(side) {
                    return Err(IllegalMove::NoChipsLeft { side });
                }
                self.check_landing(to, side, None)
            }
            Move::Reposition { to, from } => {
                if !self.grid.holds(from, side) {
                    return Err(IllegalMove::NotOwnChip { side, from });
                }
                self.check_landing(to, side, Some(from))
            }
        }
    }

    /// Destination rules shared by both kinds of move. `vacated` is treated
    /// as empty.
    pub(crate) fn check_landing(
        &self,
        to: Coord,
        side: Side,
        vacated: Option<Coord>,
    ) -> Result<(), IllegalMove> {
        if is_forbidden(to, side) {
            return Err(IllegalMove::WrongGoal { side, to });
        }
        if !self.grid.get(to).is_empty() {
            return Err(IllegalMove::Occupied { to });
        }
        if self.forms_cluster(to, side, vacated) {
            return Err(IllegalMove::Cluster { side, to });
        }
        Ok(())
    }

    /// Same-side chips in the eight cells around `at`, skipping `vacated`.
    #[must_use]
    pub fn adjacent_chips(&self, at: Coord, side: Side, vacated: Option<Coord>) -> Adjacent {
        at.neighbors()
            .filter(|&c| Some(c) != vacated && self.grid.holds(c, side))
            .collect()
    }

    /// Would a `side` chip on the empty cell `at` join a group of three?
    ///
    /// Two touching chips already make three. One touching chip makes three
    /// if it has a partner of its own.
    fn forms_cluster(&self, at: Coord, side: Side, vacated: Option<Coord>) -> bool {
        let adjacent = self.adjacent_chips(at, side, vacated);
        match adjacent.as_slice() {
            [] => false,
            [only] => !self.adjacent_chips(*only, side, vacated).is_empty(),
            _ => true,
        }
    }

    /// True if any `side` chip touches two others, i.e. the board already
    /// holds a forbidden cluster. Legal play never produces one.
    #[must_use]
    pub fn has_cluster(&self, side: Side) -> bool {
        self.grid
            .chips(side)
            .any(|c| self.adjacent_chips(c, side, None).len() >= 2)
    }
}
