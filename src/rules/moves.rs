//! Move application, inversion and legal move generation.
//!
//! `apply` and `undo` mutate the position in place so a search driver can
//! walk the game tree without cloning. They must be called in strict
//! apply/undo pairs.

use smallvec::SmallVec;
use tracing::{instrument, trace};

use crate::core::{Cell, Coord, GameState, Move, MoveList, Side, CHIPS_PER_SIDE};

/// How far a repositioned chip's absence reaches: a vacated cell can only
/// change the cluster verdict for destinations it touches or whose single
/// neighbour it touches.
const VACATE_RADIUS: u8 = 2;

impl GameState {
    /// Play `mv` for `side`.
    ///
    /// Returns `false` without touching the position for resignations and
    /// illegal moves.
    pub fn apply(&mut self, mv: Move, side: Side) -> bool {
        if let Err(reason) = self.check(mv, side) {
            trace!(%mv, %side, %reason, "move rejected");
            return false;
        }

        match mv {
            Move::Place { to } => {
                self.chips[side] += 1;
                self.grid.set(to, Cell::from(side));
            }
            Move::Reposition { to, from } => {
                self.grid.set(from, Cell::Empty);
                self.grid.set(to, Cell::from(side));
            }
            Move::Resign => return false,
        }
        true
    }

    /// Take back `mv`, previously applied for `side`.
    ///
    /// Returns `false` for resignations and for placements whose destination
    /// does not hold a `side` chip. Other misuse (undoing a move that was
    /// never applied) is not detected.
    pub fn undo(&mut self, mv: Move, side: Side) -> bool {
        match mv {
            Move::Resign => false,
            Move::Place { to } => {
                if !self.grid.holds(to, side) {
                    trace!(%mv, %side, "undo of a placement that is not on the board");
                    return false;
                }
                self.chips[side] -= 1;
                self.grid.set(to, Cell::Empty);
                true
            }
            Move::Reposition { .. } => match mv.inverse() {
                Some(back) => self.apply(back, side),
                None => false,
            },
        }
    }

    /// Every legal move for `side`.
    ///
    /// Placements while `side` has chips in hand, repositions once all ten are
    /// on the board. Repositions may be listed more than once. The order is
    /// deterministic: destinations row-major, origins row-major.
    #[instrument(level = "trace", skip(self))]
    pub fn legal_moves(&self, side: Side) -> MoveList {
        let mut moves = MoveList::new();

        if !self.must_reposition(side) {
            moves.extend(
                Coord::all()
                    .filter(|&to| self.check_landing(to, side, None).is_ok())
                    .map(Move::place),
            );
            trace!(count = moves.len(), "placements");
            return moves;
        }

        let origins: SmallVec<[Coord; CHIPS_PER_SIDE as usize]> = self.grid.chips(side).collect();

        // Open even with every chip in place: any chip may go there.
        for to in Coord::all() {
            if self.check_landing(to, side, None).is_ok() {
                moves.extend(origins.iter().map(|&from| Move::reposition(to, from)));
            }
        }

        // Open only once a particular chip has left.
        for &from in &origins {
            moves.extend(
                from.within(VACATE_RADIUS)
                    .map(|to| Move::reposition(to, from))
                    .filter(|&m| self.is_valid(m, side)),
            );
        }

        trace!(count = moves.len(), "repositions");
        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    /// Ten Black chips, none touching another.
    fn full_black_hand() -> GameState {
        let mut state = GameState::new();
        let cells = [(1, 0), (3, 0), (5, 0), (1, 2), (3, 2), (5, 2), (1, 4), (3, 4), (5, 4), (3, 6)];
        for (x, y) in cells {
            assert!(state.apply(Move::place(Coord::new(x, y)), Side::Black));
        }
        state
    }

    #[test]
    fn test_place_updates_cell_and_counter() {
        let mut state = GameState::new();

        assert!(state.apply(Move::place(Coord::new(1, 0)), Side::Black));
        assert_eq!(state.cell(Coord::new(1, 0)), Cell::Black);
        assert_eq!(state.chips_on_board(Side::Black), 1);
        assert_eq!(state.chips_on_board(Side::White), 0);
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let mut state = GameState::new();
        assert!(state.apply(Move::place(Coord::new(1, 0)), Side::Black));
        let before = state.clone();

        assert!(!state.apply(Move::place(Coord::new(0, 0)), Side::Black));
        assert!(!state.apply(Move::place(Coord::new(1, 0)), Side::White));
        assert!(!state.apply(Move::Resign, Side::Black));
        assert!(!state.apply(Move::reposition(Coord::new(3, 3), Coord::new(4, 4)), Side::Black));

        assert_eq!(state, before);
    }

    #[test]
    fn test_reposition_preserves_count() {
        let mut state = GameState::new();
        assert!(state.apply(Move::place(Coord::new(2, 2)), Side::White));

        assert!(state.apply(Move::reposition(Coord::new(5, 5), Coord::new(2, 2)), Side::White));
        assert_eq!(state.cell(Coord::new(2, 2)), Cell::Empty);
        assert_eq!(state.cell(Coord::new(5, 5)), Cell::White);
        assert_eq!(state.chips_on_board(Side::White), 1);
    }

    #[test]
    fn test_undo_place() {
        let mut state = GameState::new();
        let before = state.clone();
        let m = Move::place(Coord::new(4, 3));

        assert!(state.apply(m, Side::White));
        assert!(state.undo(m, Side::White));
        assert_eq!(state, before);
    }

    #[test]
    fn test_undo_reposition() {
        let mut state = GameState::new();
        assert!(state.apply(Move::place(Coord::new(2, 2)), Side::Black));
        assert!(state.apply(Move::place(Coord::new(3, 3)), Side::Black));
        let before = state.clone();
        let m = Move::reposition(Coord::new(5, 6), Coord::new(3, 3));

        assert!(state.apply(m, Side::Black));
        assert!(state.undo(m, Side::Black));
        assert_eq!(state, before);
    }

    #[test]
    fn test_undo_detects_misuse() {
        let mut state = GameState::new();
        assert!(state.apply(Move::place(Coord::new(3, 3)), Side::Black));
        let before = state.clone();

        assert!(!state.undo(Move::place(Coord::new(4, 4)), Side::Black));
        assert!(!state.undo(Move::place(Coord::new(3, 3)), Side::White));
        assert!(!state.undo(Move::Resign, Side::Black));
        assert_eq!(state, before);
    }

    #[test]
    fn test_empty_board_placements() {
        let state = GameState::new();

        let black = state.legal_moves(Side::Black);
        let white = state.legal_moves(Side::White);

        // Everything except the two forbidden edges.
        assert_eq!(black.len(), 48);
        assert_eq!(white.len(), 48);
        assert!(black.iter().all(|m| matches!(m, Move::Place { .. })));
        assert!(black.iter().all(|m| m.destination().unwrap().x() != 0));
        assert!(white.iter().all(|m| m.destination().unwrap().y() != 7));
    }

    #[test]
    fn test_placements_skip_occupied_and_clusters() {
        let mut state = GameState::new();
        assert!(state.apply(Move::place(Coord::new(3, 3)), Side::Black));
        assert!(state.apply(Move::place(Coord::new(4, 4)), Side::Black));

        let moves = state.legal_moves(Side::Black);
        let destinations: BTreeSet<_> = moves.iter().filter_map(|m| m.destination()).collect();

        assert!(!destinations.contains(&Coord::new(3, 3)));
        // Touches the pair.
        assert!(!destinations.contains(&Coord::new(3, 4)));
        assert!(!destinations.contains(&Coord::new(5, 5)));
        assert!(!destinations.contains(&Coord::new(2, 2)));
        assert!(destinations.contains(&Coord::new(1, 1)));
        assert!(moves.iter().all(|&m| state.is_valid(m, Side::Black)));
    }

    #[test]
    fn test_full_hand_only_repositions() {
        let state = full_black_hand();
        assert!(state.must_reposition(Side::Black));

        let moves = state.legal_moves(Side::Black);

        assert!(!moves.is_empty());
        assert!(moves.iter().all(|m| matches!(m, Move::Reposition { .. })));
        assert!(moves.iter().all(|&m| state.is_valid(m, Side::Black)));
        // White still places.
        assert!(state
            .legal_moves(Side::White)
            .iter()
            .all(|m| matches!(m, Move::Place { .. })));
    }

    #[test]
    fn test_repositions_cover_every_legal_pair() {
        let state = full_black_hand();
        let origins: Vec<_> = state.grid().chips(Side::Black).collect();

        let generated: BTreeSet<_> = state
            .legal_moves(Side::Black)
            .into_iter()
            .filter_map(|m| Some((m.destination()?, m.origin()?)))
            .collect();
        let brute_force: BTreeSet<_> = Coord::all()
            .flat_map(|to| origins.iter().map(move |&from| (to, from)))
            .filter(|&(to, from)| state.is_valid(Move::reposition(to, from), Side::Black))
            .collect();

        assert_eq!(generated, brute_force);
    }

    #[test]
    fn test_legal_moves_deterministic() {
        let state = full_black_hand();
        assert_eq!(state.legal_moves(Side::Black), state.legal_moves(Side::Black));
    }

    #[test]
    fn test_every_legal_move_undoes_cleanly() {
        let mut state = full_black_hand();
        assert!(state.apply(Move::place(Coord::new(0, 3)), Side::White));
        let before = state.clone();

        for side in Side::ALL {
            for m in state.legal_moves(side) {
                assert!(state.apply(m, side), "{} for {}", m, side);
                assert!(state.undo(m, side), "undo {} for {}", m, side);
                assert_eq!(state, before, "{} for {}", m, side);
            }
        }
    }
}
