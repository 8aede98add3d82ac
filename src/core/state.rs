//! Game state: the grid plus per-side chip counters.
//!
//! `GameState` is the single object a search driver holds. Its behaviour is
//! split across the crate by concern:
//! - `rules::legality`: move validation and the cluster rule
//! - `rules::moves`: apply / undo / legal move generation
//! - `network::search`: network detection
//! - `network::eval`: heuristic evaluation
//!
//! This module owns the storage and the text rendering.

use serde::{Deserialize, Serialize};

use super::config::{BOARD_LENGTH, CHIPS_PER_SIDE};
use super::coord::Coord;
use super::grid::{Cell, Grid};
use super::side::{Side, SideMap};

/// Full position of one game.
///
/// ## Invariants
///
/// - `chips[side]` equals the number of cells holding `side`, and never
///   exceeds `CHIPS_PER_SIDE`
/// - no chip sits on its side's forbidden edge
/// - no three same-side chips form a cluster
///
/// All of these hold as long as the board is only changed through `apply`
/// and `undo`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) grid: Grid,
    pub(crate) chips: SideMap<u8>,
}

impl GameState {
    /// An empty board with no chips placed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the cells.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Contents of one cell.
    #[inline]
    #[must_use]
    pub fn cell(&self, at: Coord) -> Cell {
        self.grid.get(at)
    }

    /// Chips `side` currently has on the board.
    #[inline]
    #[must_use]
    pub fn chips_on_board(&self, side: Side) -> u8 {
        self.chips[side]
    }

    /// Chips `side` can still place.
    #[must_use]
    pub fn chips_in_hand(&self, side: Side) -> u8 {
        CHIPS_PER_SIDE - self.chips[side]
    }

    /// True once `side` has placed every chip and may only reposition.
    #[must_use]
    pub fn must_reposition(&self, side: Side) -> bool {
        self.chips[side] >= CHIPS_PER_SIDE
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..BOARD_LENGTH {
            write!(f, "|")?;
            for cell in self.grid.row(y) {
                write!(f, " {} ", cell.glyph())?;
            }
            writeln!(f, "|")?;
        }
        write!(
            f,
            "Black: {}   White: {}",
            self.chips[Side::Black],
            self.chips[Side::White]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new();

        assert_eq!(state.chips_on_board(Side::Black), 0);
        assert_eq!(state.chips_on_board(Side::White), 0);
        assert_eq!(state.chips_in_hand(Side::White), CHIPS_PER_SIDE);
        assert!(!state.must_reposition(Side::Black));
        assert_eq!(state.cell(Coord::new(4, 4)), Cell::Empty);
    }

    #[test]
    fn test_render_empty_board() {
        let rendered = GameState::new().to_string();
        let lines: Vec<_> = rendered.lines().collect();

        assert_eq!(lines.len(), BOARD_LENGTH + 1);
        assert_eq!(lines[0], "| .  .  .  .  .  .  .  . |");
        assert_eq!(lines[8], "Black: 0   White: 0");
    }

    #[test]
    fn test_render_shows_chips_and_counts() {
        let mut state = GameState::new();
        state.grid.set(Coord::new(1, 0), Cell::Black);
        state.chips[Side::Black] = 1;
        state.grid.set(Coord::new(0, 2), Cell::White);
        state.chips[Side::White] = 1;

        let rendered = state.to_string();
        let lines: Vec<_> = rendered.lines().collect();

        assert_eq!(lines[0], "| .  B  .  .  .  .  .  . |");
        assert_eq!(lines[2], "| W  .  .  .  .  .  .  . |");
        assert_eq!(lines[8], "Black: 1   White: 1");
    }
}
