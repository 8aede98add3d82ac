//! Rules engine trait for search drivers.
//!
//! A driver (minimax, playouts, a match runner) talks to the game only
//! through `RulesEngine`:
//! - What moves are legal
//! - How moves change and un-change the position
//! - How good a position looks, and whether the game is over

use crate::core::{GameState, Move, MoveList, Side};

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// The side completed a network.
    Network(Side),
    /// The side resigned.
    Resigned(Side),
}

impl GameResult {
    /// The side that won.
    #[must_use]
    pub fn winner(&self) -> Side {
        match *self {
            GameResult::Network(side) => side,
            GameResult::Resigned(side) => side.opponent(),
        }
    }

    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        self.winner() == side
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_moves`: never contains `Move::Resign`; may be empty
/// - `apply` / `undo`: in-place, called in strict pairs by the driver
/// - `evaluate`: from `side`'s point of view, higher is better
/// - `is_terminal`: `mover` is the side that made the last move
pub trait RulesEngine {
    /// Get every legal move for a side.
    fn legal_moves(&self, side: Side) -> MoveList;

    /// Apply a move. Returns `false` (and changes nothing) if it is illegal.
    fn apply(&mut self, mv: Move, side: Side) -> bool;

    /// Take back a move previously applied for `side`.
    fn undo(&mut self, mv: Move, side: Side) -> bool;

    /// Heuristic score of the position for `side`.
    fn evaluate(&self, side: Side) -> f64;

    /// Check if the game is over after `mover` moved.
    ///
    /// Returns `Some(result)` if a network decides the game, `None` if it
    /// continues.
    fn is_terminal(&self, mover: Side) -> Option<GameResult>;
}

impl RulesEngine for GameState {
    fn legal_moves(&self, side: Side) -> MoveList {
        GameState::legal_moves(self, side)
    }

    fn apply(&mut self, mv: Move, side: Side) -> bool {
        GameState::apply(self, mv, side)
    }

    fn undo(&mut self, mv: Move, side: Side) -> bool {
        GameState::undo(self, mv, side)
    }

    fn evaluate(&self, side: Side) -> f64 {
        GameState::evaluate(self, side)
    }

    fn is_terminal(&self, mover: Side) -> Option<GameResult> {
        self.winner_after(mover).map(GameResult::Network)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Cell, Coord};

    #[test]
    fn test_game_result_winner() {
        let network = GameResult::Network(Side::White);
        assert!(network.is_winner(Side::White));
        assert!(!network.is_winner(Side::Black));

        let resigned = GameResult::Resigned(Side::White);
        assert_eq!(resigned.winner(), Side::Black);
        assert!(!resigned.is_winner(Side::White));
    }

    #[test]
    fn test_engine_through_trait() {
        fn play<E: RulesEngine>(engine: &mut E) -> (usize, bool) {
            let moves = engine.legal_moves(Side::Black);
            let first = moves[0];
            let applied = engine.apply(first, Side::Black);
            let terminal = engine.is_terminal(Side::Black).is_some();
            assert!(engine.undo(first, Side::Black));
            (moves.len(), applied && !terminal)
        }

        let mut state = GameState::new();
        assert_eq!(play(&mut state), (48, true));
        assert_eq!(state, GameState::new());
        assert_eq!(RulesEngine::evaluate(&state, Side::White), 0.0);
        assert_eq!(state.cell(Coord::new(1, 0)), Cell::Empty);
    }
}
