//! Board constants and evaluation configuration.
//!
//! The board geometry and chip supply are fixed by the rules of Network and
//! live here as named constants. The evaluation weights and score bounds are
//! tuning parameters, collected in `EvalConfig` and handed to the evaluator.

use serde::{Deserialize, Serialize};

/// Cells per row and per column.
pub const BOARD_LENGTH: usize = 8;

/// Chips each side may have on the board. Once all are placed, a side can
/// only reposition.
pub const CHIPS_PER_SIDE: u8 = 10;

/// Minimum number of chips in a winning network.
pub const MIN_NETWORK_LEN: u8 = 6;

/// Evaluation parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvalConfig {
    /// Multipliers for the four network features, in the order
    /// longest path squared, nodes expanded, column distance, row distance.
    pub weights: [f64; 4],

    /// Score reported when the opponent has a network.
    /// Heuristic scores stay strictly above it.
    pub score_min: f64,

    /// Score reported when the evaluated side has a network.
    /// Heuristic scores stay strictly below it.
    pub score_max: f64,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            weights: [1.0, 1.0, -1.0, -1.0],
            score_min: -100.0,
            score_max: 100.0,
        }
    }
}

impl EvalConfig {
    /// Replace the feature weights.
    #[must_use]
    pub fn with_weights(mut self, weights: [f64; 4]) -> Self {
        self.weights = weights;
        self
    }

    /// Replace the score bounds.
    #[must_use]
    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        assert!(min + 2.0 <= max, "score bounds must leave room for heuristic scores");
        self.score_min = min;
        self.score_max = max;
        self
    }

    /// Clamp a heuristic score so it never reaches a win/loss bound.
    #[must_use]
    pub fn clamp(&self, score: f64) -> f64 {
        if score <= self.score_min {
            self.score_min + 1.0
        } else if score >= self.score_max {
            self.score_max - 1.0
        } else {
            score
        }
    }
}
