//! Static evaluation of a position.
//!
//! ## Features
//!
//! For each side and each of its goal edges, a full path expansion from that
//! edge yields four numbers:
//! - `longest_sq`: the longest path length found, squared
//! - `expanded`: how many path nodes were taken off the frontier
//! - `dx`, `dy`: the closest any expanded chip came to the far target line
//!   along each axis (starting at 8)
//!
//! The score is a weighted sum of own features minus opponent features, with
//! a complete network short-circuiting to the score bounds.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::search::Goal;
use crate::core::{EvalConfig, GameState, Side, BOARD_LENGTH};

/// Features gathered by expanding one goal edge.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NetworkFeatures {
    pub longest_sq: f64,
    pub expanded: f64,
    pub dx: f64,
    pub dy: f64,
}

impl Default for NetworkFeatures {
    fn default() -> Self {
        Self {
            longest_sq: 0.0,
            expanded: 0.0,
            dx: BOARD_LENGTH as f64,
            dy: BOARD_LENGTH as f64,
        }
    }
}

impl NetworkFeatures {
    /// Features in weight order.
    #[must_use]
    pub fn as_array(&self) -> [f64; 4] {
        [self.longest_sq, self.expanded, self.dx, self.dy]
    }
}

/// The point an expansion from `from` is heading for.
///
/// The far edge sets one coordinate; the other is the board's center line.
fn target(side: Side, from: Goal) -> (f64, f64) {
    let far = match from {
        Goal::Start => (BOARD_LENGTH - 1) as f64,
        Goal::End => 0.0,
    };
    let center = (BOARD_LENGTH as f64 - 1.0) / 2.0;
    match side {
        Side::Black => (center, far),
        Side::White => (far, center),
    }
}

impl GameState {
    /// Expand every path of `side` from its `from` edge and summarize it.
    ///
    /// Returns `None` if the expansion runs into a complete network, which
    /// only happens when expanding from `Goal::Start`.
    #[must_use]
    pub fn features(&self, side: Side, from: Goal) -> Option<NetworkFeatures> {
        let (gx, gy) = target(side, from);
        let mut longest = 0u8;
        let mut features = NetworkFeatures::default();

        let expansion = self.expand(side, from, |node| {
            longest = longest.max(node.len);
            features.expanded += 1.0;
            features.dx = features.dx.min((gx - f64::from(node.coord.x())).abs());
            features.dy = features.dy.min((gy - f64::from(node.coord.y())).abs());
        });
        if expansion.network.is_some() {
            return None;
        }

        features.longest_sq = f64::from(longest) * f64::from(longest);
        Some(features)
    }

    /// Score the position for `side` with the default weights.
    #[must_use]
    pub fn evaluate(&self, side: Side) -> f64 {
        self.evaluate_with(side, &EvalConfig::default())
    }

    /// Score the position for `side`.
    ///
    /// A network for `side` scores `score_max`; otherwise a network for the
    /// opponent scores `score_min`. Every other position lands strictly
    /// between the two.
    #[must_use]
    #[instrument(level = "trace", skip(self, config))]
    pub fn evaluate_with(&self, side: Side, config: &EvalConfig) -> f64 {
        let Some(own_start) = self.features(side, Goal::Start) else {
            return config.score_max;
        };
        let enemy = side.opponent();
        let Some(enemy_start) = self.features(enemy, Goal::Start) else {
            return config.score_min;
        };
        let own_end = self.features(side, Goal::End).unwrap_or_default();
        let enemy_end = self.features(enemy, Goal::End).unwrap_or_default();

        let score = (0..4)
            .map(|i| {
                let diff = own_start.as_array()[i] + own_end.as_array()[i]
                    - enemy_start.as_array()[i]
                    - enemy_end.as_array()[i];
                diff * config.weights[i]
            })
            .sum();
        config.clamp(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Coord, Move};

    fn with_black(cells: &[(u8, u8)]) -> GameState {
        let mut state = GameState::new();
        for &(x, y) in cells {
            assert!(state.apply(Move::place(Coord::new(x, y)), Side::Black));
        }
        state
    }

    #[test]
    fn test_empty_board_is_even() {
        let state = GameState::new();
        assert_eq!(state.evaluate(Side::Black), 0.0);
        assert_eq!(state.evaluate(Side::White), 0.0);
        assert_eq!(
            state.features(Side::Black, Goal::Start),
            Some(NetworkFeatures::default())
        );
    }

    #[test]
    fn test_single_goal_chip() {
        let state = with_black(&[(3, 0)]);

        let start = state.features(Side::Black, Goal::Start).unwrap();
        assert_eq!(start.as_array(), [1.0, 1.0, 0.5, 7.0]);
        assert_eq!(
            state.features(Side::Black, Goal::End),
            Some(NetworkFeatures::default())
        );

        assert_eq!(state.evaluate(Side::Black), 10.5);
        assert_eq!(state.evaluate(Side::White), -10.5);
    }

    #[test]
    fn test_interior_chips_are_not_roots() {
        // Neither chip is on a goal edge, so no expansion reaches them.
        let state = with_black(&[(3, 3), (5, 5)]);

        assert_eq!(
            state.features(Side::Black, Goal::Start),
            Some(NetworkFeatures::default())
        );
        assert_eq!(state.evaluate(Side::Black), 0.0);
    }

    #[test]
    fn test_network_hits_bounds() {
        let state = with_black(&[(2, 0), (2, 2), (4, 2), (4, 4), (2, 4), (2, 7)]);

        assert_eq!(state.features(Side::Black, Goal::Start), None);
        assert!(state.features(Side::Black, Goal::End).is_some());
        assert_eq!(state.evaluate(Side::Black), 100.0);
        assert_eq!(state.evaluate(Side::White), -100.0);
    }

    #[test]
    fn test_custom_weights() {
        let state = with_black(&[(3, 0)]);
        let config = EvalConfig::default().with_weights([0.0, 2.0, 0.0, 0.0]);

        assert_eq!(state.evaluate_with(Side::Black, &config), 2.0);
        assert_eq!(state.evaluate_with(Side::White, &config), -2.0);
    }

    #[test]
    fn test_heuristic_scores_are_clamped() {
        let state = with_black(&[(3, 0)]);
        let config = EvalConfig::default().with_bounds(-5.0, 5.0);

        assert_eq!(state.evaluate_with(Side::Black, &config), 4.0);
        assert_eq!(state.evaluate_with(Side::White, &config), -4.0);
    }
}
