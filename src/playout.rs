//! Random playouts.
//!
//! A playout alternates sides from a given position, each picking uniformly
//! among its legal moves, until a network decides the game, a side is left
//! without moves, or the ply cap is reached. Everything played is recorded so
//! the position can be unwound afterwards.

use tracing::{debug, instrument, warn};

use crate::core::{GameRng, Move, Side};
use crate::rules::{GameResult, RulesEngine};

/// Default cap on plies per playout.
pub const DEFAULT_MAX_PLIES: u32 = 200;

/// Outcome of one playout.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayoutResult {
    /// How the game ended, or `None` if the ply cap was hit first.
    pub result: Option<GameResult>,

    /// Moves applied.
    pub plies: u32,

    /// Every applied move with the side that made it, in play order.
    pub moves: Vec<(Side, Move)>,
}

impl PlayoutResult {
    /// The winning side, if the game was decided.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        self.result.map(|r| r.winner())
    }
}

/// Seeded random playout driver.
#[derive(Clone, Debug)]
pub struct Playout {
    rng: GameRng,
    max_plies: u32,
}

impl Playout {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
            max_plies: DEFAULT_MAX_PLIES,
        }
    }

    /// Stop after this many plies (0 = unlimited).
    #[must_use]
    pub fn with_max_plies(mut self, max_plies: u32) -> Self {
        self.max_plies = max_plies;
        self
    }

    /// Play random moves on `engine`, starting with `first`.
    ///
    /// The engine is left in the final position; see [`unwind`].
    #[instrument(level = "debug", skip(self, engine), fields(seed = self.rng.seed()))]
    pub fn run<E: RulesEngine>(&mut self, engine: &mut E, first: Side) -> PlayoutResult {
        let mut side = first;
        let mut moves = Vec::new();

        let result = loop {
            if self.max_plies > 0 && moves.len() as u32 >= self.max_plies {
                break None;
            }

            let legal = engine.legal_moves(side);
            let Some(&mv) = self.rng.choose(&legal) else {
                break Some(GameResult::Resigned(side));
            };
            if !engine.apply(mv, side) {
                warn!(%mv, %side, "generated move was rejected");
                break None;
            }
            moves.push((side, mv));

            if let Some(result) = engine.is_terminal(side) {
                break Some(result);
            }
            side = side.opponent();
        };

        let plies = moves.len() as u32;
        debug!(plies, ?result, "playout finished");
        PlayoutResult {
            result,
            plies,
            moves,
        }
    }
}

/// Undo every move of a playout, newest first.
///
/// Returns `false` if any undo was refused, which means `engine` is not in
/// the position the playout left behind.
pub fn unwind<E: RulesEngine>(engine: &mut E, playout: &PlayoutResult) -> bool {
    playout
        .moves
        .iter()
        .rev()
        .all(|&(side, mv)| engine.undo(mv, side))
}
