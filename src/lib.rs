//! # network-engine
//!
//! Rules and position evaluation for the board game Network.
//!
//! Two sides, Black and White, each own ten chips and a pair of opposite goal
//! edges on an 8x8 board. Chips are placed until a side has ten on the board,
//! then repositioned one at a time. A side wins by connecting its goal edges
//! with a network: six or more chips linked by unobstructed straight lines
//! that turn at every chip.
//!
//! ## Design Principles
//!
//! 1. **Search-Friendly**: `apply` / `undo` mutate one `GameState` in place,
//!    so a game-tree search walks the tree without cloning boards.
//!
//! 2. **Pure Queries**: legality, network detection and evaluation borrow the
//!    state immutably. Hypothetical moves are checked without touching the
//!    board.
//!
//! 3. **Bounded Work**: at most ten chips per side keeps network search to a
//!    small path tree, held in a per-call arena.
//!
//! ## Modules
//!
//! - `core`: sides, coordinates, the grid, moves, state, RNG, configuration
//! - `rules`: legality, move generation, apply/undo, `RulesEngine`
//! - `network`: network search and the static evaluator
//! - `playout`: seeded random playouts over any `RulesEngine`
//! - `error`: why a move or coordinate was rejected

pub mod core;
pub mod error;
pub mod network;
pub mod playout;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Axis, Cell, Coord, Direction, EvalConfig, GameRng, GameState, Grid, Move, MoveList, Side,
    SideMap, BOARD_LENGTH, CHIPS_PER_SIDE, MIN_NETWORK_LEN,
};

pub use crate::error::{CoordError, IllegalMove};

pub use crate::network::{Goal, NetworkFeatures};

pub use crate::playout::{unwind, Playout, PlayoutResult};

pub use crate::rules::{is_forbidden, GameResult, RulesEngine};
