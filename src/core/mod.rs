//! Core engine types: sides, coordinates, grid, moves, state, RNG, configuration.
//!
//! These are plain data carriers. The rules that give them meaning live in
//! `rules` and `network`.

pub mod side;
pub mod coord;
pub mod grid;
pub mod config;
pub mod action;
pub mod state;
pub mod rng;

pub use side::{Side, SideMap};
pub use coord::{Axis, Coord, Direction};
pub use grid::{Cell, Grid};
pub use config::{EvalConfig, BOARD_LENGTH, CHIPS_PER_SIDE, MIN_NETWORK_LEN};
pub use action::{Move, MoveList};
pub use state::GameState;
pub use rng::GameRng;
