//! Game rules on top of `GameState`.
//!
//! - `legality`: which moves are allowed, and why not
//! - `moves`: apply / undo / legal move generation
//! - `engine`: the `RulesEngine` trait search drivers are written against

pub mod engine;
pub mod legality;
pub mod moves;

pub use engine::{GameResult, RulesEngine};
pub use legality::{is_forbidden, Adjacent};
