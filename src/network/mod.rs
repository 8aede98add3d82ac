//! Network search and evaluation.
//!
//! ## Layout
//!
//! - `node`: the path tree (`SearchNode`s in a `SearchArena`, linked by `NodeId`)
//! - `frontier`: the LIFO stack of nodes still to expand
//! - `search`: line-of-sight, path expansion, win detection
//! - `eval`: feature extraction and the static evaluator
//!
//! Every search builds a fresh arena and frontier and drops them on return,
//! so searches never touch the board and can run on a shared `&GameState`.

pub mod eval;
pub mod frontier;
pub mod node;
pub mod search;

pub use eval::NetworkFeatures;
pub use frontier::Frontier;
pub use node::{NodeId, SearchArena, SearchNode};
pub use search::{Goal, Visible};
