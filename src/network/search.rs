//! Network detection.
//!
//! A network is a chain of at least six same-side chips from one goal edge
//! to the other where:
//! - consecutive chips see each other along a row, column or diagonal with
//!   no opponent chip in between
//! - no two consecutive hops run along the same axis
//! - no chip appears twice
//! - only the first and last chips sit on a goal edge
//!
//! The search enumerates paths depth-first from the goal-edge chips. With at
//! most ten chips per side the path tree stays small.

use smallvec::SmallVec;
use tracing::debug;

use super::frontier::Frontier;
use super::node::{NodeId, SearchArena, SearchNode};
use crate::core::{Axis, Coord, Direction, GameState, Side, BOARD_LENGTH, MIN_NETWORK_LEN};

/// Chips visible from a cell, at most one per direction.
pub type Visible = SmallVec<[Coord; 8]>;

const LAST: u8 = BOARD_LENGTH as u8 - 1;

/// One of a side's two goal edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Goal {
    /// Row 0 for Black, column 0 for White.
    Start,
    /// Row 7 for Black, column 7 for White.
    End,
}

impl Goal {
    #[must_use]
    pub const fn opposite(self) -> Goal {
        match self {
            Goal::Start => Goal::End,
            Goal::End => Goal::Start,
        }
    }

    /// True if `at` lies on this goal edge of `side`.
    #[must_use]
    pub const fn contains(self, side: Side, at: Coord) -> bool {
        let line = match self {
            Goal::Start => 0,
            Goal::End => LAST,
        };
        match side {
            Side::Black => at.y() == line,
            Side::White => at.x() == line,
        }
    }

    /// The eight cells of this goal edge of `side`.
    pub fn cells(self, side: Side) -> impl Iterator<Item = Coord> {
        Coord::all().filter(move |&c| self.contains(side, c))
    }
}

/// Result of one exhaustive or early-stopping path expansion.
pub(crate) struct Expansion {
    pub(crate) arena: SearchArena,
    /// Final node of the first complete network found, if the expansion
    /// was looking for one.
    pub(crate) network: Option<NodeId>,
}

impl GameState {
    /// The `side` chips visible from `from`: in each compass direction, the
    /// first chip met, unless it belongs to the opponent.
    #[must_use]
    pub fn visible_chips(&self, from: Coord, side: Side) -> Visible {
        let mut visible = Visible::new();
        for dir in Direction::ALL {
            let mut cursor = from.step(dir);
            while let Some(at) = cursor {
                match self.grid.get(at).side() {
                    Some(owner) if owner == side => {
                        visible.push(at);
                        break;
                    }
                    Some(_) => break,
                    None => cursor = at.step(dir),
                }
            }
        }
        visible
    }

    /// Whether `side` has a complete network on the board.
    #[must_use]
    pub fn has_valid_network(&self, side: Side) -> bool {
        self.expand(side, Goal::Start, |_| {}).network.is_some()
    }

    /// The chips of one network of `side`, start edge first.
    #[must_use]
    pub fn find_network(&self, side: Side) -> Option<Vec<Coord>> {
        let expansion = self.expand(side, Goal::Start, |_| {});
        expansion.network.map(|id| expansion.arena.path(id))
    }

    /// The winner, if any, right after `mover` moved.
    ///
    /// A move that completes networks for both sides loses: the opponent's
    /// network is checked first.
    #[must_use]
    pub fn winner_after(&self, mover: Side) -> Option<Side> {
        [mover.opponent(), mover]
            .into_iter()
            .find(|&side| self.has_valid_network(side))
    }

    /// Walk every admissible path of `side` chips starting from the `from`
    /// goal edge, calling `visit` on each node as it is taken off the
    /// frontier.
    ///
    /// When starting from `Goal::Start` the walk stops at the first node that
    /// completes a network. Nodes on any board edge other than the roots are
    /// dead ends and never expanded.
    pub(crate) fn expand(
        &self,
        side: Side,
        from: Goal,
        mut visit: impl FnMut(&SearchNode),
    ) -> Expansion {
        let mut arena = SearchArena::new();
        let mut frontier = Frontier::new();
        let seeking = from == Goal::Start;
        let target = from.opposite();

        for at in from.cells(side) {
            if self.grid.holds(at, side) {
                frontier.push(arena.root(at));
            }
        }

        while let Some(id) = frontier.pop() {
            let node = *arena.get(id);
            visit(&node);

            for next in self.visible_chips(node.coord, side) {
                if node.axis == Some(Axis::between(node.coord, next)) || arena.on_path(id, next) {
                    continue;
                }
                let child = arena.extend(id, next);
                if seeking && arena.get(child).len >= MIN_NETWORK_LEN && target.contains(side, next) {
                    debug!(%side, len = arena.get(child).len, "network found");
                    return Expansion {
                        arena,
                        network: Some(child),
                    };
                }
                if !next.is_on_edge() {
                    frontier.push(child);
                }
            }
        }

        Expansion {
            arena,
            network: None,
        }
    }
}
