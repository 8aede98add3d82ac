//! Error types.
//!
//! Move legality is reported as `bool` at the engine interface so a search
//! driver can try alternatives cheaply. `IllegalMove` carries the reason for
//! callers (and trace logs) that want it.

use crate::core::{Coord, Side};

/// Why a move was rejected for a side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMove {
    #[error("resigning does not change the board")]
    Resign,

    #[error("{side} has no chip at {from} to reposition")]
    NotOwnChip { side: Side, from: Coord },

    #[error("{side} may not occupy {to} (opponent's goal or a corner)")]
    WrongGoal { side: Side, to: Coord },

    #[error("{to} is already occupied")]
    Occupied { to: Coord },

    #[error("{side} has no chips left to place")]
    NoChipsLeft { side: Side },

    #[error("{side} chip at {to} would form a cluster of three")]
    Cluster { side: Side, to: Coord },
}

/// Errors from building coordinates out of untrusted input.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CoordError {
    #[error("coordinate ({x}, {y}) is off the 8x8 board")]
    OutOfRange { x: i32, y: i32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_illegal_move_display() {
        let err = IllegalMove::Cluster {
            side: Side::Black,
            to: Coord::new(1, 2),
        };
        assert_eq!(
            err.to_string(),
            "Black chip at (1,2) would form a cluster of three"
        );
    }

    #[test]
    fn test_wrong_goal_display() {
        let err = IllegalMove::WrongGoal {
            side: Side::White,
            to: Coord::new(3, 0),
        };
        assert_eq!(
            err.to_string(),
            "White may not occupy (3,0) (opponent's goal or a corner)"
        );
    }

    #[test]
    fn test_coord_error_display() {
        let err = CoordError::OutOfRange { x: 8, y: -1 };
        assert_eq!(err.to_string(), "coordinate (8, -1) is off the 8x8 board");
    }
}
