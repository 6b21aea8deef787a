//! Validation failures for mission input.

use thiserror::Error;

/// A malformed piece of mission input.
///
/// Every validation surface in the crate reports through this one type, and a
/// mission is fail-fast: the first `ValidationError` aborts the whole run with
/// no partial results. Each variant carries the offending text and its message
/// states the expected format with a corrective example.
///
/// Note that a rover driving into the plateau edge is *not* an error; blocked
/// moves are absorbed silently (see [`Rover::execute`](crate::rover::Rover::execute)).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The plateau upper-right bound spec did not parse.
    #[error(
        "invalid plateau bounds {input:?}: expected two non-negative integers \
         for the upper-right corner, e.g. \"5 5\""
    )]
    PlateauBounds { input: String },

    /// The rover landing spec did not parse or fell outside the plateau.
    #[error(
        "invalid rover landing {input:?}: expected x y and an orientation, with \
         the coordinates inside the plateau and the orientation one of N, E, S, W \
         (North, East, South, West), e.g. \"1 2 N\""
    )]
    Landing { input: String },

    /// The instruction string contained a character other than L, R or M.
    #[error(
        "invalid navigation instructions {input:?}: expected only L (left), \
         R (right) and M (move), e.g. \"LMLMLMLMM\""
    )]
    Instructions { input: String },
}
