//! The bounded rectangular grid rovers navigate on.

use crate::error::ValidationError;
use glam::IVec2;
use serde::{Deserialize, Serialize};

/// The mission terrain: a rectangular grid with its bottom-left corner fixed at
/// the origin and a configurable upper-right corner.
///
/// A `Plateau` only exists after its bound spec has validated, so every value
/// of this type satisfies `upper_right.x >= 0 && upper_right.y >= 0` and is
/// immutable from then on. All rovers in a mission share the same bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plateau {
    upper_right: IVec2,
}

impl Plateau {
    /// Parses and validates an upper-right bound spec such as `"5 5"`.
    ///
    /// The text is trimmed and split on single spaces; it must yield exactly
    /// two tokens, both integers, both non-negative. Note the single-space
    /// split: `"5  5"` produces an empty middle token and is rejected.
    pub fn from_upper_bound(text: &str) -> Result<Self, ValidationError> {
        let fail = || ValidationError::PlateauBounds {
            input: text.to_owned(),
        };

        let tokens: Vec<&str> = text.trim().split(' ').collect();
        let [x, y] = tokens.as_slice() else {
            return Err(fail());
        };
        let upper_right = IVec2::new(
            x.parse().map_err(|_| fail())?,
            y.parse().map_err(|_| fail())?,
        );

        if upper_right.cmplt(IVec2::ZERO).any() {
            return Err(fail());
        }
        Ok(Self { upper_right })
    }

    /// The fixed bottom-left corner, always the origin.
    pub fn bottom_left(&self) -> IVec2 {
        IVec2::ZERO
    }

    /// The validated upper-right corner.
    pub fn upper_right(&self) -> IVec2 {
        self.upper_right
    }

    /// Both corners as `(bottom_left, upper_right)`.
    pub fn bounds(&self) -> (IVec2, IVec2) {
        (self.bottom_left(), self.upper_right)
    }

    /// Whether `cell` lies on the plateau, boundaries included.
    pub fn contains(&self, cell: IVec2) -> bool {
        cell.cmpge(self.bottom_left()).all() && cell.cmple(self.upper_right).all()
    }
}
