//! Rover state and the instruction set that drives it.

use crate::error::ValidationError;
use crate::plateau::Plateau;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A cardinal heading.
///
/// The four headings form a fixed cycle N→E→S→W→N; both turn directions index
/// into the *same* table, which keeps left and right exactly inverse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    North,
    East,
    South,
    West,
}

/// The turn cycle. Left steps backwards through it, right steps forwards.
const CYCLE: [Orientation; 4] = [
    Orientation::North,
    Orientation::East,
    Orientation::South,
    Orientation::West,
];

impl Orientation {
    /// Parses a heading letter (`N`/`E`/`S`/`W`, case-insensitive).
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'N' => Some(Self::North),
            'E' => Some(Self::East),
            'S' => Some(Self::South),
            'W' => Some(Self::West),
            _ => None,
        }
    }

    /// The heading after a 90° left turn (N→W, W→S, S→E, E→N).
    pub fn turned_left(self) -> Self {
        self.rotated(-1)
    }

    /// The heading after a 90° right turn (N→E, E→S, S→W, W→N).
    pub fn turned_right(self) -> Self {
        self.rotated(1)
    }

    /// The unit grid step for one forward move in this heading.
    pub fn step(self) -> IVec2 {
        match self {
            Self::North => IVec2::Y,
            Self::East => IVec2::X,
            Self::South => IVec2::NEG_Y,
            Self::West => IVec2::NEG_X,
        }
    }

    fn rotated(self, steps: i32) -> Self {
        // rem_euclid keeps the index non-negative when stepping left from N.
        let index = CYCLE.iter().position(|&o| o == self).unwrap_or(0) as i32;
        CYCLE[(index + steps).rem_euclid(4) as usize]
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Self::North => 'N',
            Self::East => 'E',
            Self::South => 'S',
            Self::West => 'W',
        };
        write!(f, "{letter}")
    }
}

/// A single navigation instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction {
    /// Spin 90° left in place (`L`).
    Left,
    /// Spin 90° right in place (`R`).
    Right,
    /// Move one cell forward in the current heading (`M`).
    Move,
}

impl Instruction {
    /// Parses an instruction letter (`L`/`R`/`M`, case-insensitive).
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'L' => Some(Self::Left),
            'R' => Some(Self::Right),
            'M' => Some(Self::Move),
            _ => None,
        }
    }
}

/// A rover's position and heading.
///
/// While a rover is on a plateau its position stays inside the plateau bounds
/// on both axes, boundaries included.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pose {
    pub position: IVec2,
    pub orientation: Orientation,
}

impl fmt::Display for Pose {
    /// Renders the contractual `"x y O"` form, e.g. `1 3 N`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.position.x, self.position.y, self.orientation
        )
    }
}

/// An agent on the plateau: a validated landing pose, the (read-only) plateau
/// bounds, and a parsed instruction sequence.
///
/// Lifecycle: [`land`](Self::land) → [`set_instructions`](Self::set_instructions)
/// → [`execute`](Self::execute). Execution consumes the rover, so a sequence
/// runs exactly once per rover instance.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Rover {
    plateau: Plateau,
    pose: Pose,
    instructions: Vec<Instruction>,
}

impl Rover {
    /// Lands a rover on `plateau` from a landing spec such as `"1 2 N"`.
    ///
    /// The text is trimmed and split on single spaces; it must yield exactly
    /// three tokens: two integer coordinates inside the plateau (boundaries
    /// included) and a heading letter. The plateau bounds themselves are
    /// trusted, having already been validated.
    pub fn land(plateau: &Plateau, text: &str) -> Result<Self, ValidationError> {
        let fail = || ValidationError::Landing {
            input: text.to_owned(),
        };

        let tokens: Vec<&str> = text.trim().split(' ').collect();
        let [x, y, heading] = tokens.as_slice() else {
            return Err(fail());
        };
        let position = IVec2::new(
            x.parse().map_err(|_| fail())?,
            y.parse().map_err(|_| fail())?,
        );
        let orientation = heading
            .chars()
            .next()
            .filter(|_| heading.len() == 1)
            .and_then(Orientation::from_letter)
            .ok_or_else(fail)?;

        if !plateau.contains(position) {
            return Err(fail());
        }

        Ok(Self {
            plateau: *plateau,
            pose: Pose {
                position,
                orientation,
            },
            instructions: Vec::new(),
        })
    }

    /// Validates and stores an instruction string such as `"LMLMLMLMM"`.
    ///
    /// The text is trimmed and read case-insensitively; only `L`, `R` and `M`
    /// are accepted. The empty string is a valid zero-instruction program.
    pub fn set_instructions(&mut self, text: &str) -> Result<(), ValidationError> {
        self.instructions = text
            .trim()
            .chars()
            .map(|c| {
                Instruction::from_letter(c).ok_or_else(|| ValidationError::Instructions {
                    input: text.to_owned(),
                })
            })
            .collect::<Result<_, _>>()?;
        Ok(())
    }

    /// The rover's current pose.
    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// The stored instruction sequence.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Runs the stored instructions strictly in order and returns the final pose.
    ///
    /// Each instruction completes before the next begins. A move that would
    /// leave the plateau is absorbed silently: the position is unchanged, no
    /// error and no notification. Consumes the rover; this is the terminal
    /// state of its lifecycle.
    pub fn execute(mut self) -> Pose {
        for instruction in std::mem::take(&mut self.instructions) {
            match instruction {
                Instruction::Left => self.pose.orientation = self.pose.orientation.turned_left(),
                Instruction::Right => self.pose.orientation = self.pose.orientation.turned_right(),
                Instruction::Move => self.advance(),
            }
        }
        self.pose
    }

    /// One forward step, clamped to the plateau.
    fn advance(&mut self) {
        let candidate = self.pose.position + self.pose.orientation.step();
        if self.plateau.contains(candidate) {
            self.pose.position = candidate;
        }
    }
}
