//! Mission orchestration: text fields in, result strings out.
//!
//! The entry point is [`run_mission`]. It consumes the flat ordered field list
//! an external input reader produces (first the plateau bound spec, then one
//! (landing, instructions) pair per rover) and yields the result strings an
//! external output writer consumes, in the literal `"Rover{n}:{x} {y} {o}"`
//! format existing consumers depend on.

use crate::error::ValidationError;
use crate::plateau::Plateau;
use crate::rover::{Pose, Rover};

/// Runs a whole mission over an ordered list of input fields.
///
/// Field order: element 0 is the plateau upper-right bound (e.g. `"5 5"`),
/// followed by repeating pairs of landing spec (e.g. `"1 2 N"`) and
/// instruction spec (e.g. `"LMLMLMLMM"`). Rovers run strictly sequentially in
/// input order; each executes its full instruction sequence before the next is
/// even constructed. Rovers may share or cross cells, there is no collision
/// handling. A trailing landing spec without its instruction pair is dropped.
///
/// Fail-fast: the first [`ValidationError`] aborts the run, emitting no
/// partial results for the failing rover or any after it.
///
/// ```
/// use plateau_rover::run_mission;
///
/// let results = run_mission(["5 5", "1 2 N", "LMLMLMLMM", "3 3 E", "MMRMMRMRRM"]).unwrap();
/// assert_eq!(results, ["Rover1:1 3 N", "Rover2:5 1 E"]);
/// ```
pub fn run_mission<I, S>(fields: I) -> Result<Vec<String>, ValidationError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut fields = fields.into_iter();

    let bound_spec = fields.next();
    let plateau = Plateau::from_upper_bound(
        bound_spec.as_ref().map(S::as_ref).unwrap_or_default(),
    )?;

    let mut results = Vec::new();
    while let Some(landing_spec) = fields.next() {
        let Some(instruction_spec) = fields.next() else {
            break;
        };

        let mut rover = Rover::land(&plateau, landing_spec.as_ref())?;
        rover.set_instructions(instruction_spec.as_ref())?;
        results.push(format_result(results.len() + 1, rover.execute()));
    }

    Ok(results)
}

/// Renders one rover's contractual result line, e.g. `Rover1:1 3 N`.
fn format_result(index: usize, pose: Pose) -> String {
    format!("Rover{index}:{pose}")
}
