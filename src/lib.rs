//! # plateau-rover
//!
//! A sovereign navigation crate that simulates rovers on a bounded rectangular
//! grid (the *Plateau*), translating textual mission input into final rover poses.
//!
//! It decouples the *Mission Input* (plain text field lists) from the *Mission
//! Outcome* (deterministic `Pose` values), producing result strings that can be
//! ingested by file writers, terminal front-ends, or test harnesses.
//!
//! The pipeline is: validate the plateau bounds, land each rover inside them,
//! validate its instruction string (`L`, `R`, `M`), then execute the instructions
//! in order. Moves that would leave the plateau are absorbed silently; malformed
//! input aborts the whole mission with a [`ValidationError`].

pub mod error;
pub mod mission;
pub mod plateau;
pub mod rover;

pub use error::*;
pub use mission::*;
pub use plateau::*;
pub use rover::*;
