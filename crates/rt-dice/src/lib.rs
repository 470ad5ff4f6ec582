//! Dice expressions and random sources for roll tables.
//!
//! A [`DiceExpr`] is parsed from standard notation ("2d6", "d20", "3d4+1")
//! and rolled against any [`RandomSource`]. Every `rand::Rng` is a random
//! source; [`ScriptedSource`] replays a fixed sequence of values so rolls can
//! be reproduced exactly in tests.

pub mod error;
pub mod expr;
pub mod source;

pub use error::{DiceError, DiceResult};
pub use expr::{DiceExpr, DiceRoll};
pub use source::{RandomSource, ScriptedSource};
