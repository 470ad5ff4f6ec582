//! Roll tables for tabletop content generation.
//!
//! A [`Table`] maps random draws to text. Draws come from a dice expression
//! bound to per-item match sets, from a weight list, or from a uniform list.
//! Items may chain into other tables through a [`Registry`], letting one roll
//! produce "Bandits; 2d6 of them, led by a disgraced knight".
//!
//! Randomness is always supplied by the caller as a [`RandomSource`], so a
//! seeded `StdRng` or a [`ScriptedSource`] gives reproducible results.

pub mod collection;
pub mod config;
pub mod error;
pub mod list;
pub mod matchset;
pub mod registry;
pub mod render;
pub mod roller;
pub mod table;
pub mod weighted;

pub use collection::Collection;
pub use config::RollConfig;
pub use error::{TableError, TableResult};
pub use list::List;
pub use matchset::MatchSet;
pub use registry::Registry;
pub use roller::Roller;
pub use rt_dice::{DiceExpr, RandomSource, ScriptedSource};
pub use table::{Action, Coverage, Item, Reroll, SelectionScheme, Table, WeightedItem};
