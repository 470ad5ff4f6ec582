//! Configuration for rolling tables.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Text placed between an item and the result of its sub-table action.
pub const DEFAULT_DELIMITER: &str = "; ";

/// Settings a hosting application uses to build its random source and roller.
///
/// Every field has a default, so a config file may set only what it needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RollConfig {
    /// RNG seed for reproducible rolls. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Maximum nesting of sub-table actions. `None` means unlimited.
    pub max_depth: Option<usize>,
    /// Text placed between an item and its sub-table result.
    pub delimiter: String,
}

impl Default for RollConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_depth: None,
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }
}

impl RollConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Limit how deeply sub-table actions may nest.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Set the delimiter placed before sub-table results.
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Build the random source described by this config.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
