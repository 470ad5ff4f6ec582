//! Sets of dice outcomes bound to table items.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// The dice outcomes that select one table item.
///
/// Order is kept as declared. Duplicates are allowed and harmless.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchSet(Vec<i64>);

impl MatchSet {
    /// Create a match set from explicit values.
    pub fn new(values: impl IntoIterator<Item = i64>) -> Self {
        Self(values.into_iter().collect())
    }

    /// Create a match set covering `low..=high`. Empty if `low > high`.
    pub fn range(low: i64, high: i64) -> Self {
        Self((low..=high).collect())
    }

    /// Returns true if `n` appears anywhere in the set.
    pub fn contains(&self, n: i64) -> bool {
        self.0.contains(&n)
    }

    /// The values in declared order.
    pub fn values(&self) -> &[i64] {
        &self.0
    }

    /// Number of declared values, duplicates included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the set has no values.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<i64>> for MatchSet {
    fn from(values: Vec<i64>) -> Self {
        Self(values)
    }
}

impl From<RangeInclusive<i64>> for MatchSet {
    fn from(range: RangeInclusive<i64>) -> Self {
        Self(range.collect())
    }
}

impl<const N: usize> From<[i64; N]> for MatchSet {
    fn from(values: [i64; N]) -> Self {
        Self(values.to_vec())
    }
}

impl FromIterator<i64> for MatchSet {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl std::fmt::Display for MatchSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.0.iter().map(|n| n.to_string()).collect();
        write!(f, "{}", values.join(", "))
    }
}
