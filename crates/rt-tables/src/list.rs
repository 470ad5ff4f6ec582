//! Plain lists of strings with uniform selection.

use rt_dice::RandomSource;
use serde::{Deserialize, Serialize};

/// A named list of strings, each equally likely to be rolled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Entries in declared order.
    pub items: Vec<String>,
}

impl List {
    /// Create a list.
    pub fn new<I, S>(name: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Return a random entry, or `""` if the list is empty.
    pub fn roll<R: RandomSource + ?Sized>(&self, rng: &mut R) -> &str {
        let Some(high) = self.items.len().checked_sub(1) else {
            return "";
        };
        let high = i64::try_from(high).unwrap_or(i64::MAX);
        usize::try_from(rng.next_in(0, high))
            .ok()
            .and_then(|i| self.items.get(i))
            .map_or("", String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl std::fmt::Display for List {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.items.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rt_dice::ScriptedSource;

    #[test]
    fn empty_list_rolls_empty() {
        let list = List::default();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(list.roll(&mut rng), "");
        assert!(list.is_empty());
    }

    #[test]
    fn single_item_always_rolled() {
        let list = List::new("one", ["only"]);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            assert_eq!(list.roll(&mut rng), "only");
        }
    }

    #[test]
    fn scripted_indices() {
        let list = List::new("abc", ["a", "b", "c"]);
        let mut source = ScriptedSource::new([1, 2, 0]);
        let rolled: Vec<&str> = (0..3).map(|_| list.roll(&mut source)).collect();
        assert_eq!(rolled, vec!["b", "c", "a"]);
    }

    #[test]
    fn every_item_reachable() {
        let list = List::new("abc", ["a", "b", "c"]);
        let mut rng = StdRng::seed_from_u64(3);
        let seen: std::collections::HashSet<&str> = (0..200).map(|_| list.roll(&mut rng)).collect();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn display_joins_items() {
        assert_eq!(List::new("x", ["a", "b"]).to_string(), "a, b");
        assert_eq!(List::default().to_string(), "");
    }
}
