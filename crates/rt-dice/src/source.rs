//! Sources of randomness for dice and table draws.

use rand::Rng;

/// Supplies uniformly distributed integers on demand.
///
/// Every [`rand::Rng`] is a random source, so a seeded `StdRng` can be passed
/// anywhere a source is expected.
pub trait RandomSource {
    /// Draw an integer in `low..=high`.
    ///
    /// Callers guarantee `low <= high`.
    fn next_in(&mut self, low: i64, high: i64) -> i64;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_in(&mut self, low: i64, high: i64) -> i64 {
        self.random_range(low..=high)
    }
}

/// A random source that replays a fixed sequence of values.
///
/// Values inside the requested range are returned verbatim. Values outside it
/// are wrapped into the range, so a script never produces an impossible draw.
/// The sequence restarts from the beginning once exhausted.
///
/// ```
/// use rt_dice::{RandomSource, ScriptedSource};
///
/// let mut source = ScriptedSource::new([3, 1]);
/// assert_eq!(source.next_in(1, 6), 3);
/// assert_eq!(source.next_in(1, 6), 1);
/// assert_eq!(source.next_in(1, 6), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    values: Vec<i64>,
    cursor: usize,
}

impl ScriptedSource {
    /// Create a source replaying `values` in order.
    pub fn new(values: impl IntoIterator<Item = i64>) -> Self {
        Self {
            values: values.into_iter().collect(),
            cursor: 0,
        }
    }

    /// Number of values drawn so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }

    /// Restart the sequence from its first value.
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }
}

impl RandomSource for ScriptedSource {
    fn next_in(&mut self, low: i64, high: i64) -> i64 {
        if self.values.is_empty() {
            return low;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;

        if (low..=high).contains(&value) {
            value
        } else {
            // Widened so spans covering most of `i64` cannot overflow.
            let (low, high) = (i128::from(low), i128::from(high));
            let wrapped = low + (i128::from(value) - low).rem_euclid(high - low + 1);
            i64::try_from(wrapped).unwrap_or(i64::MIN)
        }
    }
}
