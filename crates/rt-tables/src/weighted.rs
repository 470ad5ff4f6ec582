//! Weight-proportional selection.
//!
//! Items are laid out in a virtual sequence where each one occupies `weight`
//! consecutive slots. A uniform draw over `0..total` picks a slot, and the
//! slot maps back to its item by walking cumulative weights. Nothing is
//! materialized, so large weights cost nothing extra.

use rt_dice::RandomSource;

/// Anything that carries a selection weight.
pub trait Weighted {
    /// Relative selection weight. Zero means never selected.
    fn weight(&self) -> u32;
}

impl<T> Weighted for (u32, T) {
    fn weight(&self) -> u32 {
        self.0
    }
}

/// Sum of all weights.
pub fn total_weight<W: Weighted>(items: &[W]) -> u64 {
    items.iter().map(|item| u64::from(item.weight())).sum()
}

/// Index of the item occupying `slot` in the virtual sequence, or `None` if
/// `slot` is past the end.
pub fn index_for_slot<W: Weighted>(items: &[W], slot: u64) -> Option<usize> {
    let mut upper = 0u64;
    for (i, item) in items.iter().enumerate() {
        upper += u64::from(item.weight());
        if slot < upper {
            return Some(i);
        }
    }
    None
}

/// Draw an item index with probability proportional to its weight.
///
/// Returns `None` when the total weight is zero.
pub fn pick_index<W, R>(items: &[W], rng: &mut R) -> Option<usize>
where
    W: Weighted,
    R: RandomSource + ?Sized,
{
    let total = total_weight(items);
    if total == 0 {
        return None;
    }
    let high = i64::try_from(total - 1).ok()?;
    let slot = rng.next_in(0, high);
    index_for_slot(items, u64::try_from(slot).ok()?)
}

/// Draw a value from `(weight, value)` pairs.
///
/// ```
/// use rt_dice::ScriptedSource;
/// use rt_tables::weighted::pick_weighted;
///
/// let items = [(2, "common"), (1, "rare")];
/// let mut source = ScriptedSource::new([2]);
/// assert_eq!(pick_weighted(&items, &mut source), Some(&"rare"));
/// ```
pub fn pick_weighted<'a, T, R>(items: &'a [(u32, T)], rng: &mut R) -> Option<&'a T>
where
    R: RandomSource + ?Sized,
{
    let index = pick_index(items, rng)?;
    items.get(index).map(|(_, value)| value)
}
