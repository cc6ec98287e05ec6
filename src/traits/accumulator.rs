use crate::{Collection, cmp::Comparator};

/// A destination a transduction can write into.
///
/// [`accumulate`](Accumulator::accumulate) is the default insertion strategy of the
/// destination's shape (see [`Insertion`](crate::Insertion)):
///
/// - ordered sequences append and ignore the key,
/// - keyed pair-iterables set the value under the key,
/// - valueless pair-iterables add the value if absent and ignore the key,
/// - keyed mappings assign the value under the stringified key.
///
/// The key type is a parameter so that any source key can target any
/// destination. This is what lets a keyed mapping be transduced into a `Vec`,
/// or a `Vec` into an `IndexMap<usize, _>`.
pub trait Accumulator<K, V>: Collection {
    fn accumulate(&mut self, key: K, value: V);
}

/// A destination that can be re-sorted by its values.
///
/// This is the hook behind [`sort()`](crate::sort()). Sequences sort in place;
/// pair-iterables and keyed mappings are rebuilt from their sorted entries,
/// keeping every key attached to its value.
pub trait SortByValue: Collection {
    type Value;

    fn sort_by_value<C>(&mut self, comparator: &mut C)
    where
        C: Comparator<Self::Value>;
}
