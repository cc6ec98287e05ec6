//! Shape-specific sort post-processors.
//!
//! Only ordered sequences can be sorted in place. Every other shape is drained
//! into its entries, sorted by value, and rebuilt in sorted order.

use itertools::Itertools;
use tracing::trace;

use crate::{Record, Shape, cmp::Comparator};

/// Sorts a sequence in place. The sort is stable.
pub(crate) fn sort_sequence<T, C>(items: &mut [T], comparator: &mut C)
where
    C: Comparator<T>,
{
    items.sort_by(|a, b| comparator.cmp(a, b));
}

/// Sorts `(key, value)` pairs by value. Keys stay attached to their values.
pub(crate) fn sort_keyed_pairs<K, V, C>(
    pairs: impl IntoIterator<Item = (K, V)>,
    comparator: &mut C,
) -> Vec<(K, V)>
where
    C: Comparator<V>,
{
    let sorted = pairs
        .into_iter()
        .sorted_by(|(_, a), (_, b)| comparator.cmp(a, b))
        .collect_vec();

    trace!(
        shape = %Shape::PairIterable(crate::PairKind::Keyed),
        size = sorted.len(),
        "sorted pairs by value"
    );
    sorted
}

/// Sorts bare values, for containers whose key is the value itself.
pub(crate) fn sort_values_only<T, C>(
    values: impl IntoIterator<Item = T>,
    comparator: &mut C,
) -> Vec<T>
where
    C: Comparator<T>,
{
    let sorted = values
        .into_iter()
        .sorted_by(|a, b| comparator.cmp(a, b))
        .collect_vec();

    trace!(
        shape = %Shape::PairIterable(crate::PairKind::Valueless),
        size = sorted.len(),
        "sorted values"
    );
    sorted
}

/// Rebuilds a record so that its fields enumerate in value order.
pub(crate) fn sort_mapping<V, C>(record: &mut Record<V>, comparator: &mut C)
where
    C: Comparator<V>,
{
    let fields = std::mem::take(record)
        .into_iter()
        .sorted_by(|(_, a), (_, b)| comparator.cmp(a, b));

    // Assign into an empty record, in sorted order.
    *record = fields.collect();

    trace!(shape = %Shape::KeyedMapping, size = record.len(), "sorted record by value");
}
