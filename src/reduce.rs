//! Reduction strategies, one per source shape.
//!
//! Each strategy folds a source into a seed with a `(acc, value, key)` callback,
//! forward or in reverse, and stops as soon as the callback returns
//! [`Break`](ControlFlow::Break). Sources pick theirs in
//! [`Source::fold_with`](crate::Source::fold_with); seedless folding is
//! [`Source::reduce_with`](crate::Source::reduce_with).

use std::ops::ControlFlow;

use crate::{Direction, Record};

/// Folds an ordered sequence by index, `0..n` or `n..0` when reversed.
///
/// Keys are the original indices in both directions.
///
/// # Examples
///
/// ```
/// use std::ops::ControlFlow;
/// use fusefold::{Direction, reduce::fold_sequence};
///
/// let visited = fold_sequence(["a", "b", "c"], vec![], Direction::Reverse, |acc, item, index| {
///     acc.push((index, item));
///     ControlFlow::Continue(())
/// });
///
/// assert_eq!(visited, [(2, "c"), (1, "b"), (0, "a")]);
/// ```
pub fn fold_sequence<I, A, F>(items: I, seed: A, direction: Direction, mut f: F) -> A
where
    I: IntoIterator,
    I::IntoIter: DoubleEndedIterator + ExactSizeIterator,
    F: FnMut(&mut A, I::Item, usize) -> ControlFlow<()>,
{
    let mut acc = seed;
    let mut indexed = items.into_iter().enumerate();

    // We don't care whether it breaks: the accumulator is the result either way.
    let _ = if direction.is_reverse() {
        indexed
            .rev()
            .try_for_each(|(index, item)| f(&mut acc, item, index))
    } else {
        indexed.try_for_each(|(index, item)| f(&mut acc, item, index))
    };

    acc
}

/// Folds materialized `(key, value)` pairs, in pair order or reversed.
///
/// # Examples
///
/// ```
/// use std::ops::ControlFlow;
/// use fusefold::{Direction, reduce::fold_pairs};
///
/// let total = fold_pairs(vec![("a", 1), ("b", 2)], 0, Direction::Forward, |acc, value, _| {
///     *acc += value;
///     ControlFlow::Continue(())
/// });
///
/// assert_eq!(total, 3);
/// ```
pub fn fold_pairs<K, V, A, F>(pairs: Vec<(K, V)>, seed: A, direction: Direction, mut f: F) -> A
where
    F: FnMut(&mut A, V, K) -> ControlFlow<()>,
{
    let mut acc = seed;
    let mut pairs = pairs.into_iter();

    let _ = if direction.is_reverse() {
        pairs
            .rev()
            .try_for_each(|(key, value)| f(&mut acc, value, key))
    } else {
        pairs.try_for_each(|(key, value)| f(&mut acc, value, key))
    };

    acc
}

/// Folds a record field by field, in key enumeration order or reversed.
pub fn fold_mapping<V, A, F>(record: &Record<V>, seed: A, direction: Direction, mut f: F) -> A
where
    V: Clone,
    F: FnMut(&mut A, V, String) -> ControlFlow<()>,
{
    let mut acc = seed;
    let mut fields = record.iter();

    let _ = if direction.is_reverse() {
        fields
            .rev()
            .try_for_each(|(key, value)| f(&mut acc, value.clone(), key.to_owned()))
    } else {
        fields.try_for_each(|(key, value)| f(&mut acc, value.clone(), key.to_owned()))
    };

    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect_until_three(acc: &mut Vec<i32>, item: i32) -> ControlFlow<()> {
        acc.push(item);
        if item == 3 {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }

    #[test]
    fn sequence_stops_on_break() {
        let acc = fold_sequence([1, 2, 3, 4, 5], vec![], Direction::Forward, |acc, item, _| {
            collect_until_three(acc, item)
        });
        assert_eq!(acc, [1, 2, 3]);
    }

    #[test]
    fn pairs_fold_in_reverse() {
        let acc = fold_pairs(
            vec![(0, 1), (1, 2), (2, 3), (3, 4)],
            vec![],
            Direction::Reverse,
            |acc, item, _| collect_until_three(acc, item),
        );
        assert_eq!(acc, [4, 3]);
    }

    #[test]
    fn pairs_stop_on_break() {
        let acc = fold_pairs(
            vec![("a", 1), ("b", 3), ("c", 5)],
            vec![],
            Direction::Forward,
            |acc, item, _| collect_until_three(acc, item),
        );
        assert_eq!(acc, [1, 3]);
    }

    #[test]
    fn mapping_stops_on_break_in_both_directions() {
        let record = Record::from([("a", 1), ("b", 3), ("c", 5)]);

        let forward = fold_mapping(&record, vec![], Direction::Forward, |acc, item, _| {
            collect_until_three(acc, item)
        });
        let reverse = fold_mapping(&record, vec![], Direction::Reverse, |acc, item, _| {
            collect_until_three(acc, item)
        });

        assert_eq!(forward, [1, 3]);
        assert_eq!(reverse, [5, 3]);
    }

    #[test]
    fn mapping_passes_field_names() {
        let record = Record::from([("one", 1), ("two", 2)]);
        let keys = fold_mapping(&record, vec![], Direction::Forward, |acc, _, key| {
            acc.push(key);
            ControlFlow::Continue(())
        });
        assert_eq!(keys, ["one", "two"]);
    }

    #[test]
    fn empty_sources_return_the_seed() {
        let seed = vec![42];
        let acc = fold_pairs(Vec::<(u8, i32)>::new(), seed, Direction::Reverse, |_, _, _| {
            ControlFlow::Break(())
        });
        assert_eq!(acc, [42]);
    }
}
