use std::{cmp::Ordering, ops::ControlFlow};

use crate::{
    Reducer, SortByValue, Stage, Step,
    cmp::{ByDisplay, Comparator},
};

/// A [`Step`] that keeps the accumulator sorted by value.
///
/// This `struct` is created by [`sort()`] and [`sort_by()`]. See their documentation for more.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sort<C> {
    comparator: C,
}

/// Creates a step that re-sorts the accumulator by the string representation
/// of its values, after every value it forwards.
///
/// This is a lexical comparison, so `10` sorts before `2`. Use [`sort_by()`]
/// to compare otherwise.
///
/// # Examples
///
/// ```
/// use fusefold::{sort, transduce};
///
/// assert_eq!(transduce(sort(), &vec![10, 2, 1, 20]), [1, 10, 2, 20]);
/// ```
#[inline]
pub const fn sort() -> Sort<ByDisplay> {
    Sort {
        comparator: ByDisplay,
    }
}

/// Creates a step that re-sorts the accumulator with `compare`, after every value
/// it forwards.
///
/// The comparator sees the values held by the accumulator, which may differ
/// from the values this step receives when later steps transform them.
///
/// Sequences are sorted in place. Maps, sets and records are rebuilt in sorted
/// order, every key staying attached to its value. Hash-ordered containers
/// have no order to keep, so sorting them has no observable effect.
///
/// # Examples
///
/// ```
/// use indexmap::IndexMap;
/// use fusefold::{sort_by, transduce};
///
/// assert_eq!(transduce(sort_by(i32::cmp), &vec![10, 2, 1, 20]), [1, 2, 10, 20]);
///
/// let scores = IndexMap::from([("a", 10), ("b", 2), ("c", 1), ("d", 20)]);
/// let sorted = transduce(sort_by(|a: &i32, b: &i32| a.cmp(b)), &scores);
/// assert_eq!(
///     sorted.into_iter().collect::<Vec<_>>(),
///     [("c", 1), ("b", 2), ("a", 10), ("d", 20)],
/// );
/// ```
#[inline]
pub fn sort_by<T, F>(compare: F) -> Sort<F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    Sort {
        comparator: compare,
    }
}

impl<A, V, K, S, C> Step<A, V, K, S> for Sort<C>
where
    A: SortByValue,
    C: Comparator<A::Value>,
    S: ?Sized,
{
    type Output = V;

    type Wrapped<R>
        = Stage<Self, R>
    where
        R: Reducer<A, V, K, S>;

    #[inline]
    fn wrap<R>(self, next: R) -> Self::Wrapped<R>
    where
        R: Reducer<A, V, K, S>,
    {
        Stage::new(self, next)
    }
}

impl<A, V, K, S, C, R> Reducer<A, V, K, S> for Stage<Sort<C>, R>
where
    A: SortByValue,
    C: Comparator<A::Value>,
    S: ?Sized,
    R: Reducer<A, V, K, S>,
{
    fn reduce(&mut self, acc: &mut A, value: V, key: K, source: &S) -> ControlFlow<()> {
        let cf = self.next.reduce(acc, value, key, source);
        acc.sort_by_value(&mut self.step.comparator);
        cf
    }
}
