use std::{fmt::Debug, marker::PhantomData, ops::ControlFlow};

use crate::{Reducer, Stage, Step};

/// A [`Step`] that forwards only the values satisfying a predicate.
///
/// This `struct` is created by [`filter()`]. See its documentation for more.
pub struct Filter<F, V, K, S: ?Sized> {
    pred: F,
    _marker: PhantomData<fn(&V, &K, &S) -> bool>,
}

/// Creates a step that forwards a value only when `pred(&value, &key, source)`
/// returns `true`.
///
/// A rejected value is dropped with no side effect on the accumulator.
/// Rejecting never stops the traversal.
///
/// # Examples
///
/// ```
/// use fusefold::{filter, transduce, Record};
///
/// let odd = transduce(filter(|&x: &i32, _, _| x % 2 == 1), &vec![1, 2, 3, 4, 5]);
/// assert_eq!(odd, [1, 3, 5]);
///
/// // Keys can be inspected as well.
/// let record = Record::from([("keep", 1), ("drop", 2)]);
/// let kept = transduce(filter(|_: &i32, key: &String, _| key.starts_with('k')), &record);
/// assert_eq!(kept, Record::from([("keep", 1)]));
/// ```
#[inline]
pub fn filter<V, K, S, F>(pred: F) -> Filter<F, V, K, S>
where
    S: ?Sized,
    F: FnMut(&V, &K, &S) -> bool,
{
    Filter {
        pred,
        _marker: PhantomData,
    }
}

impl<A, V, K, S, F> Step<A, V, K, S> for Filter<F, V, K, S>
where
    S: ?Sized,
    F: FnMut(&V, &K, &S) -> bool,
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

impl<A, V, K, S, F, R> Reducer<A, V, K, S> for Stage<Filter<F, V, K, S>, R>
where
    S: ?Sized,
    F: FnMut(&V, &K, &S) -> bool,
    R: Reducer<A, V, K, S>,
{
    #[inline]
    fn reduce(&mut self, acc: &mut A, value: V, key: K, source: &S) -> ControlFlow<()> {
        if (self.step.pred)(&value, &key, source) {
            self.next.reduce(acc, value, key, source)
        } else {
            ControlFlow::Continue(())
        }
    }
}

impl<F: Clone, V, K, S: ?Sized> Clone for Filter<F, V, K, S> {
    fn clone(&self) -> Self {
        Self {
            pred: self.pred.clone(),
            _marker: PhantomData,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.pred.clone_from(&source.pred);
    }
}

impl<F, V, K, S: ?Sized> Debug for Filter<F, V, K, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Filter").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Insert;

    #[test]
    fn rejected_values_leave_the_accumulator_alone() {
        let source = vec![1, 2];
        let mut reducer =
            Step::<Vec<i32>, i32, usize, Vec<i32>>::wrap(filter(|&x: &i32, _, _| x > 1), Insert);
        let mut acc: Vec<i32> = vec![];

        assert!(reducer.reduce(&mut acc, 1, 0, &source).is_continue());
        assert!(acc.is_empty());

        assert!(reducer.reduce(&mut acc, 2, 1, &source).is_continue());
        assert_eq!(acc, [2]);
    }
}
