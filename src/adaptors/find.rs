use std::{fmt::Debug, marker::PhantomData, ops::ControlFlow};

use crate::{Reducer, Stage, Step};

/// A [`Step`] that forwards only the first value satisfying a predicate.
///
/// This `struct` is created by [`find()`]. See its documentation for more.
pub struct Find<F, V, K, S: ?Sized> {
    pred: F,
    found: bool,
    _marker: PhantomData<fn(&V, &K, &S) -> bool>,
}

/// Creates a step that forwards the first value for which
/// `pred(&value, &key, source)` returns `true`, and nothing else.
///
/// The traversal stops right after the match, so later elements are never
/// visited. The "already found" flag lives in the wrapped reducer and
/// [`Step::wrap`] consumes the step, so every traversal starts with a fresh
/// flag, even when the same [`Transducer`](crate::Transducer) runs many times.
///
/// # Examples
///
/// ```
/// use fusefold::{find, transduce, Transducer};
///
/// let three = transduce(find(|&x: &i32, _, _| x == 3), &vec![1, 2, 3, 4, 3]);
/// assert_eq!(three, [3]);
///
/// let first_even = Transducer::new(find(|&x: &i32, _, _| x % 2 == 0));
/// assert_eq!(first_even.run(&vec![1, 4, 6]), [4]);
/// assert_eq!(first_even.run(&vec![8, 1]), [8]);
/// ```
#[inline]
pub fn find<V, K, S, F>(pred: F) -> Find<F, V, K, S>
where
    S: ?Sized,
    F: FnMut(&V, &K, &S) -> bool,
{
    Find {
        pred,
        found: false,
        _marker: PhantomData,
    }
}

impl<A, V, K, S, F> Step<A, V, K, S> for Find<F, V, K, S>
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

impl<A, V, K, S, F, R> Reducer<A, V, K, S> for Stage<Find<F, V, K, S>, R>
where
    S: ?Sized,
    F: FnMut(&V, &K, &S) -> bool,
    R: Reducer<A, V, K, S>,
{
    #[inline]
    fn reduce(&mut self, acc: &mut A, value: V, key: K, source: &S) -> ControlFlow<()> {
        if self.step.found {
            return ControlFlow::Break(());
        }

        if !(self.step.pred)(&value, &key, source) {
            return ControlFlow::Continue(());
        }

        self.step.found = true;
        // Whatever the next stage says, nothing else may pass through us.
        let _ = self.next.reduce(acc, value, key, source);
        ControlFlow::Break(())
    }
}

impl<F: Clone, V, K, S: ?Sized> Clone for Find<F, V, K, S> {
    fn clone(&self) -> Self {
        Self {
            pred: self.pred.clone(),
            found: self.found,
            _marker: PhantomData,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.pred.clone_from(&source.pred);
        self.found = source.found;
    }
}

impl<F, V, K, S: ?Sized> Debug for Find<F, V, K, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Find")
            .field("found", &self.found)
            .finish_non_exhaustive()
    }
}


#[cfg(test)]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;

    use crate::prelude::*;
    use crate::test_utils::proptest_steps;

    proptest! {
        #[test]
        fn matches_iterator_find(
            nums in propvec(-50..50_i32, ..100),
            target in -50..50_i32,
        ) {
            proptest_steps(
                || find(move |&x: &i32, _, _| x == target),
                &nums,
                nums.contains(&target),
                |nums| nums.iter().copied().find(|&x| x == target).into_iter().collect(),
            )?;
        }

        #[test]
        fn reverse_finds_the_last(
            nums in propvec(-50..50_i32, ..100),
            target in -50..50_i32,
        ) {
            let expected: Vec<_> = nums.iter().copied().rfind(|&x| x >= target).into_iter().collect();
            let actual = Transducer::with_options(
                find(|&x: &i32, _, _| x >= target),
                Options::reversed(),
            )
            .run(&nums);
            prop_assert_eq!(actual, expected);
        }
    }
}
