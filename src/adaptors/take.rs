use std::ops::ControlFlow;

use crate::{Collection, Reducer, Stage, Step};

/// A [`Step`] that stops forwarding once the accumulator holds `limit` elements.
///
/// This `struct` is created by [`take()`]. See its documentation for more.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Take {
    limit: usize,
}

/// Creates a step that forwards values only while the accumulator holds fewer
/// than `limit` elements.
///
/// The size is queried on the accumulator, not counted by the step, so values
/// rejected by an earlier filter, or merged by a keyed destination, do not use
/// up the limit. Once the limit is reached the traversal stops.
///
/// # Examples
///
/// ```
/// use fusefold::{combine, filter, take, transduce};
///
/// let first_two = transduce(take(2), &vec![1, 2, 3, 4]);
/// assert_eq!(first_two, [1, 2]);
///
/// let first_two_even = transduce(
///     combine![filter(|&x: &i32, _, _| x % 2 == 0), take(2)],
///     &vec![1, 2, 3, 4, 5, 6],
/// );
/// assert_eq!(first_two_even, [2, 4]);
///
/// assert!(transduce(take(0), &vec![1, 2, 3]).is_empty());
/// ```
#[inline]
pub const fn take(limit: usize) -> Take {
    Take { limit }
}

impl Take {
    /// The number of elements this step lets the accumulator reach.
    #[inline]
    pub const fn limit(&self) -> usize {
        self.limit
    }
}

impl<A, V, K, S> Step<A, V, K, S> for Take
where
    A: Collection,
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

impl<A, V, K, S, R> Reducer<A, V, K, S> for Stage<Take, R>
where
    A: Collection,
    S: ?Sized,
    R: Reducer<A, V, K, S>,
{
    #[inline]
    fn reduce(&mut self, acc: &mut A, value: V, key: K, source: &S) -> ControlFlow<()> {
        // Must stay even with the check below: a seed may already be full.
        if acc.size() >= self.step.limit {
            return ControlFlow::Break(());
        }

        let cf = self.next.reduce(acc, value, key, source);

        if acc.size() >= self.step.limit {
            ControlFlow::Break(())
        } else {
            cf
        }
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
        fn matches_iterator_take(
            nums in propvec(any::<i32>(), ..100),
            take_count in ..150_usize,
        ) {
            proptest_steps(
                || take(take_count),
                &nums,
                !nums.is_empty() && take_count <= nums.len(),
                |nums| nums.iter().copied().take(take_count).collect(),
            )?;
        }

        #[test]
        fn reverse_keeps_the_tail(
            nums in propvec(any::<i32>(), ..100),
            take_count in ..150_usize,
        ) {
            let expected: Vec<_> = nums.iter().rev().copied().take(take_count).collect();
            let actual = Transducer::with_options(take(take_count), Options::reversed()).run(&nums);
            prop_assert_eq!(actual, expected);
        }

        #[test]
        fn counts_after_filtering(
            nums in propvec(any::<i32>(), ..100),
            take_count in ..50_usize,
        ) {
            let expected: Vec<_> = nums
                .iter()
                .copied()
                .filter(|x| x % 2 != 0)
                .take(take_count)
                .collect();
            let actual = transduce(
                combine![filter(|x: &i32, _, _| x % 2 != 0), take(take_count)],
                &nums,
            );
            prop_assert_eq!(actual, expected);
        }
    }
}
