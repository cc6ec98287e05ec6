use crate::{Reducer, Step};

/// A [`Step`] that runs `first`, then feeds whatever it forwards to `second`.
///
/// Chains of compositions are usually written with [`combine!`](crate::combine!).
/// A composed step can itself be composed, so a fused pipeline can be nested
/// inside another one.
///
/// `first` wraps `second`, which wraps the next stage, so each value flows
/// through the steps in declaration order.
///
/// # Examples
///
/// ```
/// use fusefold::{Compose, filter, map, transduce};
///
/// let inner = Compose::new(map(|x: i32, _, _| x + 1), filter(|&x: &i32, _, _| x > 2));
/// let outer = Compose::new(inner, map(|x: i32, _, _| x * 10));
///
/// assert_eq!(transduce(outer, &vec![1, 2, 3]), [30, 40]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Compose<X, Y> {
    first: X,
    second: Y,
}

impl<X, Y> Compose<X, Y> {
    #[inline]
    pub const fn new(first: X, second: Y) -> Self {
        Self { first, second }
    }

    /// Splits the composition back into its two steps.
    #[inline]
    pub fn into_inner(self) -> (X, Y) {
        (self.first, self.second)
    }
}

impl<A, V, K, S, X, Y> Step<A, V, K, S> for Compose<X, Y>
where
    S: ?Sized,
    X: Step<A, V, K, S>,
    Y: Step<A, X::Output, K, S>,
{
    type Output = Y::Output;

    type Wrapped<R>
        = X::Wrapped<Y::Wrapped<R>>
    where
        R: Reducer<A, Y::Output, K, S>;

    #[inline]
    fn wrap<R>(self, next: R) -> Self::Wrapped<R>
    where
        R: Reducer<A, Y::Output, K, S>,
    {
        self.first.wrap(self.second.wrap(next))
    }
}

/// Fuses a list of steps into a single [`Step`].
///
/// `combine![s1, s2, s3]` expands to `Compose::new(s1, Compose::new(s2, s3))`.
/// A single step is returned as is, and an empty list is the [`Identity`](crate::Identity).
///
/// # Examples
///
/// ```
/// use fusefold::{combine, filter, map, take, transduce};
///
/// let steps = combine![
///     map(|x: i32, _, _| x * x),
///     filter(|&x: &i32, _, _| x % 2 == 1),
///     take(2),
/// ];
/// assert_eq!(transduce(steps, &vec![1, 2, 3, 4, 5]), [1, 9]);
///
/// assert_eq!(transduce(combine![], &vec![1, 2]), [1, 2]);
/// ```
#[macro_export]
macro_rules! combine {
    () => {
        $crate::Identity
    };
    ($step:expr $(,)?) => {
        $step
    };
    ($step:expr, $($rest:expr),+ $(,)?) => {
        $crate::Compose::new($step, $crate::combine!($($rest),+))
    };
}
