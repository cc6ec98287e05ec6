use std::{fmt::Debug, marker::PhantomData, ops::ControlFlow};

use crate::{Reducer, Stage, Step};

/// A [`Step`] that transforms each value before forwarding it.
///
/// The key is forwarded unchanged. A map never drops a value.
///
/// This `struct` is created by [`map()`]. See its documentation for more.
pub struct Map<F, V, K, S: ?Sized, U> {
    f: F,
    _marker: PhantomData<fn(V, &K, &S) -> U>,
}

/// Creates a step that replaces each value with `f(value, key, source)`.
///
/// # Examples
///
/// ```
/// use fusefold::{map, transduce};
///
/// let doubled = transduce(map(|x: i32, _, _| x * 2), &vec![1, 2, 3]);
/// assert_eq!(doubled, [2, 4, 6]);
///
/// // The key and the source are available too.
/// let labels = transduce(
///     map(|x: i32, &index: &usize, source: &Vec<i32>| format!("{x} ({}/{})", index + 1, source.len())),
///     &vec![7, 8],
/// );
/// assert_eq!(labels, ["7 (1/2)", "8 (2/2)"]);
/// ```
#[inline]
pub fn map<V, K, S, U, F>(f: F) -> Map<F, V, K, S, U>
where
    S: ?Sized,
    F: FnMut(V, &K, &S) -> U,
{
    Map {
        f,
        _marker: PhantomData,
    }
}

impl<A, V, K, S, U, F> Step<A, V, K, S> for Map<F, V, K, S, U>
where
    S: ?Sized,
    F: FnMut(V, &K, &S) -> U,
{
    type Output = U;

    type Wrapped<R>
        = Stage<Self, R>
    where
        R: Reducer<A, U, K, S>;

    #[inline]
    fn wrap<R>(self, next: R) -> Self::Wrapped<R>
    where
        R: Reducer<A, U, K, S>,
    {
        Stage::new(self, next)
    }
}

impl<A, V, K, S, U, F, R> Reducer<A, V, K, S> for Stage<Map<F, V, K, S, U>, R>
where
    S: ?Sized,
    F: FnMut(V, &K, &S) -> U,
    R: Reducer<A, U, K, S>,
{
    #[inline]
    fn reduce(&mut self, acc: &mut A, value: V, key: K, source: &S) -> ControlFlow<()> {
        let value = (self.step.f)(value, &key, source);
        self.next.reduce(acc, value, key, source)
    }
}

impl<F: Clone, V, K, S: ?Sized, U> Clone for Map<F, V, K, S, U> {
    fn clone(&self) -> Self {
        Self {
            f: self.f.clone(),
            _marker: PhantomData,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.f.clone_from(&source.f);
    }
}

impl<F, V, K, S: ?Sized, U> Debug for Map<F, V, K, S, U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Map").finish_non_exhaustive()
    }
}
