//! Terminal inserters: the innermost reducers of a pipeline.

use std::{fmt::Debug, ops::ControlFlow};

use crate::{Accumulator, Reducer};

/// The default terminal inserter.
///
/// Writes each value with the destination's own insertion strategy
/// ([`Accumulator::accumulate`]). It never stops the traversal.
#[derive(Debug, Clone, Copy, Default)]
pub struct Insert;

impl<A, V, K, S> Reducer<A, V, K, S> for Insert
where
    A: Accumulator<K, V>,
    S: ?Sized,
{
    #[inline]
    fn reduce(&mut self, acc: &mut A, value: V, key: K, _source: &S) -> ControlFlow<()> {
        acc.accumulate(key, value);
        ControlFlow::Continue(())
    }
}

/// A terminal inserter backed by a caller-supplied closure.
///
/// This replaces the destination's default insertion strategy.
///
/// This `struct` is created by [`transduce_with()`](crate::transduce_with)
/// and [`Transducer::run_with()`](crate::Transducer::run_with).
#[derive(Clone)]
pub struct Handler<H> {
    handler: H,
}

impl<H> Handler<H> {
    #[inline]
    pub fn new(handler: H) -> Self {
        Self { handler }
    }
}

impl<A, V, K, S, H> Reducer<A, V, K, S> for Handler<H>
where
    H: FnMut(&mut A, V, K),
    S: ?Sized,
{
    #[inline]
    fn reduce(&mut self, acc: &mut A, value: V, key: K, _source: &S) -> ControlFlow<()> {
        (self.handler)(acc, value, key);
        ControlFlow::Continue(())
    }
}

impl<H> Debug for Handler<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Handler").finish_non_exhaustive()
    }
}
