use std::ops::ControlFlow;

use crate::{Collection, Direction, Error, Result};

/// A `(key, value)` tuple, the exchange format between shapes.
pub type Pair<K, V> = (K, V);

/// A collection that can be traversed by a transduction.
///
/// The source is only borrowed. Values are cloned out of it as they are fed to
/// the pipeline, so the source stays untouched.
///
/// Each implementation picks the reduction strategy matching its shape in
/// [`fold_with`](Source::fold_with):
///
/// - ordered sequences use [`fold_sequence`](crate::reduce::fold_sequence),
/// - pair-iterables use [`fold_pairs`](crate::reduce::fold_pairs),
/// - keyed mappings use [`fold_mapping`](crate::reduce::fold_mapping).
pub trait Source: Collection {
    /// Key handed to steps alongside each value.
    ///
    /// Sequences use the index, maps their key, sets the value itself,
    /// records their field name.
    type Key;

    /// Element type fed into the pipeline.
    type Value;

    /// The same container shape holding values of type `U`.
    ///
    /// This is the default destination when no seed is given.
    type Empty<U>;

    /// Creates an empty container of the same shape.
    ///
    /// Hashed containers keep their hasher. Slices and arrays produce a `Vec`.
    fn empty_like<U>(&self) -> Self::Empty<U>;

    /// Extracts every element as a `(key, value)` pair in traversal order.
    fn extract_pairs(&self) -> Vec<Pair<Self::Key, Self::Value>>;

    /// Extracts every value in traversal order.
    fn extract_values(&self) -> Vec<Self::Value> {
        self.extract_pairs()
            .into_iter()
            .map(|(_, value)| value)
            .collect()
    }

    /// Folds every element into `seed`, in the given direction.
    ///
    /// The fold stops as soon as `f` returns [`Break`](ControlFlow::Break).
    fn fold_with<A, F>(&self, seed: A, direction: Direction, f: F) -> A
    where
        F: FnMut(&mut A, Self::Value, Self::Key) -> ControlFlow<()>;

    /// Folds without a seed: the first element in traversal order seeds the result
    /// and folding starts from the second one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptySourceNoSeed`] if the source has no element.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::ops::ControlFlow;
    /// use fusefold::{Direction, Error, Shape, Source};
    ///
    /// let sum = vec![1, 2, 3].reduce_with(Direction::Forward, |acc, num, _| {
    ///     *acc += num;
    ///     ControlFlow::Continue(())
    /// });
    /// assert_eq!(sum, Ok(6));
    ///
    /// let empty = Vec::<i32>::new().reduce_with(Direction::Forward, |_, _, _| {
    ///     ControlFlow::Continue(())
    /// });
    /// assert_eq!(empty, Err(Error::EmptySourceNoSeed { shape: Shape::OrderedSequence }));
    /// ```
    fn reduce_with<F>(&self, direction: Direction, mut f: F) -> Result<Self::Value>
    where
        F: FnMut(&mut Self::Value, Self::Value, Self::Key) -> ControlFlow<()>,
    {
        self.fold_with(None, direction, |seed: &mut Option<Self::Value>, value, key| {
            match seed {
                Some(acc) => f(acc, value, key),
                None => {
                    *seed = Some(value);
                    ControlFlow::Continue(())
                }
            }
        })
        .ok_or(Error::EmptySourceNoSeed { shape: Self::SHAPE })
    }
}

/// Extracts the `(key, value)` pairs of a source.
#[inline]
pub fn pairs<S>(source: &S) -> Vec<Pair<S::Key, S::Value>>
where
    S: Source + ?Sized,
{
    source.extract_pairs()
}

/// Extracts the values of a source, dropping the keys.
#[inline]
pub fn values<S>(source: &S) -> Vec<S::Value>
where
    S: Source + ?Sized,
{
    source.extract_values()
}
