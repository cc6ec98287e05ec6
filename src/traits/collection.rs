use crate::{Insertion, Shape};

/// A container whose shape is known and whose size can be queried.
///
/// This is the base of every container adapter in this crate: sources implement
/// [`Source`](crate::Source) on top of it, destinations implement
/// [`Accumulator`](crate::Accumulator) on top of it.
///
/// The shape is a property of the type, not of the value, so classification
/// happens once per call and never inside the fold.
pub trait Collection {
    /// The shape every value of this type has.
    const SHAPE: Shape;

    /// Number of elements currently held.
    ///
    /// For keyed containers this is the number of distinct keys, so inserting
    /// under an existing key does not grow it.
    fn size(&self) -> usize;
}

/// Returns the shape of a collection.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use fusefold::{classify, PairKind, Record, Shape};
///
/// assert_eq!(classify(&vec![1, 2]), Shape::OrderedSequence);
/// assert_eq!(
///     classify(&HashSet::<i32>::new()),
///     Shape::PairIterable(PairKind::Valueless),
/// );
/// assert_eq!(classify(&Record::<i32>::new()), Shape::KeyedMapping);
/// ```
#[inline]
pub fn classify<C>(_collection: &C) -> Shape
where
    C: Collection + ?Sized,
{
    C::SHAPE
}

/// Returns the number of elements of a collection, whatever its shape.
#[inline]
pub fn size<C>(collection: &C) -> usize
where
    C: Collection + ?Sized,
{
    collection.size()
}

/// Returns the insertion strategy the default terminal inserter uses for `destination`.
#[inline]
pub fn default_insertion<C>(_destination: &C) -> Insertion
where
    C: Collection + ?Sized,
{
    Insertion::for_shape(C::SHAPE)
}
