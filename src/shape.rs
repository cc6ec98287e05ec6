//! Shape vocabulary shared by adapters, reduction strategies and the driver.

use std::fmt::{self, Display};

/// The structural category of a collection.
///
/// Every container this crate understands belongs to exactly one shape.
/// The shape decides which reduction strategy walks a source and which
/// insertion strategy fills a destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Integer-indexed, traversed in insertion order (`Vec`, `VecDeque`, slices).
    OrderedSequence,
    /// A sized container iterated as `(key, value)` pairs (maps and sets).
    PairIterable(PairKind),
    /// A string-keyed record whose keys enumerate in insertion order.
    KeyedMapping,
}

/// Distinguishes the two flavors of [`Shape::PairIterable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PairKind {
    /// Supports explicit set-by-key (maps).
    Keyed,
    /// Supports only add-unique (sets). The key of an element is the element itself.
    Valueless,
}

impl Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Shape::OrderedSequence => "ordered sequence",
            Shape::PairIterable(PairKind::Keyed) => "keyed pair-iterable",
            Shape::PairIterable(PairKind::Valueless) => "valueless pair-iterable",
            Shape::KeyedMapping => "keyed mapping",
        })
    }
}

/// How the default terminal inserter writes a value into a destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Insertion {
    Append,
    SetByKey,
    AddUnique,
    AssignByKey,
}

impl Insertion {
    /// Selects the insertion strategy for a destination of the given shape.
    ///
    /// Priority follows the order sequences, keyed pair-iterables,
    /// valueless pair-iterables, keyed mappings.
    ///
    /// ```
    /// use fusefold::{Insertion, PairKind, Shape};
    ///
    /// assert_eq!(Insertion::for_shape(Shape::OrderedSequence), Insertion::Append);
    /// assert_eq!(
    ///     Insertion::for_shape(Shape::PairIterable(PairKind::Valueless)),
    ///     Insertion::AddUnique,
    /// );
    /// ```
    pub const fn for_shape(shape: Shape) -> Self {
        match shape {
            Shape::OrderedSequence => Insertion::Append,
            Shape::PairIterable(PairKind::Keyed) => Insertion::SetByKey,
            Shape::PairIterable(PairKind::Valueless) => Insertion::AddUnique,
            Shape::KeyedMapping => Insertion::AssignByKey,
        }
    }
}

/// Traversal direction of a reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    #[default]
    Forward,
    Reverse,
}

impl Direction {
    #[inline]
    pub const fn is_reverse(self) -> bool {
        matches!(self, Direction::Reverse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_every_shape() {
        assert_eq!(Shape::OrderedSequence.to_string(), "ordered sequence");
        assert_eq!(
            Shape::PairIterable(PairKind::Keyed).to_string(),
            "keyed pair-iterable"
        );
        assert_eq!(
            Shape::PairIterable(PairKind::Valueless).to_string(),
            "valueless pair-iterable"
        );
        assert_eq!(Shape::KeyedMapping.to_string(), "keyed mapping");
    }

    #[test]
    fn insertion_follows_destination_shape() {
        assert_eq!(
            Insertion::for_shape(Shape::PairIterable(PairKind::Keyed)),
            Insertion::SetByKey
        );
        assert_eq!(
            Insertion::for_shape(Shape::KeyedMapping),
            Insertion::AssignByKey
        );
    }

    #[test]
    fn forward_is_default() {
        assert_eq!(Direction::default(), Direction::Forward);
        assert!(Direction::Reverse.is_reverse());
    }
}
