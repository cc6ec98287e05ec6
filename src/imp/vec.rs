//! Ordered-sequence adapters: [`Vec`], [`VecDeque`], slices and arrays.

use std::{collections::VecDeque, ops::ControlFlow};

use crate::{
    Accumulator, Collection, Direction, Pair, Shape, SortByValue, Source, cmp::Comparator,
    reduce::fold_sequence, sort::sort_sequence,
};

macro_rules! sequence_source_impl {
    ($({$($generic:tt)*})? $name:ty, $item:ident => $empty:ident) => {
        impl<$item $(, $($generic)*)?> Collection for $name {
            const SHAPE: Shape = Shape::OrderedSequence;

            #[inline]
            fn size(&self) -> usize {
                self.len()
            }
        }

        impl<$item $(, $($generic)*)?> Source for $name
        where
            $item: Clone,
        {
            type Key = usize;
            type Value = $item;
            type Empty<U> = $empty<U>;

            #[inline]
            fn empty_like<U>(&self) -> Self::Empty<U> {
                $empty::new()
            }

            fn extract_pairs(&self) -> Vec<Pair<usize, $item>> {
                self.iter().cloned().enumerate().collect()
            }

            fn extract_values(&self) -> Vec<$item> {
                self.iter().cloned().collect()
            }

            #[inline]
            fn fold_with<A, F>(&self, seed: A, direction: Direction, f: F) -> A
            where
                F: FnMut(&mut A, $item, usize) -> ControlFlow<()>,
            {
                fold_sequence(self.iter().cloned(), seed, direction, f)
            }
        }
    };
}

sequence_source_impl!(Vec<T>, T => Vec);
sequence_source_impl!(VecDeque<T>, T => VecDeque);
sequence_source_impl!([T], T => Vec);
sequence_source_impl!({const N: usize} [T; N], T => Vec);

impl<K, T> Accumulator<K, T> for Vec<T> {
    #[inline]
    fn accumulate(&mut self, _key: K, value: T) {
        self.push(value);
    }
}

impl<K, T> Accumulator<K, T> for VecDeque<T> {
    #[inline]
    fn accumulate(&mut self, _key: K, value: T) {
        self.push_back(value);
    }
}

impl<T> SortByValue for Vec<T> {
    type Value = T;

    #[inline]
    fn sort_by_value<C>(&mut self, comparator: &mut C)
    where
        C: Comparator<T>,
    {
        sort_sequence(self, comparator);
    }
}

impl<T> SortByValue for VecDeque<T> {
    type Value = T;

    #[inline]
    fn sort_by_value<C>(&mut self, comparator: &mut C)
    where
        C: Comparator<T>,
    {
        sort_sequence(self.make_contiguous(), comparator);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Insertion, classify, default_insertion, pairs, size};

    #[test]
    fn sequences_are_classified_as_ordered() {
        let deque = VecDeque::from([1, 2]);

        assert_eq!(classify(&vec![1]), Shape::OrderedSequence);
        assert_eq!(classify(&deque), Shape::OrderedSequence);
        assert_eq!(classify(&[1, 2, 3]), Shape::OrderedSequence);
        assert_eq!(size(&deque), 2);
        assert_eq!(size(&[1, 2, 3][..]), 3);
        assert_eq!(default_insertion(&Vec::<i32>::new()), Insertion::Append);
    }

    #[test]
    fn pairs_are_indexed() {
        assert_eq!(pairs(&vec!["a", "b"]), [(0, "a"), (1, "b")]);
        assert_eq!(pairs(&["x"][..]), [(0, "x")]);
    }

    #[test]
    fn slices_and_arrays_default_to_vec() {
        let empty: Vec<String> = [1, 2].empty_like();
        assert!(empty.is_empty());
    }

    #[test]
    fn deque_sorts_across_wraparound() {
        let mut deque = VecDeque::from([3, 4]);
        deque.push_front(5);
        deque.push_front(1);
        deque.sort_by_value(&mut |a: &i32, b: &i32| a.cmp(b));

        assert_eq!(deque, [1, 3, 4, 5]);
    }
}
