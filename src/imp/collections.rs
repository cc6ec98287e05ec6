//! Pair-iterable adapters: maps and sets from `std` and `indexmap`.
//!
//! Maps are keyed pair-iterables: they traverse as `(key, value)` and insert by
//! key. Sets are valueless pair-iterables: they traverse as `(value, value)` and
//! add unique values, ignoring whatever key comes with them.
//!
//! Hash-ordered containers have no stable order, so their traversal order and
//! the effect of sorting them are unspecified. Tree-ordered containers always
//! traverse in key order. `IndexMap` and `IndexSet` keep insertion order and are
//! the pair-iterables to use when order matters.

use std::{
    cmp::Eq,
    collections::{BTreeMap, BTreeSet, HashMap, HashSet},
    hash::{BuildHasher, Hash},
    ops::ControlFlow,
};

use indexmap::{IndexMap, IndexSet};

use crate::{
    Accumulator, Collection, Direction, Pair, PairKind, Shape, SortByValue, Source,
    cmp::Comparator,
    reduce::fold_pairs,
    sort::{sort_keyed_pairs, sort_values_only},
};

macro_rules! keyed_impl {
    (
        $name:ident<K, V $(, $hasher:ident)?>,
        empty_like($this:ident) => $empty:expr,
        drain($drained:ident) => $drain:expr,
        $($gen_bound:ident: $bound:path),* $(,)?
    ) => {
        impl<K, V $(, $hasher)?> Collection for $name<K, V $(, $hasher)?> {
            const SHAPE: Shape = Shape::PairIterable(PairKind::Keyed);

            #[inline]
            fn size(&self) -> usize {
                self.len()
            }
        }

        impl<K, V $(, $hasher)?> Source for $name<K, V $(, $hasher)?>
        where
            K: Clone,
            V: Clone,
            $($hasher: Clone,)?
            $($gen_bound: $bound,)*
        {
            type Key = K;
            type Value = V;
            type Empty<U> = $name<K, U $(, $hasher)?>;

            #[inline]
            fn empty_like<U>(&self) -> Self::Empty<U> {
                let $this = self;
                $empty
            }

            fn extract_pairs(&self) -> Vec<Pair<K, V>> {
                self.iter()
                    .map(|(key, value)| (key.clone(), value.clone()))
                    .collect()
            }

            fn extract_values(&self) -> Vec<V> {
                self.values().cloned().collect()
            }

            #[inline]
            fn fold_with<A, F>(&self, seed: A, direction: Direction, f: F) -> A
            where
                F: FnMut(&mut A, V, K) -> ControlFlow<()>,
            {
                fold_pairs(self.extract_pairs(), seed, direction, f)
            }
        }

        impl<Q, K, V $(, $hasher)?> Accumulator<Q, V> for $name<K, V $(, $hasher)?>
        where
            Q: Into<K>,
            $($gen_bound: $bound,)*
        {
            #[inline]
            fn accumulate(&mut self, key: Q, value: V) {
                // The replaced value, if any, is dropped: set-by-key overwrites.
                self.insert(key.into(), value);
            }
        }

        impl<K, V $(, $hasher)?> SortByValue for $name<K, V $(, $hasher)?>
        where
            $($gen_bound: $bound,)*
        {
            type Value = V;

            fn sort_by_value<C>(&mut self, comparator: &mut C)
            where
                C: Comparator<V>,
            {
                let sorted = {
                    let $drained = &mut *self;
                    sort_keyed_pairs($drain, comparator)
                };
                self.extend(sorted);
            }
        }
    };
}

macro_rules! valueless_impl {
    (
        $name:ident<T $(, $hasher:ident)?>,
        empty_like($this:ident) => $empty:expr,
        drain($drained:ident) => $drain:expr,
        $($gen_bound:ident: $bound:path),* $(,)?
    ) => {
        impl<T $(, $hasher)?> Collection for $name<T $(, $hasher)?> {
            const SHAPE: Shape = Shape::PairIterable(PairKind::Valueless);

            #[inline]
            fn size(&self) -> usize {
                self.len()
            }
        }

        impl<T $(, $hasher)?> Source for $name<T $(, $hasher)?>
        where
            T: Clone,
            $($hasher: Clone,)?
            $($gen_bound: $bound,)*
        {
            // Like a JavaScript `Set`, an element is its own key.
            type Key = T;
            type Value = T;
            type Empty<U> = $name<U $(, $hasher)?>;

            #[inline]
            fn empty_like<U>(&self) -> Self::Empty<U> {
                let $this = self;
                $empty
            }

            fn extract_pairs(&self) -> Vec<Pair<T, T>> {
                self.iter().map(|item| (item.clone(), item.clone())).collect()
            }

            fn extract_values(&self) -> Vec<T> {
                self.iter().cloned().collect()
            }

            #[inline]
            fn fold_with<A, F>(&self, seed: A, direction: Direction, f: F) -> A
            where
                F: FnMut(&mut A, T, T) -> ControlFlow<()>,
            {
                fold_pairs(self.extract_pairs(), seed, direction, f)
            }
        }

        impl<K, T $(, $hasher)?> Accumulator<K, T> for $name<T $(, $hasher)?>
        where
            $($gen_bound: $bound,)*
        {
            #[inline]
            fn accumulate(&mut self, _key: K, value: T) {
                // It returns a `bool`, but a duplicate is not an error: add-unique
                // simply keeps the existing element.
                self.insert(value);
            }
        }

        impl<T $(, $hasher)?> SortByValue for $name<T $(, $hasher)?>
        where
            $($gen_bound: $bound,)*
        {
            type Value = T;

            fn sort_by_value<C>(&mut self, comparator: &mut C)
            where
                C: Comparator<T>,
            {
                let sorted = {
                    let $drained = &mut *self;
                    sort_values_only($drain, comparator)
                };
                self.extend(sorted);
            }
        }
    };
}

keyed_impl!(
    IndexMap<K, V, S>,
    empty_like(this) => IndexMap::with_hasher(this.hasher().clone()),
    drain(map) => map.drain(..),
    K: Hash, K: Eq, S: BuildHasher,
);

keyed_impl!(
    HashMap<K, V, S>,
    empty_like(this) => HashMap::with_hasher(this.hasher().clone()),
    drain(map) => map.drain(),
    K: Hash, K: Eq, S: BuildHasher,
);

keyed_impl!(
    BTreeMap<K, V>,
    empty_like(_this) => BTreeMap::new(),
    drain(map) => std::mem::take(map),
    K: Ord,
);

valueless_impl!(
    IndexSet<T, S>,
    empty_like(this) => IndexSet::with_hasher(this.hasher().clone()),
    drain(set) => set.drain(..),
    T: Hash, T: Eq, S: BuildHasher,
);

valueless_impl!(
    HashSet<T, S>,
    empty_like(this) => HashSet::with_hasher(this.hasher().clone()),
    drain(set) => set.drain(),
    T: Hash, T: Eq, S: BuildHasher,
);

valueless_impl!(
    BTreeSet<T>,
    empty_like(_this) => BTreeSet::new(),
    drain(set) => std::mem::take(set),
    T: Ord,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Insertion, classify, default_insertion, pairs, values};

    #[test]
    fn maps_are_keyed_and_sets_valueless() {
        assert_eq!(
            classify(&IndexMap::<u8, u8>::new()),
            Shape::PairIterable(PairKind::Keyed)
        );
        assert_eq!(
            classify(&BTreeSet::<u8>::new()),
            Shape::PairIterable(PairKind::Valueless)
        );
        assert_eq!(
            default_insertion(&HashMap::<u8, u8>::new()),
            Insertion::SetByKey
        );
        assert_eq!(
            default_insertion(&IndexSet::<u8>::new()),
            Insertion::AddUnique
        );
    }

    #[test]
    fn set_elements_are_their_own_keys() {
        let set = IndexSet::from(["b", "a"]);
        assert_eq!(pairs(&set), [("b", "b"), ("a", "a")]);
        assert_eq!(values(&set), ["b", "a"]);
    }

    #[test]
    fn map_pairs_follow_insertion_order() {
        let map = IndexMap::from([("z", 1), ("y", 2)]);
        assert_eq!(pairs(&map), [("z", 1), ("y", 2)]);
        assert_eq!(values(&map), [1, 2]);
    }

    #[test]
    fn keyed_insert_overwrites() {
        let mut map = IndexMap::<String, i32>::new();
        map.accumulate("a", 1);
        map.accumulate("a", 2);
        assert_eq!(map.size(), 1);
        assert_eq!(map["a"], 2);
    }

    #[test]
    fn valueless_insert_ignores_key_and_duplicates() {
        let mut set = IndexSet::new();
        set.accumulate("ignored", 1);
        set.accumulate(0_usize, 1);
        assert_eq!(set.size(), 1);
    }

    #[test]
    fn sorted_map_keeps_key_value_association() {
        let mut map = IndexMap::from([("a", 10), ("b", 2), ("c", 1), ("d", 20)]);
        map.sort_by_value(&mut |a: &i32, b: &i32| a.cmp(b));

        assert_eq!(pairs(&map), [("c", 1), ("b", 2), ("a", 10), ("d", 20)]);
    }

    #[test]
    fn sorted_set_is_rebuilt_in_order() {
        let mut set = IndexSet::from([10, 2, 1, 20]);
        set.sort_by_value(&mut |a: &i32, b: &i32| a.cmp(b));

        assert_eq!(values(&set), [1, 2, 10, 20]);
    }

    #[test]
    fn empty_like_keeps_the_hasher() {
        use std::hash::BuildHasherDefault;
        use std::hash::DefaultHasher;

        let map: HashMap<u8, u8, BuildHasherDefault<DefaultHasher>> = HashMap::default();
        let empty: HashMap<u8, String, BuildHasherDefault<DefaultHasher>> = map.empty_like();
        assert!(empty.is_empty());
    }
}
