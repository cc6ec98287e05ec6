use std::{fmt::Display, ops::ControlFlow};

use crate::{
    Accumulator, Collection, Direction, Pair, Record, Shape, SortByValue, Source,
    cmp::Comparator, reduce::fold_mapping, sort::sort_mapping,
};

impl<V> Collection for Record<V> {
    const SHAPE: Shape = Shape::KeyedMapping;

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<V: Clone> Source for Record<V> {
    type Key = String;
    type Value = V;
    type Empty<U> = Record<U>;

    #[inline]
    fn empty_like<U>(&self) -> Record<U> {
        Record::new()
    }

    fn extract_pairs(&self) -> Vec<Pair<String, V>> {
        self.iter()
            .map(|(key, value)| (key.to_owned(), value.clone()))
            .collect()
    }

    fn extract_values(&self) -> Vec<V> {
        self.values().cloned().collect()
    }

    #[inline]
    fn fold_with<A, F>(&self, seed: A, direction: Direction, f: F) -> A
    where
        F: FnMut(&mut A, V, String) -> ControlFlow<()>,
    {
        fold_mapping(self, seed, direction, f)
    }
}

/// Any displayable key can name a field, the way numbers become property
/// names in JavaScript objects.
impl<K: Display, V> Accumulator<K, V> for Record<V> {
    #[inline]
    fn accumulate(&mut self, key: K, value: V) {
        self.insert(key.to_string(), value);
    }
}

impl<V> SortByValue for Record<V> {
    type Value = V;

    #[inline]
    fn sort_by_value<C>(&mut self, comparator: &mut C)
    where
        C: Comparator<V>,
    {
        sort_mapping(self, comparator);
    }
}
