//! Composable transformation steps that run in one pass over any kind of collection.
//!
//! A step like [`map()`], [`filter()`], [`take()`], [`find()`] or [`sort()`] knows
//! nothing about the container it reads from or the container it writes into.
//! [`transduce()`] fuses a list of steps into a single reducer and folds the
//! source once, writing every surviving value straight into the destination.
//!
//! # Motivation
//!
//! Suppose we are given a price list and we are asked to keep the expensive items,
//! apply a discount and keep the result keyed by item.
//!
//! - Approach 1: iterator chain
//!
//! ```
//! use indexmap::IndexMap;
//!
//! let prices = IndexMap::from([("apple", 3), ("pear", 5), ("fig", 8)]);
//! let discounted: IndexMap<_, _> = prices
//!     .iter()
//!     .filter(|&(_, &price)| price > 4)
//!     .map(|(&item, &price)| (item, price - 1))
//!     .collect();
//!
//! assert_eq!(discounted, IndexMap::from([("pear", 4), ("fig", 7)]));
//! ```
//!
//! **Cons:** the chain is written for one container. The same logic over a `Vec`
//! needs a different closure signature, a different `collect` target and keys
//! handled by hand. Reusing it for a set, or converting a map into a sequence on
//! the way, means writing it again.
//!
//! This crate lets the logic be written once:
//!
//! ```
//! use indexmap::IndexMap;
//! use fusefold::{Transducer, combine, filter, map};
//!
//! let discount = Transducer::new(combine![
//!     filter(|&price: &i32, _, _| price > 4),
//!     map(|price: i32, _, _| price - 1),
//! ]);
//!
//! let prices = IndexMap::from([("apple", 3), ("pear", 5), ("fig", 8)]);
//! assert_eq!(discount.run(&prices), IndexMap::from([("pear", 4), ("fig", 7)]));
//!
//! // The output shape follows the destination. Keys are dropped for a `Vec`.
//! assert_eq!(discount.run_into(&prices, vec![]), [4, 7]);
//! ```
//!
//! Steps are generic over the source, so the same constructors work for
//! sequences, sets and records too:
//!
//! ```
//! use indexmap::IndexSet;
//! use fusefold::{Record, combine, filter, map, transduce};
//!
//! let set = IndexSet::from([3, 5, 8]);
//! let discounted = transduce(
//!     combine![filter(|&p: &i32, _, _| p > 4), map(|p: i32, _, _| p - 1)],
//!     &set,
//! );
//! assert_eq!(discounted, IndexSet::from([4, 7]));
//!
//! let record = Record::from([("apple", 3), ("pear", 5)]);
//! let discounted = transduce(
//!     combine![filter(|&p: &i32, _, _| p > 4), map(|p: i32, _, _| p - 1)],
//!     &record,
//! );
//! assert_eq!(discounted, Record::from([("pear", 4)]));
//! ```
//!
//! # Shapes
//!
//! Every collection belongs to one [`Shape`]:
//!
//! | Shape | Types | Key | Default insertion |
//! |-------|-------|-----|-------------------|
//! | ordered sequence | `Vec`, `VecDeque`, slices, arrays | index | append |
//! | keyed pair-iterable | `IndexMap`, `HashMap`, `BTreeMap` | map key | set by key |
//! | valueless pair-iterable | `IndexSet`, `HashSet`, `BTreeSet` | the value | add unique |
//! | keyed mapping | [`Record`] | field name | assign by key |
//!
//! The source picks how it is traversed ([`Source::fold_with`]) and the
//! destination picks how values are written ([`Accumulator::accumulate`]).
//! Any source can feed any destination through [`transduce_into()`].
//!
//! # Early termination
//!
//! Reducers return a [`ControlFlow`](std::ops::ControlFlow). [`take()`] breaks
//! once the destination is full and [`find()`] breaks right after its match, so
//! the remaining elements are never visited.
//!
//! # Logging
//!
//! Transductions emit [`tracing`] events: `debug` when one starts, `trace` when
//! it ends and whenever a destination is re-sorted. No subscriber is installed
//! by this crate.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod adaptors;
pub mod cmp;
mod driver;
mod error;
mod imp;
pub mod prelude;
mod record;
pub mod reduce;
mod shape;
mod sort;
mod traits;

#[cfg(test)]
mod test_utils;

pub use adaptors::*;
pub use driver::*;
pub use error::*;
pub use imp::*;
pub use record::*;
pub use shape::*;
pub use traits::*;
