//! Comparators used by [`sort()`](crate::sort()) and [`sort_by()`](crate::sort_by()).
//!
//! This module corresponds to [`std::cmp`].

mod comparator;

pub use comparator::*;
