//! Re-exports commonly used items from this crate.
//!
//! This module is intended to be imported with a wildcard, providing
//! convenient access to the step constructors, the driver and the traits.
//!
//! # Example
//!
//! ```
//! use fusefold::prelude::*;
//!
//! let evens = transduce(filter(|&x: &i32, _, _| x % 2 == 0), &vec![1, 2, 3, 4]);
//! assert_eq!(evens, [2, 4]);
//! ```

pub use crate::combine;
pub use crate::traits::*;
pub use crate::{
    Direction, Options, Record, Transducer, filter, find, map, sort, sort_by, take, transduce,
    transduce_into, transduce_with,
};
