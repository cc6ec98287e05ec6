mod accumulator;
mod collection;
mod reducer;
mod source;
mod step;

pub use accumulator::*;
pub use collection::*;
pub use reducer::*;
pub use source::*;
pub use step::*;
