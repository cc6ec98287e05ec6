mod compose;
mod filter;
mod find;
mod identity;
mod map;
mod sort;
mod stage;
mod take;

pub use compose::*;
pub use filter::*;
pub use find::*;
pub use identity::*;
pub use map::*;
pub use sort::*;
pub use stage::*;
pub use take::*;
