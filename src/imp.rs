mod collections;
mod record;
mod terminal;
mod vec;

pub use terminal::*;
