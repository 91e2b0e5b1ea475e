mod index;
mod lead;
mod tags;

pub use index::*;
pub use lead::*;
pub use tags::*;
