pub mod builder;
pub mod coords;
pub mod index;
mod print;

pub use builder::GsbBuilder;
pub use coords::CbType;
pub use index::{GsbIndex, TRACK_OPEN};
