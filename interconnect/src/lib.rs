pub mod coord;
pub mod dir;
pub mod node;
