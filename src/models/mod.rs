pub mod catalog;
pub mod coordinate;
pub mod ranking;

pub use catalog::*;
pub use coordinate::*;
pub use ranking::*;
