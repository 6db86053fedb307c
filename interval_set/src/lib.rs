pub mod interval;
pub mod set;

pub use interval::Interval;
pub use set::{IntervalSet, validate};
pub use common::error::Errno;
