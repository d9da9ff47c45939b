pub mod interval;
pub mod signal;

pub use interval::{round_to_tenth, Interval};
pub use signal::Signal;
