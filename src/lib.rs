// Declare modules
pub mod analysis;
pub mod compare;
pub mod media;
pub mod report;
pub mod track;

pub use analysis::{align, segment, SilenceConfig};
pub use compare::{compare_files, compare_signals, CompareConfig, Comparison};
pub use media::{read_signal, DecodeError};
pub use track::{Interval, Signal};
