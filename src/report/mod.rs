pub mod timecode;

pub use timecode::{format_offset, format_range, parse_offset, parse_range, TimecodeError};
