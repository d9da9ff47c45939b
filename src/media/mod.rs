pub mod decode;

pub use decode::{read_signal, DecodeError};
