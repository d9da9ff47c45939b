pub mod aligner;
pub mod segmenter;

pub use aligner::align;
pub use segmenter::{segment, SilenceConfig};
