use crate::analysis::{align, segment, SilenceConfig};
use crate::media::{read_signal, DecodeError};
use crate::track::{Interval, Signal};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for one comparison run. Threaded explicitly into the
/// pipeline; there is no process-wide tunable state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareConfig {
    pub silence: SilenceConfig,
    /// Time slack in seconds when matching interval boundaries across the
    /// two tracks (e.g. 0.2)
    pub tolerance: f64,
}

impl Default for CompareConfig {
    fn default() -> Self {
        CompareConfig {
            silence: SilenceConfig::default(),
            tolerance: 0.2,
        }
    }
}

/// Result of comparing a candidate track against a reference track
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comparison {
    /// Silence intervals found in the reference track
    pub reference_intervals: Vec<Interval>,
    /// Silence intervals found in the candidate track
    pub candidate_intervals: Vec<Interval>,
    /// Time spans where the candidate's silence pattern diverges from the
    /// reference's beyond tolerance
    pub mismatches: Vec<Interval>,
}

/// Runs the whole pipeline over two decoded signals: segments each one,
/// then aligns the candidate's intervals against the reference's
pub fn compare_signals(reference: &Signal, candidate: &Signal, config: &CompareConfig) -> Comparison {
    log::info!("Segmenting reference track");
    let reference_intervals = segment(reference, &config.silence);

    log::info!("Segmenting candidate track");
    let candidate_intervals = segment(candidate, &config.silence);

    log::info!("Aligning silence intervals");
    let mismatches = align(&reference_intervals, &candidate_intervals, config.tolerance);

    Comparison {
        reference_intervals,
        candidate_intervals,
        mismatches,
    }
}

/// Decodes both WAV files, then compares them. Decoding failures surface
/// as typed errors before any analysis runs.
pub fn compare_files(
    reference_path: &Path,
    candidate_path: &Path,
    config: &CompareConfig,
) -> Result<Comparison, DecodeError> {
    log::info!(
        "Comparing {:?} (reference) against {:?} (candidate)",
        reference_path,
        candidate_path
    );

    let reference = read_signal(reference_path)?;
    let candidate = read_signal(candidate_path)?;

    Ok(compare_signals(&reference, &candidate, config))
}
