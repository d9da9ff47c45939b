use serde::{Deserialize, Serialize};

/// A decoded mono amplitude signal: parallel sequences of time offsets
/// (strictly increasing, in seconds) and normalized amplitudes in [-1.0, 1.0].
/// Produced once by the decoding collaborator and read-only afterward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signal {
    times: Vec<f64>,
    amplitudes: Vec<f64>,
}

impl Signal {
    /// Creates a signal from explicit (time, amplitude) sequences.
    /// Caller contract: both sequences have equal length and times are
    /// strictly increasing.
    pub fn new(times: Vec<f64>, amplitudes: Vec<f64>) -> Self {
        debug_assert_eq!(times.len(), amplitudes.len());
        Signal { times, amplitudes }
    }

    /// Creates a signal from evenly spaced samples: time[i] = i / sample_rate
    pub fn from_samples(amplitudes: Vec<f64>, sample_rate: f64) -> Self {
        let times = (0..amplitudes.len())
            .map(|i| i as f64 / sample_rate)
            .collect();
        Signal { times, amplitudes }
    }

    pub fn len(&self) -> usize {
        self.amplitudes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.amplitudes.is_empty()
    }

    /// Time offset of the last sample, or 0.0 for an empty signal
    pub fn duration(&self) -> f64 {
        self.times.last().copied().unwrap_or(0.0)
    }

    /// Iterates the signal as (time, amplitude) pairs in time order
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times
            .iter()
            .copied()
            .zip(self.amplitudes.iter().copied())
    }
}
