use crate::track::{round_to_tenth, Interval, Signal};
use serde::{Deserialize, Serialize};

/// Configuration for silence segmentation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SilenceConfig {
    /// Symmetric amplitude bound defining silence, against normalized
    /// samples in [-1.0, 1.0] (e.g. 0.001)
    pub noise_amplitude: f64,
    /// Minimum contiguous silent duration in seconds for a run to count
    /// as an interval (e.g. 0.75)
    pub min_silence_duration: f64,
    /// Whether a silent run still open at the last sample is emitted.
    /// Off by default: the historical behavior drops the trailing run,
    /// which is arguably a bug but is what existing comparisons expect.
    pub flush_trailing: bool,
}

impl Default for SilenceConfig {
    fn default() -> Self {
        SilenceConfig {
            noise_amplitude: 0.001,
            min_silence_duration: 0.75,
            flush_trailing: false,
        }
    }
}

/// Scans a signal once, in time order, and returns its silence intervals.
///
/// A sample is silent iff its amplitude lies strictly inside
/// (-noise_amplitude, noise_amplitude). A run is emitted only if the
/// non-silent sample that closes it arrives later than the run's rounded
/// start plus `min_silence_duration`. Endpoints are rounded to a tenth of
/// a second; output intervals are disjoint and sorted by start time.
pub fn segment(signal: &Signal, config: &SilenceConfig) -> Vec<Interval> {
    log::debug!(
        "Segmenting {} samples, noise amplitude {}, min duration {} s",
        signal.len(),
        config.noise_amplitude,
        config.min_silence_duration
    );

    let mut intervals = Vec::new();
    let mut silence_start: Option<f64> = None;
    let mut last_time = 0.0;

    for (t, a) in signal.iter() {
        let is_silent = -config.noise_amplitude < a && a < config.noise_amplitude;
        match (is_silent, silence_start) {
            (true, None) => {
                silence_start = Some(round_to_tenth(t));
            }
            (false, Some(start)) => {
                if t > start + config.min_silence_duration {
                    intervals.push(Interval::new(start, round_to_tenth(t)));
                }
                silence_start = None;
            }
            _ => {}
        }
        last_time = t;
    }

    // A run still open at the last sample is dropped unless the caller
    // opted into flushing it.
    if config.flush_trailing {
        if let Some(start) = silence_start {
            if last_time > start + config.min_silence_duration {
                intervals.push(Interval::new(start, round_to_tenth(last_time)));
            }
        }
    }

    log::info!("Detected {} silence intervals", intervals.len());
    for (i, interval) in intervals.iter().enumerate() {
        log::debug!(
            "  Silence {}: {:.1}s - {:.1}s ({:.1}s)",
            i + 1,
            interval.start,
            interval.end,
            interval.duration()
        );
    }

    intervals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signal_with_gap(gap_start: f64, gap_end: f64, total: f64) -> Signal {
        // 100 Hz synthetic signal, loud outside the gap, flat inside it
        let rate = 100.0;
        let amplitudes = (0..(total * rate) as usize)
            .map(|i| {
                let t = i as f64 / rate;
                if t >= gap_start && t < gap_end {
                    0.0
                } else {
                    0.5
                }
            })
            .collect();
        Signal::from_samples(amplitudes, rate)
    }

    #[test]
    fn test_default_config() {
        let config = SilenceConfig::default();
        assert_eq!(config.noise_amplitude, 0.001);
        assert_eq!(config.min_silence_duration, 0.75);
        assert!(!config.flush_trailing);
    }

    #[test]
    fn test_detects_single_gap() {
        let signal = signal_with_gap(2.0, 4.0, 6.0);
        let intervals = segment(&signal, &SilenceConfig::default());
        assert_eq!(intervals, vec![Interval::new(2.0, 4.0)]);
    }

    #[test]
    fn test_short_gap_discarded() {
        let signal = signal_with_gap(2.0, 2.5, 6.0);
        let intervals = segment(&signal, &SilenceConfig::default());
        assert!(intervals.is_empty());
    }

    #[test]
    fn test_empty_signal() {
        let signal = Signal::from_samples(Vec::new(), 100.0);
        assert!(segment(&signal, &SilenceConfig::default()).is_empty());
    }

    #[test]
    fn test_no_silent_sample() {
        let signal = Signal::from_samples(vec![0.5; 500], 100.0);
        assert!(segment(&signal, &SilenceConfig::default()).is_empty());
    }

    #[test]
    fn test_boundary_amplitude_is_not_silent() {
        // Amplitude exactly at the bound counts as sound (strict inequality)
        let config = SilenceConfig {
            noise_amplitude: 0.5,
            ..SilenceConfig::default()
        };
        let signal = Signal::from_samples(vec![0.5; 500], 100.0);
        assert!(segment(&signal, &config).is_empty());
    }

    #[test]
    fn test_trailing_run_dropped_by_default() {
        // Silence runs through the final sample: nothing emitted
        let signal = signal_with_gap(2.0, 6.0, 6.0);
        let intervals = segment(&signal, &SilenceConfig::default());
        assert!(intervals.is_empty());
    }

    #[test]
    fn test_trailing_run_flushed_when_enabled() {
        let config = SilenceConfig {
            flush_trailing: true,
            ..SilenceConfig::default()
        };
        let signal = signal_with_gap(2.0, 6.0, 6.0);
        let intervals = segment(&signal, &config);
        assert_eq!(intervals.len(), 1);
        assert_eq!(intervals[0].start, 2.0);
        // last sample of a 6 s signal at 100 Hz sits at 5.99
        assert_eq!(intervals[0].end, 6.0);
    }

    #[test]
    fn test_all_silent_signal_yields_nothing_without_flush() {
        let signal = Signal::from_samples(vec![0.0; 500], 100.0);
        assert!(segment(&signal, &SilenceConfig::default()).is_empty());
        let config = SilenceConfig {
            flush_trailing: true,
            ..SilenceConfig::default()
        };
        assert_eq!(segment(&signal, &config).len(), 1);
    }

    #[test]
    fn test_intervals_sorted_and_disjoint() {
        let rate = 100.0;
        let amplitudes: Vec<f64> = (0..2000)
            .map(|i| {
                let t = i as f64 / rate;
                // gaps at 2-4, 7-9, 12-14
                let silent = (2.0..4.0).contains(&t)
                    || (7.0..9.0).contains(&t)
                    || (12.0..14.0).contains(&t);
                if silent {
                    0.0
                } else {
                    0.5
                }
            })
            .collect();
        let signal = Signal::from_samples(amplitudes, rate);
        let intervals = segment(&signal, &SilenceConfig::default());
        assert_eq!(intervals.len(), 3);
        for pair in intervals.windows(2) {
            assert!(pair[0].end <= pair[1].start);
        }
        for interval in &intervals {
            assert!(interval.duration() > 0.75);
        }
    }
}
