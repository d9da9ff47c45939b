use crate::track::Signal;
use hound::{SampleFormat, WavReader};
use std::path::Path;
use thiserror::Error;

/// Failures while turning a WAV file into a Signal. Reported to the caller
/// as values; the presentation layer decides how to surface them.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("failed to open WAV file {path}: {source}")]
    Open {
        path: String,
        source: hound::Error,
    },
    #[error("failed to read samples from {path}: {source}")]
    Read {
        path: String,
        source: hound::Error,
    },
    #[error("WAV file {path} contains no samples")]
    Empty { path: String },
}

/// Decodes a WAV file into a normalized mono signal.
///
/// Multi-channel audio is downmixed by averaging channels; integer samples
/// are scaled by the bit-depth ceiling so amplitudes land in [-1.0, 1.0],
/// matching what the silence threshold is defined against. Sample times
/// are derived from the sample rate.
pub fn read_signal(wav_path: &Path) -> Result<Signal, DecodeError> {
    log::info!("Decoding WAV file: {:?}", wav_path);

    let path_str = wav_path.display().to_string();
    let mut reader = WavReader::open(wav_path).map_err(|e| DecodeError::Open {
        path: path_str.clone(),
        source: e,
    })?;

    let spec = reader.spec();
    log::debug!("WAV spec: {:?}", spec);

    let samples: Vec<f64> = match spec.sample_format {
        SampleFormat::Float => reader
            .samples::<f32>()
            .map(|s| s.map(f64::from))
            .collect::<Result<Vec<_>, _>>(),
        SampleFormat::Int => {
            let scale = f64::from(1u32 << (spec.bits_per_sample - 1));
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| f64::from(v) / scale))
                .collect::<Result<Vec<_>, _>>()
        }
    }
    .map_err(|e| DecodeError::Read {
        path: path_str.clone(),
        source: e,
    })?;

    if samples.is_empty() {
        return Err(DecodeError::Empty { path: path_str });
    }

    // Average interleaved channels down to mono
    let mono: Vec<f64> = if spec.channels > 1 {
        samples
            .chunks(spec.channels as usize)
            .map(|frame| frame.iter().sum::<f64>() / frame.len() as f64)
            .collect()
    } else {
        samples
    };

    log::info!(
        "Decoded {} mono samples at {} Hz ({:.2} s)",
        mono.len(),
        spec.sample_rate,
        mono.len() as f64 / f64::from(spec.sample_rate)
    );

    Ok(Signal::from_samples(mono, f64::from(spec.sample_rate)))
}
