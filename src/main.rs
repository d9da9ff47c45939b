use clap::Parser;
use silence_diff::{compare_files, report, CompareConfig, SilenceConfig};
use std::path::PathBuf;
use std::process::ExitCode;

/// Compares silence patterns between a reference and a dubbed audio track
/// and reports where the dub's gaps diverge from the original's.
#[derive(Debug, Parser)]
#[command(name = "silence-diff", version, about)]
struct Args {
    /// Reference WAV file (the original track)
    reference: PathBuf,
    /// Candidate WAV file (the dubbed/re-recorded track)
    candidate: PathBuf,
    /// Amplitude bound below which a sample counts as silent
    #[arg(long, default_value_t = 0.001)]
    noise: f64,
    /// Minimum silent duration in seconds for a gap to count
    #[arg(long, default_value_t = 0.75)]
    min_silence: f64,
    /// Slack in seconds when matching gaps across the two tracks
    #[arg(long, default_value_t = 0.2)]
    tolerance: f64,
    /// Emit a silence interval still open at the end of a track
    #[arg(long)]
    flush_trailing: bool,
    /// Print the full comparison as JSON instead of one line per mismatch
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    let config = CompareConfig {
        silence: SilenceConfig {
            noise_amplitude: args.noise,
            min_silence_duration: args.min_silence,
            flush_trailing: args.flush_trailing,
        },
        tolerance: args.tolerance,
    };

    let comparison = match compare_files(&args.reference, &args.candidate, &config) {
        Ok(comparison) => comparison,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&comparison) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: failed to serialize comparison: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else if comparison.mismatches.is_empty() {
        println!("No mismatched gaps found.");
    } else {
        for mismatch in &comparison.mismatches {
            println!("{}", report::format_range(mismatch));
        }
    }

    ExitCode::SUCCESS
}
