//! # KISMET Audit
//!
//! Prints avalanche statistics for every mixing algorithm and the observed
//! output range of every noise family.
//!
//! Usage:
//!
//! ```text
//! kismet_audit [PROFILE.toml]...
//! ```
//!
//! Each profile given on the command line is loaded, validated and surveyed
//! after the built-in families. Log verbosity follows `RUST_LOG`.

use std::process::ExitCode;

use kismet::report::{avalanche_table, survey, survey_all, Survey};
use kismet::NoiseProfile;
use tracing_subscriber::EnvFilter;

/// Input pairs per avalanche audit.
const AVALANCHE_SAMPLES: u32 = 2_048;
/// Seed of the built-in family survey.
const SURVEY_SEED: u32 = 1337;
/// Samples per survey axis.
const SURVEY_GRID: u32 = 48;

fn print_survey(s: &Survey) {
    println!(
        "  {:<14} {:>9.4} {:>9.4} {:>9.4} {:>9.4}",
        s.name,
        s.range_2d.min(),
        s.range_2d.max(),
        s.range_3d.min(),
        s.range_3d.max()
    );
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    println!("═══════════════════════════════════════════════════════════════════");
    println!("                       KISMET AUDIT v0.1.0");
    println!("═══════════════════════════════════════════════════════════════════");
    println!();
    println!("  Avalanche (ideal 0.5000, {AVALANCHE_SAMPLES} samples)");
    println!(
        "  {:<16} {:>9} {:>9} {:>9} {:>9}",
        "algorithm", "idx32", "seed32", "idx64", "seed64"
    );

    for row in avalanche_table(AVALANCHE_SAMPLES, 0) {
        println!(
            "  {:<16} {:>9.4} {:>9.4} {:>9.4} {:>9.4}",
            row.narrow.algorithm.name(),
            row.narrow.index_bias,
            row.narrow.seed_bias,
            row.wide.index_bias,
            row.wide.seed_bias
        );
    }

    println!();
    println!("  Value ranges (seed {SURVEY_SEED}, {SURVEY_GRID} samples per axis)");
    println!(
        "  {:<14} {:>9} {:>9} {:>9} {:>9}",
        "family", "min2d", "max2d", "min3d", "max3d"
    );
    for s in survey_all(SURVEY_SEED, SURVEY_GRID) {
        print_survey(&s);
    }

    let mut failed = false;
    for path in std::env::args().skip(1) {
        match NoiseProfile::from_file(&path) {
            Ok(profile) => {
                tracing::info!(%path, kind = ?profile.kind, "Surveying profile");
                print_survey(&survey(&profile, SURVEY_GRID));
            }
            Err(e) => {
                tracing::error!(%path, error = %e, "Failed to load profile");
                failed = true;
            }
        }
    }

    println!();
    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
