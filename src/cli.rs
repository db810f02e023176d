//! CLI argument definitions for the `cranio` command.
//!
//! Defines all subcommands, their arguments, and long help text
//! using the `clap` derive macros.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Top-level CLI parser with a single subcommand selector.
#[derive(Parser)]
#[command(
    name = "cranio",
    version,
    about = "Cranial measurement classification and reassessment scheduling"
)]
pub struct Cli {
    /// Configuration file (default: ./cranio.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output and clock options shared by most commands.
#[derive(Args)]
pub struct CommonArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Evaluate schedules as of this date (YYYY-MM-DD, default: today)
    #[arg(long)]
    pub today: Option<String>,
}

/// Raw caliper measurement given on the command line.
#[derive(Args)]
pub struct MeasurementArgs {
    /// Antero-posterior length in mm
    #[arg(long)]
    pub length: f64,

    /// Biparietal width in mm
    #[arg(long)]
    pub width: f64,

    /// Right diagonal (D) in mm
    #[arg(long)]
    pub diag_d: f64,

    /// Left diagonal (E) in mm
    #[arg(long)]
    pub diag_e: f64,

    /// Head circumference in mm
    #[arg(long)]
    pub head_circumference: Option<f64>,

    /// Sex: m or f (needed for head-circumference percentiles)
    #[arg(long)]
    pub sex: Option<String>,

    /// Age in months at the measurement date
    #[arg(long, conflicts_with = "birth_date", required_unless_present = "birth_date")]
    pub age_months: Option<f64>,

    /// Birth date (YYYY-MM-DD); age is derived from it
    #[arg(long)]
    pub birth_date: Option<String>,

    /// Measurement date (YYYY-MM-DD, default: today)
    #[arg(long)]
    pub date: Option<String>,
}

/// All available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Assess a single measurement
    #[command(long_about = "\
Assess a single cranial measurement.

Derived indices:
  CI   = width / length × 100
  CVAI = |D − E| / max(D, E) × 100

Asymmetry type:
  CI ≥ 81            Braquicefalia
  CI ≤ 76            Dolicocefalia
  CVAI ≥ 3.5         Plagiocefalia
  cephaly + plagio   Misto

Severity and the CHOA scale are reported as two separate axes.
The next reassessment is due 3 / 2 / 1 / 1 month(s) after the measurement
for normal / leve / moderada / severa.

Examples:
  cranio assess --length 140 --width 110 --diag-d 130 --diag-e 120 --age-months 6
  cranio assess --length 140 --width 118 --diag-d 136 --diag-e 126 \\
      --head-circumference 430 --sex f --birth-date 2024-01-15 --date 2024-07-15")]
    Assess {
        #[command(flatten)]
        measurement: MeasurementArgs,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Assess the latest measurement of every patient in a registry file
    #[command(long_about = "\
Assess the latest measurement of every patient in a JSON registry.

The registry holds two arrays:
  patients:     {id, name, birth_date, sex?}
  measurements: {patient_id, date, length, width, diag_d, diag_e, head_circumference?}

Each patient's trend compares the first and last valid measurement.")]
    Batch {
        /// Registry JSON file
        registry: PathBuf,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// List reassessment tasks and pending notifications
    #[command(long_about = "\
List reassessment tasks and pending notifications from a JSON registry.

Overdue tasks older than the active window (default 7 days, see
[schedule] active_overdue_days in cranio.toml) are hidden unless --all is set.
Notifications are shown for due-today and overdue tasks whose id is not
passed with --ack.

Examples:
  cranio tasks registry.json
  cranio tasks registry.json --today 2024-03-01 --all
  cranio tasks registry.json --ack p1:2024-02-15 --ack p2:2024-02-20")]
    Tasks {
        /// Registry JSON file
        registry: PathBuf,

        /// Include overdue tasks beyond the active window
        #[arg(long)]
        all: bool,

        /// Notification ids already acknowledged (repeatable)
        #[arg(long = "ack")]
        acknowledged: Vec<String>,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Print the CHOA plagiocephaly severity scale
    Choa {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print interpolated reference percentiles at an age
    Curve {
        /// Metric: head-circumference or cephalic-index
        #[arg(long, value_parser = ["head-circumference", "cephalic-index"])]
        metric: String,

        /// Sex: m or f (required for head-circumference)
        #[arg(long)]
        sex: Option<String>,

        /// Age in months
        #[arg(long)]
        age: f64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn assess_requires_age_or_birth_date() {
        let base = [
            "cranio", "assess", "--length", "140", "--width", "110", "--diag-d", "130",
            "--diag-e", "120",
        ];
        assert!(Cli::try_parse_from(base).is_err());
        let with_age = base.iter().copied().chain(["--age-months", "6"]);
        assert!(Cli::try_parse_from(with_age).is_ok());
        let both = base
            .iter()
            .copied()
            .chain(["--age-months", "6", "--birth-date", "2024-01-01"]);
        assert!(Cli::try_parse_from(both).is_err());
    }

    #[test]
    fn tasks_collects_repeated_acks() {
        let cli = Cli::try_parse_from([
            "cranio", "tasks", "r.json", "--ack", "a:2024-01-01", "--ack", "b:2024-01-02",
        ])
        .unwrap();
        match cli.command {
            Commands::Tasks { acknowledged, .. } => assert_eq!(acknowledged.len(), 2),
            _ => panic!("expected tasks"),
        }
    }

    #[test]
    fn curve_rejects_unknown_metric() {
        assert!(Cli::try_parse_from(["cranio", "curve", "--metric", "weight", "--age", "3"]).is_err());
    }
}
