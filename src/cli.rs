use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "heat-sentinel",
    about = "Heatwave risk dashboard for the taluks of Tumakuru district",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Check config file [default: ./.heat-sentinel/config.toml, fallback ~/.config/heat-sentinel/config.toml]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Report format
    #[arg(long, global = true, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Only print the score line(s)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the risk profile for one taluk
    Show {
        /// Taluk name (case-insensitive)
        taluk: String,

        /// Include the per-driver weight/contribution breakdown
        #[arg(short, long)]
        verbose: bool,
    },

    /// District-wide snapshot: every taluk with score and band
    Overview,

    /// Compare two or three taluks side by side
    Compare {
        /// Taluk names (case-insensitive)
        #[arg(num_args = 2..=3, value_name = "TALUK")]
        taluks: Vec<String>,
    },

    /// What-if mitigation: adjust drivers and rescore
    Simulate {
        /// Taluk name (case-insensitive)
        taluk: String,

        /// Green cover gained (percentage points)
        #[arg(long = "green-cover", default_value_t = 0.0, value_name = "PTS")]
        green_cover_delta: f64,

        /// Traffic index shed
        #[arg(long = "traffic", default_value_t = 0.0, value_name = "PTS")]
        traffic_delta: f64,

        /// Air quality index lowered (lower is better)
        #[arg(long = "air-quality", default_value_t = 0.0, value_name = "PTS")]
        aiq_delta: f64,
    },

    /// Emit the geo-referenced markers a map overlay consumes
    Map,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}
