//! `heat-sentinel` — score heatwave risk for Tumakuru taluks and render dashboards.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load the plausibility-check config ([`config::load_config`]).
//! 3. Resolve taluks from the static registry ([`registry`]).
//! 4. Score and classify through the shared engine ([`risk`]).
//! 5. Run driver plausibility checks ([`config::run_checks`]).
//! 6. Render the requested report ([`report`], or JSON via serde).
//! 7. Exit `0` (clean) or `1` (anomalies found under the `error` check action).

mod cli;
mod config;
mod geo;
mod models;
mod registry;
mod report;
mod risk;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use cli::{Cli, Command, ReportFormat};
use config::{load_config, run_checks, CheckAction, Config};
use models::{Assessment, DriverSet};
use risk::Adjustments;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    let mut anomalies_found = false;

    match cli.command {
        Command::Show { ref taluk, verbose } => {
            let taluk = registry::get(taluk)?;
            let assessment = assess(taluk.name, taluk.drivers, &config);
            anomalies_found |= !assessment.anomalies.is_empty();
            match cli.report {
                ReportFormat::Terminal => {
                    report::terminal::render_show(&assessment, verbose, cli.quiet)?;
                }
                ReportFormat::Json => print_json(&assessment)?,
            }
        }

        Command::Overview => {
            let mut assessments: Vec<Assessment> = registry::all()
                .iter()
                .map(|t| assess(t.name, t.drivers, &config))
                .collect();
            anomalies_found |= assessments.iter().any(|a| !a.anomalies.is_empty());
            match cli.report {
                ReportFormat::Terminal => {
                    report::terminal::render_overview(&assessments, cli.quiet)?;
                }
                ReportFormat::Json => {
                    assessments.sort_by(|a, b| b.score.cmp(&a.score));
                    print_json(&assessments)?;
                }
            }
        }

        Command::Compare { ref taluks } => {
            let mut assessments = Vec::with_capacity(taluks.len());
            for name in taluks {
                let taluk = registry::get(name)?;
                assessments.push(assess(taluk.name, taluk.drivers, &config));
            }
            anomalies_found |= assessments.iter().any(|a| !a.anomalies.is_empty());
            match cli.report {
                ReportFormat::Terminal => {
                    report::terminal::render_compare(&assessments, cli.quiet)?;
                }
                ReportFormat::Json => print_json(&assessments)?,
            }
        }

        Command::Simulate { ref taluk, green_cover_delta, traffic_delta, aiq_delta } => {
            let taluk = registry::get(taluk)?;
            let adjustments = Adjustments { green_cover_delta, traffic_delta, aiq_delta };
            let adjusted = risk::simulate(&taluk.drivers, &adjustments);

            let current = assess(taluk.name, taluk.drivers, &config);
            let scenario = assess(taluk.name, adjusted, &config);
            anomalies_found |= !current.anomalies.is_empty();

            match cli.report {
                ReportFormat::Terminal => {
                    report::terminal::render_simulate(&current, &scenario, cli.quiet)?;
                }
                ReportFormat::Json => print_json(&Simulation { current, scenario })?,
            }
        }

        Command::Map => {
            let markers = geo::markers();
            match cli.report {
                ReportFormat::Terminal => report::terminal::render_map(&markers, cli.quiet)?,
                ReportFormat::Json => print_json(&markers)?,
            }
        }
    }

    // Exit code: 1 if anomalies were found and the config escalates them
    if anomalies_found && config.checks.action == CheckAction::Error {
        std::process::exit(1);
    }

    Ok(())
}

/// Score, classify and check one taluk's drivers.
fn assess(name: &str, drivers: DriverSet, config: &Config) -> Assessment {
    let score = risk::score(&drivers);
    let band = risk::classify(score);
    Assessment {
        taluk: name.to_string(),
        drivers,
        score,
        band,
        color: band.color_hex(),
        advice: band.advice(),
        anomalies: run_checks(config, &drivers),
    }
}

/// Current and adjusted assessments for a what-if scenario.
#[derive(Serialize)]
struct Simulation {
    current: Assessment,
    scenario: Assessment,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
