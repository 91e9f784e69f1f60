use anyhow::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::geo::MapMarker;
use crate::models::{Assessment, Driver, RiskBand};
use crate::risk::score::contributions;

fn header() {
    println!("\n {} v{}", "heat-sentinel".bold(), env!("CARGO_PKG_VERSION"));
}

fn band_badge(band: RiskBand, score: u8) -> String {
    let (r, g, b) = band.rgb();
    format!("{} risk • {}%", band, score).truecolor(r, g, b).bold().to_string()
}

fn band_cell(band: RiskBand) -> Cell {
    let (r, g, b) = band.rgb();
    Cell::new(band.to_string()).fg(Color::Rgb { r, g, b })
}

fn print_anomalies(assessment: &Assessment) {
    for anomaly in &assessment.anomalies {
        println!(
            " {} {}: {} = {} outside plausible range {}..{}",
            "⚠".yellow(),
            assessment.taluk,
            anomaly.driver,
            anomaly.value,
            anomaly.min,
            anomaly.max
        );
    }
}

/// Render the risk card for a single taluk.
pub fn render_show(assessment: &Assessment, verbose: bool, quiet: bool) -> Result<()> {
    if quiet {
        println!("{}: {}% ({})", assessment.taluk, assessment.score, assessment.band);
        return Ok(());
    }

    header();
    println!(" ┌────────────────────────────────────────────────────┐");
    println!(" │  {:<48}  │", assessment.taluk.to_uppercase().bold());
    println!(" │  {:<60}  │", band_badge(assessment.band, assessment.score));
    println!(" └────────────────────────────────────────────────────┘");
    println!(" {}\n", assessment.advice.italic());

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(if verbose {
            vec![
                Cell::new("Driver").add_attribute(Attribute::Bold),
                Cell::new("Value").add_attribute(Attribute::Bold),
                Cell::new("Weight").add_attribute(Attribute::Bold),
                Cell::new("Contribution").add_attribute(Attribute::Bold),
            ]
        } else {
            vec![
                Cell::new("Driver").add_attribute(Attribute::Bold),
                Cell::new("Value").add_attribute(Attribute::Bold),
            ]
        });

    let weighted = contributions(&assessment.drivers);
    for ((driver, value), (weight, contribution)) in assessment.drivers.iter().zip(weighted) {
        let mut row = vec![
            Cell::new(driver.label()),
            Cell::new(format!("{:.0}", value)).set_alignment(CellAlignment::Right),
        ];
        if verbose {
            row.push(Cell::new(format!("{:+.1}", weight)).set_alignment(CellAlignment::Right));
            row.push(
                Cell::new(format!("{:+.1}", contribution)).set_alignment(CellAlignment::Right),
            );
        }
        table.add_row(row);
    }
    println!("{}", table);

    print_anomalies(assessment);
    Ok(())
}

/// Render the district-wide snapshot, highest risk first.
pub fn render_overview(assessments: &[Assessment], quiet: bool) -> Result<()> {
    let mut sorted: Vec<&Assessment> = assessments.iter().collect();
    sorted.sort_by(|a, b| b.score.cmp(&a.score));

    if quiet {
        for a in &sorted {
            println!("{}: {}% ({})", a.taluk, a.score, a.band);
        }
        return Ok(());
    }

    header();
    println!(" District-wide risk snapshot\n");

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Taluk").add_attribute(Attribute::Bold),
            Cell::new("Heatwave %").add_attribute(Attribute::Bold),
            Cell::new("Risk band").add_attribute(Attribute::Bold),
        ]);

    for a in &sorted {
        table.add_row(vec![
            Cell::new(&a.taluk),
            Cell::new(a.score.to_string()).set_alignment(CellAlignment::Right),
            band_cell(a.band),
        ]);
    }
    println!("{}", table);

    for a in &sorted {
        print_anomalies(a);
    }
    Ok(())
}

/// Render a side-by-side comparison of two or three taluks.
pub fn render_compare(assessments: &[Assessment], quiet: bool) -> Result<()> {
    if quiet {
        for a in assessments {
            println!("{}: {}% ({})", a.taluk, a.score, a.band);
        }
        return Ok(());
    }

    header();
    println!(" Taluk comparison\n");

    for a in assessments {
        println!("  {:<22} {}", a.taluk.bold(), band_badge(a.band, a.score));
    }
    println!();

    let mut table = Table::new();
    let mut head = vec![Cell::new("Driver").add_attribute(Attribute::Bold)];
    for a in assessments {
        head.push(Cell::new(&a.taluk).add_attribute(Attribute::Bold));
    }
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(head);

    for driver in Driver::ALL {
        let mut row = vec![Cell::new(driver.label())];
        for a in assessments {
            row.push(
                Cell::new(format!("{:.0}", a.drivers.get(driver)))
                    .set_alignment(CellAlignment::Right),
            );
        }
        table.add_row(row);
    }
    println!("{}", table);

    for a in assessments {
        print_anomalies(a);
    }
    Ok(())
}

/// Render a what-if scenario: current vs adjusted risk.
pub fn render_simulate(current: &Assessment, scenario: &Assessment, quiet: bool) -> Result<()> {
    if quiet {
        println!("{} -> {}", current.score, scenario.score);
        return Ok(());
    }

    header();
    println!(" What-if mitigation for {}\n", current.taluk.bold());
    println!("  Current    {}", band_badge(current.band, current.score));
    println!("  Scenario   {}", band_badge(scenario.band, scenario.score));

    let saved = i16::from(current.score) - i16::from(scenario.score);
    match saved {
        s if s > 0 => println!("\n  {} risk reduced by {} points", "✓".green(), s),
        s if s < 0 => println!("\n  {} risk increased by {} points", "⚠".yellow(), -s),
        _ => println!("\n  no change in risk"),
    }
    println!("\n {}", scenario.advice.italic());
    Ok(())
}

/// Render the map-marker records as a table.
pub fn render_map(markers: &[MapMarker], quiet: bool) -> Result<()> {
    if quiet {
        for m in markers {
            println!("{}: {}% @ {:.4},{:.4}", m.taluk, m.score, m.latitude, m.longitude);
        }
        return Ok(());
    }

    header();
    println!(" Map markers (consumed by the district map overlay)\n");

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Taluk").add_attribute(Attribute::Bold),
            Cell::new("Lat").add_attribute(Attribute::Bold),
            Cell::new("Lon").add_attribute(Attribute::Bold),
            Cell::new("Temp (°C)").add_attribute(Attribute::Bold),
            Cell::new("Heatwave %").add_attribute(Attribute::Bold),
            Cell::new("Band").add_attribute(Attribute::Bold),
            Cell::new("Radius").add_attribute(Attribute::Bold),
        ]);

    for m in markers {
        table.add_row(vec![
            Cell::new(m.taluk),
            Cell::new(format!("{:.4}", m.latitude)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.4}", m.longitude)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.0}", m.temperature)).set_alignment(CellAlignment::Right),
            Cell::new(m.score.to_string()).set_alignment(CellAlignment::Right),
            band_cell(m.band),
            Cell::new(format!("{:.1}", m.radius)).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{}", table);
    Ok(())
}
