//! stat_sheet - Print character statistics and how they were derived

mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use stat_core::{load_sheet, Breakdown, StatSheet};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stat_sheet", version, about = "Show character statistics with a stacking breakdown")]
struct Args {
    /// Sheet file (.toml or .json)
    sheet: PathBuf,

    /// Activate a condition tag (repeatable)
    #[arg(short, long = "condition", value_name = "TAG")]
    conditions: Vec<String>,

    /// Retract a source after loading (repeatable)
    #[arg(long = "without-source", value_name = "NAME")]
    without_sources: Vec<String>,

    /// Only show these selectors (repeatable)
    #[arg(short, long = "stat", value_name = "SELECTOR")]
    stats: Vec<String>,

    /// Print a JSON report instead of text
    #[arg(long)]
    json: bool,

    #[arg(long, default_value = "warn", value_name = "LEVEL")]
    log_level: logging::LevelFilter,
}

/// JSON output
#[derive(Serialize)]
struct Report<'a> {
    character: &'a str,
    conditions: Vec<String>,
    sources: Vec<&'a str>,
    statistics: Vec<Breakdown>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.log_level)?;

    let config = load_sheet(&args.sheet).with_context(|| format!("failed to load {}", args.sheet.display()))?;
    let mut sheet = config.build().context("failed to build sheet")?;

    for name in &args.without_sources {
        if !sheet.is_applied(name) {
            log::warn!("source {:?} is not applied", name);
        }
        sheet.retract_source(name);
    }
    for tag in &args.conditions {
        sheet.add_condition(tag.clone());
    }

    let breakdowns = select_breakdowns(&sheet, &args.stats)?;

    if args.json {
        let report = Report {
            character: &sheet.name,
            conditions: sheet.effective_conditions().into_iter().collect(),
            sources: sheet.applied_sources().collect(),
            statistics: breakdowns,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_text(&sheet, &breakdowns);
    }

    Ok(())
}

fn select_breakdowns(sheet: &StatSheet, selectors: &[String]) -> Result<Vec<Breakdown>> {
    if selectors.is_empty() {
        return Ok(sheet.breakdowns());
    }
    selectors
        .iter()
        .map(|selector| {
            sheet
                .breakdown(selector)
                .with_context(|| format!("unknown statistic {:?}", selector))
        })
        .collect()
}

fn print_text(sheet: &StatSheet, breakdowns: &[Breakdown]) {
    println!("{}", sheet.name);
    let conditions: Vec<String> = sheet.effective_conditions().into_iter().collect();
    if !conditions.is_empty() {
        println!("conditions: {}", conditions.join(", "));
    }
    for breakdown in breakdowns {
        println!();
        println!("{}", breakdown);
    }
}
