mod cli;
mod config;
mod logging;
mod render;

use std::process;

use anyhow::Result;
use clap::Parser;
use sizhu_base::{EarthlyBranch, Pillar, four_pillars, hour_branch_offset, ten_god, year_index};
use sizhu_chart::chart_for_moment;
use tracing::info_span;

use crate::cli::{Cli, Command, MomentArgs};
use crate::config::{OutputFormat, SizhuConfig};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Chart(args) => {
            let _cmd = info_span!("chart").entered();
            let (format, config) = resolve(&args)?;
            let report = chart_for_moment(&args.date, &config.chart);
            match format {
                OutputFormat::Text => print!("{}", render::chart_text(&report)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            }
        }
        Command::Pillars(args) => {
            let _cmd = info_span!("pillars").entered();
            let (format, _) = resolve(&args)?;
            let pillars = four_pillars(&args.date);
            match format {
                OutputFormat::Text => print!("{}", render::pillars_text(&pillars)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&pillars)?),
            }
        }
        Command::Strengths(args) => {
            let _cmd = info_span!("strengths").entered();
            let (format, config) = resolve(&args)?;
            let report = chart_for_moment(&args.date, &config.chart);
            match format {
                OutputFormat::Text => print!("{}", render::strengths_text(&report)),
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "strengths": report.strengths,
                        "ranked": report.strengths.ranked(),
                        "weakest": report.weakest,
                        "strongest": report.strongest,
                        "balance": report.balance,
                    }))?
                ),
            }
        }
        Command::YearPillar { year } => {
            let pillar = Pillar::from_index(year_index(year));
            println!(
                "{year}: {pillar} - {} {}, cycle {}/60",
                pillar.stem.english(),
                pillar.branch.animal(),
                pillar.sexagenary_ordinal()
            );
        }
        Command::HourBranch { hour } => {
            anyhow::ensure!(hour < 24, "hour out of range: {hour} (must be 0..=23)");
            let branch = EarthlyBranch::at(hour_branch_offset(hour) + 1);
            let meridian = branch.meridian();
            println!(
                "{hour:02}:00 -> {branch} ({}) {} - {} meridian ({}), horary point {}",
                branch.animal(),
                branch.window_label(),
                meridian.name(),
                meridian.code(),
                meridian.horary_point()
            );
        }
        Command::Relations { element } => print!("{}", render::relations_text(element)),
        Command::TenGod { day_master, other } => {
            let god = ten_god(day_master, other);
            println!(
                "{other} relative to Day Master {day_master}: {} {} ({}) - {}",
                god.chinese(),
                god.english(),
                god.pinyin(),
                god.description()
            );
        }
    }
    Ok(())
}

/// Load the config file and apply command-line overrides.
fn resolve(args: &MomentArgs) -> Result<(OutputFormat, SizhuConfig)> {
    let config = SizhuConfig::load(&args.config)?;
    let format = args.format.unwrap_or(config.output.format);
    Ok((format, config))
}
