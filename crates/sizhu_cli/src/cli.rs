use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sizhu_base::{Element, HeavenlyStem};
use sizhu_time::BirthMoment;

use crate::config::OutputFormat;

/// Four Pillars (BaZi) chart calculator.
#[derive(Parser)]
#[command(name = "sizhu", version, about = "Four Pillars (BaZi) chart calculator")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Full chart: pillars, strengths, balance, recommendations.
    Chart(MomentArgs),
    /// Four pillars only.
    Pillars(MomentArgs),
    /// Element strength profile with ranking and balance.
    Strengths(MomentArgs),
    /// Year pillar of a CE year.
    YearPillar {
        #[arg(allow_negative_numbers = true)]
        year: i32,
    },
    /// Earthly Branch governing a wall-clock hour.
    HourBranch {
        /// Hour 0-23
        hour: u32,
    },
    /// Wu Xing relations of an element.
    Relations {
        /// Element name (Wood, Fire, Earth, Metal, Water) or character
        element: Element,
    },
    /// Ten God of one stem relative to a Day Master.
    TenGod {
        /// Day Master stem (pinyin, character or ordinal)
        #[arg(long)]
        day_master: HeavenlyStem,
        /// Other stem
        #[arg(long)]
        other: HeavenlyStem,
    },
}

/// Arguments shared by the chart-producing subcommands.
#[derive(clap::Args)]
pub struct MomentArgs {
    /// Local birth moment, YYYY-MM-DDThh:mm
    #[arg(short, long)]
    pub date: BirthMoment,

    /// Override output format from config.
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "sizhu.toml")]
    pub config: PathBuf,
}
