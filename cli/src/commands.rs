pub mod classify;
pub mod generate;
pub mod history;
pub mod prompts;
pub mod year;

use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand};
use sacristan_common::liturgy::celebration::Celebration;
use sacristan_common::liturgy::date::CalendarDate;
use sacristan_common::liturgy::tradition::Tradition;

#[derive(Parser)]
#[command(name = "sacristan")]
#[command(about = "Liturgical calendar and Mass booklet drafting for the sacristy.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Less decoration; repeat (-qq) to print results only
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Skip the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Where history and preferences are kept; defaults to the user data directory
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify a day of the liturgical calendar
    #[command(alias = "c")]
    Classify {
        /// Day to classify (YYYY-MM-DD); today when omitted
        date: Option<CalendarDate>,
    },
    /// Show the anchor days of a calendar year
    #[command(alias = "y")]
    Year { year: i32 },
    /// Print the structure and readings prompts for a celebration
    #[command(alias = "p")]
    Prompts {
        #[command(flatten)]
        target: Target,
    },
    /// Draft a complete liturgy through an external completion command
    #[command(alias = "g")]
    Generate {
        #[command(flatten)]
        target: Target,

        /// Command that reads a prompt on stdin and writes the answer to stdout
        #[arg(short, long)]
        generator: String,

        /// Merge even if the readings cannot be generated
        #[arg(long)]
        best_effort: bool,

        /// Attempts per call for transient failures
        #[arg(long, default_value_t = 3)]
        attempts: u32,

        /// Write the document here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List recently drafted documents
    #[command(alias = "h")]
    History {
        /// Print the full text of the entry at this position
        #[arg(short, long)]
        show: Option<usize>,
    },
}

#[derive(Args)]
pub struct Target {
    /// Reference day (YYYY-MM-DD); today when omitted
    #[arg(short, long)]
    pub date: Option<CalendarDate>,

    /// today | next-sunday; the last choice is remembered
    #[arg(short, long)]
    pub celebration: Option<Celebration>,

    /// roman_catholic | anglican | ordinariate | tridentine; the last choice is remembered
    #[arg(short, long)]
    pub tradition: Option<Tradition>,
}

impl Target {
    /// The day the celebration is counted from.
    pub fn reference_date(&self) -> anyhow::Result<CalendarDate> {
        match self.date {
            Some(date) => Ok(date),
            None => today(),
        }
    }
}

pub fn today() -> anyhow::Result<CalendarDate> {
    CalendarDate::from_datetime(&chrono::Local::now()).context("reading today's date")
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn data_dir(&self) -> anyhow::Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => dirs::data_dir()
                .map(|dir| dir.join("sacristan"))
                .context("no user data directory; pass --data-dir"),
        }
    }
}
