//! CLI Argument Parsing
//!
//! Running `payroll` with no arguments starts a full session: pay period,
//! employee entry, run summary, then the report. Every flag is an optional
//! override of the config hierarchy.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::ColorMode;
use crate::domain::value_objects::ReportFilter;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl From<ColorWhen> for ColorMode {
    fn from(when: ColorWhen) -> Self {
        match when {
            ColorWhen::Auto => ColorMode::Auto,
            ColorWhen::Always => ColorMode::Always,
            ColorWhen::Never => ColorMode::Never,
        }
    }
}

/// Payroll data entry and reporting
#[derive(Parser, Debug)]
#[command(name = "payroll")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Payroll history file [default: payroll_data.txt]
    #[arg(long, global = true, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv); logs go to stderr
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show stored records and their totals without entering new ones
    Report {
        /// 'All' or a pay period start date (mm/dd/yyyy); prompted for when omitted
        #[arg(long, value_name = "FILTER", value_parser = parse_filter)]
        from: Option<ReportFilter>,
    },
}

fn parse_filter(value: &str) -> Result<ReportFilter, String> {
    ReportFilter::parse(value).map_err(|_| "expected 'All' or a date in mm/dd/yyyy".to_string())
}
