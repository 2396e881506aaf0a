use clap::Parser;
use std::path::PathBuf;

use compliance_scan::application::dto::{OutputFormat, ViewMode};

/// Show compliance posture and re-scan compliance standards on demand
#[derive(Parser, Debug)]
#[command(name = "compliance-scan")]
#[command(version)]
#[command(about = "Show compliance posture and re-scan compliance standards on demand", long_about = None)]
pub struct Args {
    /// Catalogue file (.yml, .yaml, .json or .toml); overrides the config file
    #[arg(short, long, value_name = "FILE")]
    pub catalogue: Option<PathBuf>,

    /// Config file (defaults to ./compliance-scan.config.yml when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Re-scan the item with this id before rendering.
    /// Can be specified multiple times: -s cis-1 -s soc2
    #[arg(short, long = "scan", value_name = "ID")]
    pub scan: Vec<String>,

    /// Layout: cards or table
    #[arg(long, value_name = "MODE")]
    pub view: Option<ViewMode>,

    /// Expand the item with this display name.
    /// Can be specified multiple times; naming an item twice collapses it again
    #[arg(short, long = "expand", value_name = "NAME")]
    pub expand: Vec<String>,

    /// Expand every item
    #[arg(long, conflicts_with = "expand")]
    pub expand_all: bool,

    /// Output format: text or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Allow scans of different items to run at the same time
    #[arg(long)]
    pub per_item: bool,

    /// Give up on a scan after this many seconds
    #[arg(short, long, value_name = "SECS")]
    pub timeout: Option<f64>,

    /// Exit with code 1 when any item is in the Critical tier
    #[arg(long)]
    pub fail_on_critical: bool,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,

    /// Suppress scan progress output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
