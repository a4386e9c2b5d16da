// src/cli/mod.rs
// CLI argument parsing module for geneconv-viz
// Contains the Cli struct and related logic

use clap::Parser;
use geneconv_viz::coverage::{DEFAULT_MIN_LENGTH, DEFAULT_P_THRESHOLD, FragmentFilter};
use geneconv_viz::plotting::stats::{DEFAULT_TAIL_LEN, DuplicationRegion};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "geneconv-viz")]
#[command(about = "Visualize GENECONV coverage hotspots.", long_about = None)]
pub struct Cli {
    /// Path to raw GENECONV output file
    pub input: PathBuf,

    /// Duplication start coordinate
    #[arg(long = "start")]
    pub start: u64,

    /// Duplication end coordinate
    #[arg(long = "end")]
    pub end: u64,

    /// Output image name
    #[arg(short = 'o', long = "out", default_value = "geneconv_plot.png")]
    pub out: PathBuf,

    /// P-value threshold (fragments need SimP strictly below it)
    #[arg(long = "p", default_value_t = DEFAULT_P_THRESHOLD)]
    pub p_threshold: f64,

    /// Min fragment length
    #[arg(long = "minlen", default_value_t = DEFAULT_MIN_LENGTH)]
    pub min_length: u64,

    /// Length of the duplication tail highlighted separately
    #[arg(long = "tail", default_value_t = DEFAULT_TAIL_LEN)]
    pub tail_len: u64,

    /// Use SVG output format for the plot instead of PNG
    #[arg(long = "svg")]
    pub svg_output: bool,

    /// Color theme for the plot [classic, latte, frappe, nord, gruvbox]
    #[arg(long = "theme", default_value = "classic")]
    pub theme: String,

    /// Skip plotting (statistics and reports only)
    #[arg(long = "no-plot")]
    pub skip_plotting: bool,

    /// Write per-position coverage as TSV to this path
    #[arg(long = "coverage-output")]
    pub coverage_output: Option<PathBuf>,

    /// Write a tab-separated run summary to this path
    #[arg(long = "summary")]
    pub summary_output: Option<PathBuf>,

    /// Verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn filter(&self) -> FragmentFilter {
        FragmentFilter {
            p_threshold: self.p_threshold,
            min_length: self.min_length,
        }
    }

    pub fn region(&self) -> DuplicationRegion {
        DuplicationRegion::new(self.start, self.end)
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }
}
