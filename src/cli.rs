// src/cli.rs
use std::{io, path::PathBuf, time::Duration};

use clap::Parser;
use log::LevelFilter;

use crate::config::{consts::DEFAULT_ATTEMPTS, AppOptions};
use crate::progress::ConsoleProgress;

/// Scrape an IMDb actor's filmography into JSON and XLSX.
///
/// Without --id the actor id is asked for interactively and checked against
/// the local copy of name.basics (downloaded on first run).
#[derive(Debug, Parser)]
#[command(name = "filmo_scrape", version, about)]
pub struct Args {
    /// Actor id (e.g. nm0000158); skips the prompt.
    #[arg(long)]
    pub id: Option<String>,

    /// Directory for data.tsv and name.basics.tsv.gz [default: next to the executable]
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Archive URL used when no local reference data exists.
    #[arg(long, value_name = "URL")]
    pub dataset_url: Option<String>,

    /// Site root the profile URL and film links are built from.
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Where the .json and .xlsx files go.
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// Skip the JSON export.
    #[arg(long)]
    pub no_json: bool,

    /// Skip the XLSX export.
    #[arg(long)]
    pub no_xlsx: bool,

    /// Tries per network request (1 = no retry).
    #[arg(long, default_value_t = DEFAULT_ATTEMPTS)]
    pub attempts: u32,

    /// Request timeout in seconds [default: none]
    #[arg(long, value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Debug log file [default: .store/debug.log]
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// off, error, warn, info, debug, trace
    #[arg(long, default_value = "info")]
    pub log_level: LevelFilter,
}

impl Args {
    /// Map flags onto options; anything not given keeps its default.
    pub fn to_options(&self) -> AppOptions {
        let mut opts = AppOptions::default();

        if let Some(dir) = &self.data_dir {
            opts.reference.data_dir = dir.clone();
        }
        if let Some(url) = &self.dataset_url {
            opts.reference.dataset_url = url.clone();
        }

        opts.scrape.actor_id = self.id.clone();
        if let Some(url) = &self.base_url {
            opts.scrape.base_url = url.clone();
        }
        opts.scrape.attempts = self.attempts;
        opts.scrape.timeout = self.timeout_secs.map(Duration::from_secs);

        opts.export.out_dir = self.out_dir.clone();
        opts.export.json = !self.no_json;
        opts.export.xlsx = !self.no_xlsx;

        opts
    }
}

/// Parse args, run the pipeline against stdin/stdout, print the summary.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let log_path = args.log_file.clone().unwrap_or_else(crate::logger::default_log_path);
    crate::logger::init(&log_path, args.log_level)?;

    let opts = args.to_options();
    let stdin = io::stdin();
    let mut progress = ConsoleProgress;
    let summary = crate::runner::run(&opts, stdin.lock(), io::stdout(), Some(&mut progress))?;

    for line in crate::runner::summary_lines(&summary) {
        println!("{line}");
    }
    Ok(())
}
