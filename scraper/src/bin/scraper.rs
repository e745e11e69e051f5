use clap::Parser;
use log::error;
use standings_scraper::batch;
use standings_scraper::cli::{init_logging, ConfigArgs};
use std::path::PathBuf;
use std::process::ExitCode;

/// Scrape yearly team standings into a CSV dataset.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,

    /// Destination CSV (default: data/{league}_standings_{min}_to_{max}.csv)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write the per-year outcome report as JSON
    #[arg(long)]
    report: Option<PathBuf>,

    /// Dedupe and sort the batch before writing
    #[arg(long)]
    clean: bool,
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let mut config = match cli.config.load() {
        Ok(config) => config,
        Err(e) => {
            error!("{:#}", anyhow::Error::from(e));
            return ExitCode::FAILURE;
        }
    };
    if cli.output.is_some() {
        config.output = cli.output;
    }
    if cli.report.is_some() {
        config.report = cli.report;
    }
    config.clean |= cli.clean;

    match batch::run(&config) {
        Ok(summary) => {
            println!("{}", summary.report);
            match summary.output {
                Some(path) => {
                    println!("Saved {} records to {}", summary.records.len(), path.display());
                    ExitCode::SUCCESS
                }
                None => ExitCode::FAILURE,
            }
        }
        Err(e) => {
            error!("{:#}", anyhow::Error::from(e));
            ExitCode::FAILURE
        }
    }
}
