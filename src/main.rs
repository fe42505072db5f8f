use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use scorebook::config::Config;
use scorebook::gradebook::Gradebook;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about)]
struct CLI {
    #[arg(long)]
    roster: PathBuf,

    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    Stats,

    Split,

    FilterSection {
        #[arg(long)]
        name: String,
    },

    FilterAverage {
        #[arg(long)]
        lo: f64,

        #[arg(long)]
        hi: f64,
    },

    Clean,
}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run_cli() {
        log::error!("{error:#?}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let args = CLI::parse();
    log::info!("{args:#?}");

    let cfg = match &args.config {
        Some(file) => Config::from_file(file).context("failed to construct cfg")?,
        None => Config::default(),
    };

    let book = Gradebook::new(args.roster, cfg);

    match args.command {
        Command::Stats => book.report_stats()?,
        Command::Split => book.split(),
        Command::FilterSection { name } => book.report_section(&name)?,
        Command::FilterAverage { lo, hi } => book.report_average_band(lo, hi)?,
        Command::Clean => book.clean()?,
    }

    Ok(())
}
