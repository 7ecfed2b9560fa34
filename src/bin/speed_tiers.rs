//! Speed Tier CLI
//!
//! Builds level 50 speed tiers for every creature and writes a master table
//! and a grouped singles table as CSV.
//!
//! Usage:
//!   cargo run --bin speed-tiers -- \
//!     --singles singles_tierlist.txt \
//!     --alt-forms alternate_forms.json \
//!     --output speedtiers

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use tracing_subscriber::prelude::*;
use xenowiki::tools::speed::{base_speeds, load_alternate_forms, load_tier_list, SpeedTiers};
use xenowiki::{Config, GameData, Result, WikiError};

struct Args {
    singles: Option<PathBuf>,
    alt_forms: Option<PathBuf>,
    output_dir: PathBuf,
}

fn parse_args() -> Args {
    let mut parsed = Args {
        singles: None,
        alt_forms: None,
        output_dir: PathBuf::from("speedtiers"),
    };
    let args: Vec<String> = env::args().collect();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--singles" => {
                if i + 1 < args.len() {
                    parsed.singles = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--alt-forms" => {
                if i + 1 < args.len() {
                    parsed.alt_forms = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--output" => {
                if i + 1 < args.len() {
                    parsed.output_dir = PathBuf::from(&args[i + 1]);
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!(
                    "Usage: speed-tiers [--singles <FILE>] [--alt-forms <JSON>] [--output <DIR>]"
                );
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }
    parsed
}

fn run(args: &Args) -> Result<()> {
    let config = Config::load()?;
    let data = GameData::load(&config)?;

    let mut bases = base_speeds(data.lookup(), data.records())?;
    if let Some(path) = &args.alt_forms {
        bases.extend(load_alternate_forms(path)?);
    }
    let singles = match &args.singles {
        Some(path) => load_tier_list(path)?,
        None => Vec::new(),
    };
    tracing::info!(creatures = bases.len(), singles = singles.len(), "building speed tiers");

    let tiers = SpeedTiers::build(&bases, &singles);
    fs::create_dir_all(&args.output_dir).map_err(|e| WikiError::io(&args.output_dir, e))?;
    let master = args.output_dir.join("master.csv");
    let singles_path = args.output_dir.join("singles.csv");
    SpeedTiers::write_csv(&tiers.master, &master)?;
    SpeedTiers::write_csv(&tiers.singles, &singles_path)?;
    tracing::info!(master = %master.display(), singles = %singles_path.display(), "wrote speed tiers");
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "xenowiki=info,speed_tiers=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run(&parse_args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "speed tier generation failed");
            ExitCode::FAILURE
        }
    }
}
