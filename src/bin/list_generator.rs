//! List Generator CLI
//!
//! Writes the EV yield, ability, base stat and held item drop lists for
//! every creature in the Pokédex table.
//!
//! Usage:
//!   cargo run --bin list-generator -- --output lists

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use tracing_subscriber::prelude::*;
use xenowiki::tools::lists::ListGenerator;
use xenowiki::{Config, GameData};

struct Args {
    output_dir: PathBuf,
}

fn parse_args() -> Args {
    let mut parsed = Args {
        output_dir: PathBuf::from("lists"),
    };
    let args: Vec<String> = env::args().collect();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--output" => {
                if i + 1 < args.len() {
                    parsed.output_dir = PathBuf::from(&args[i + 1]);
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Usage: list-generator [--output <DIR>]");
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }
    parsed
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "xenowiki=info,list_generator=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = parse_args();
    let result = Config::load()
        .and_then(|config| GameData::load(&config))
        .and_then(|data| {
            let generator = ListGenerator::new(data.lookup(), data.records(), data.encounters());
            generator.generate()
        })
        .and_then(|lists| lists.write_to_dir(&args.output_dir));

    match result {
        Ok(paths) => {
            for path in paths {
                tracing::info!(path = %path.display(), "wrote list");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "list generation failed");
            ExitCode::FAILURE
        }
    }
}
