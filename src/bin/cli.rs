use inquire::error::InquireError;
use inquire::Text;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing_subscriber::prelude::*;
use xenowiki::{Config, GameData, WikiPage};

const PROMPT: &str = "Input the name of the pokemon: ";

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "xenowiki=info,wiki_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "failed to load configuration");
            return ExitCode::FAILURE;
        }
    };
    let data = match GameData::load(&config) {
        Ok(data) => data,
        Err(e) => {
            tracing::error!(error = %e, "failed to load game data");
            return ExitCode::FAILURE;
        }
    };
    let page = WikiPage::new(&data);

    loop {
        println!();
        let Some(input) = read_name() else {
            return ExitCode::SUCCESS;
        };
        let internal_name = input.trim().to_uppercase();
        if internal_name.is_empty() {
            continue;
        }

        match page.generate(&internal_name) {
            Ok(lines) => {
                let stdout = io::stdout();
                let mut out = stdout.lock();
                for line in lines {
                    writeln!(out, "{line}").ok();
                }
            }
            Err(e) => {
                tracing::error!(pokemon = %internal_name, error = %e, "could not generate page");
            }
        }
    }
}

/// Prompts for the next identifier. `None` ends the session (Ctrl-C, Esc or
/// end of input).
fn read_name() -> Option<String> {
    match Text::new(PROMPT).prompt() {
        Ok(name) => Some(name),
        // Piped input or a terminal that refuses raw mode.
        Err(InquireError::NotTTY | InquireError::IO(_)) => read_name_from_stdin(),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => None,
        Err(e) => {
            tracing::error!(error = %e, "prompt failed");
            None
        }
    }
}

fn read_name_from_stdin() -> Option<String> {
    print!("{PROMPT}");
    io::stdout().flush().ok();
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line),
        Err(e) => {
            tracing::error!(error = %e, "failed to read from stdin");
            None
        }
    }
}
