use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use platform_obs::{ObsConfig, init_tracing};
use products_hr::{ConsoleLog, Roster};
use roster_cli::{DisplayFormat, Prompter, RosterConfig, Shell, config::parse_capacity};

#[derive(Parser, Debug)]
#[command(name = "roster", version, about = "In-memory employee roster manager")]
struct Cli {
    /// Roster capacity (2-5). Falls back to ROSTER_CAPACITY, then a prompt.
    #[arg(long, value_parser = capacity_arg)]
    capacity: Option<usize>,
    /// Output format for the employee listing.
    #[arg(long, value_enum)]
    format: Option<DisplayFormat>,
    /// Tracing filter, e.g. `info` or `products_hr=debug`.
    #[arg(long)]
    log_level: Option<String>,
}

fn capacity_arg(raw: &str) -> Result<usize, String> {
    parse_capacity(raw).map_err(|err| format!("{err:#}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(ObsConfig {
        env_filter: cli.log_level,
        ..ObsConfig::default()
    })?;
    let config = RosterConfig::load()?;
    let format = cli.format.unwrap_or(config.format);

    let stdin = io::stdin();
    let mut prompt = Prompter::new(stdin.lock(), io::stdout());
    let capacity = match cli.capacity.or(config.capacity) {
        Some(capacity) => capacity,
        None => match prompt.ask_capacity().context("failed to read roster capacity")? {
            Some(capacity) => capacity,
            None => {
                tracing::info!("input closed before a capacity was chosen");
                return Ok(());
            }
        },
    };

    let roster = Roster::new(capacity, Box::new(ConsoleLog::stdout()))?;
    tracing::debug!(capacity, ?format, "roster created");
    Shell::new(roster, prompt, format).run()
}
