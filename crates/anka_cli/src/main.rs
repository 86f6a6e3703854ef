mod cli;
mod commands;
mod config;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::AnkaConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = AnkaConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Reduce {
            n,
            matrix,
            preserve,
        } => commands::reduce(n, matrix, preserve),

        Command::Profile { person, today } => {
            let store = config.content_store()?;
            commands::profile(person.date, &person.name, today.resolve(), &store)?;
        }

        Command::LifePath { date } => {
            let store = config.content_store()?;
            commands::life_path_report(&date, &store);
        }

        Command::Karmic { person } => {
            let store = config.content_store()?;
            commands::karmic(&person.date, &person.name, &store)?;
        }

        Command::Personal { date, today } => {
            let store = config.content_store()?;
            commands::personal(&date, today.resolve(), &store);
        }

        Command::Compat {
            date_a,
            date_b,
            relationship,
        } => {
            let store = config.content_store()?;
            commands::compat(&date_a, &date_b, relationship.as_deref(), &config, &store)?;
        }

        Command::Matrix { date } => {
            let store = config.content_store()?;
            commands::matrix(&date, &store)?;
        }

        Command::Tree { date, top } => {
            let store = config.content_store()?;
            commands::tree(&date, top, &config, &store);
        }
    }
    Ok(())
}
