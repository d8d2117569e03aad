use std::{
    io::{IsTerminal, Write},
    process::ExitCode,
};

use clap::Parser;
use migration::{Migrator, MigratorTrait};

use crate::{
    cli::{Cli, Command},
    error::{AppError, Result},
    render::Theme,
    settings::Settings,
};

mod cli;
mod commands;
mod error;
mod input;
mod menu;
mod render;
mod settings;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_failure(&err, &mut std::io::stderr());
            ExitCode::FAILURE
        }
    }
}

/// Writes the one line shown for a failed run.
fn report_failure<W: Write>(err: &AppError, out: &mut W) {
    let _ = writeln!(out, "error: {err}");
}

async fn run(mut cli: Cli) -> Result<()> {
    let settings = settings::load(&cli)?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "tally={level},engine={level}",
            level = settings.log_level
        ))
        .with_writer(std::io::stderr)
        .init();

    let engine = connect(&settings).await?;
    let theme = Theme::for_output(&settings, std::io::stdout().is_terminal());
    let today = chrono::Local::now().date_naive();

    match cli.command.take() {
        None | Some(Command::Menu) => {
            let stdin = std::io::stdin();
            menu::Menu::new(&engine, &theme, today, stdin.lock(), std::io::stdout())
                .run()
                .await
        }
        Some(command) => {
            let mut stdout = std::io::stdout().lock();
            commands::run(&engine, command, &theme, today, &mut stdout).await
        }
    }
}

async fn connect(settings: &Settings) -> Result<engine::Engine> {
    tracing::info!(database_url = %settings.database_url, "opening database");
    let database = sea_orm::Database::connect(settings.database_url.as_str()).await?;
    Migrator::up(&database, None).await?;

    Ok(engine::Engine::builder().database(database).build().await?)
}
