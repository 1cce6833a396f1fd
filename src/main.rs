//! Product Wizard terminal entry point
//!
//! Loads configuration and the catalog, then runs one wizard session on
//! stdin/stdout. Logs go to stderr.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use product_wizard::adapters::terminal::{self, CommandError, TerminalCommand};
use product_wizard::adapters::{FileCatalogSource, TokioAdvanceScheduler};
use product_wizard::application::WizardSessionHandler;
use product_wizard::config::{AppConfig, ConfigError, LogFormat, LoggingConfig, ValidationError};
use product_wizard::domain::selection::Answer;
use product_wizard::domain::wizard::{AdvanceMode, WizardError, WizardSnapshot, WizardStatus};
use product_wizard::ports::{CatalogError, CatalogSource};

/// Product Wizard - find a product by answering a few questions
#[derive(Debug, Parser)]
#[command(name = "product-wizard")]
#[command(version, about, long_about = None)]
struct Args {
    /// Catalog file (JSON or YAML); overrides PRODUCT_WIZARD__CATALOG__PATH
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Pre-filled answer, repeatable (e.g. --set skinType=oily)
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_prefill)]
    prefill: Vec<(String, String)>,

    /// Wait for an explicit "n" after every answer
    #[arg(long)]
    manual: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Wizard(#[from] WizardError),

    #[error("Terminal IO failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to install logger: {0}")]
    Logger(String),
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), CliError> {
    let mut config = AppConfig::load()?;
    if args.manual {
        config.wizard.advance_mode = AdvanceMode::Manual;
    }
    config.validate()?;
    init_tracing(&config.logging)?;

    let path = config.catalog.resolve(args.catalog.as_deref())?;
    let catalog = FileCatalogSource::new(path).load().await?;
    info!(
        path = %path.display(),
        mode = ?config.wizard.advance_mode,
        "starting wizard"
    );

    let handler = WizardSessionHandler::new(
        Arc::new(catalog),
        config.wizard.advance_mode,
        config.wizard.timing(),
        Arc::new(TokioAdvanceScheduler::new()),
    );
    let mut updates = handler.subscribe();
    handler.start(args.prefill).await?;

    println!("{}\n", terminal::HELP);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = updates.borrow_and_update().clone();
                show(&handler, &snapshot).await;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match line.parse::<TerminalCommand>() {
                    Ok(TerminalCommand::Quit) => break,
                    Ok(command) => {
                        if let Err(e) = dispatch(&handler, command).await {
                            println!("! {e}");
                        }
                    }
                    Err(CommandError::Empty) => {}
                    Err(e) => println!("! {e}"),
                }
            }
        }
    }

    Ok(())
}

#[derive(Debug, Error)]
enum DispatchError {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error(transparent)]
    Wizard(#[from] WizardError),
}

async fn dispatch(
    handler: &WizardSessionHandler,
    command: TerminalCommand,
) -> Result<(), DispatchError> {
    match command {
        TerminalCommand::Next => {
            handler.next().await?;
        }
        TerminalCommand::Back => {
            handler.back().await?;
        }
        TerminalCommand::Restart => {
            handler.restart().await?;
        }
        TerminalCommand::Help => println!("{}", terminal::HELP),
        TerminalCommand::Quit => {}
        TerminalCommand::Choose(_) | TerminalCommand::Text(_) => {
            let snapshot = handler.snapshot().await;
            let view = snapshot.active_question.as_ref();
            let values = command.chosen_values(view)?;
            let multi_select = view.is_some_and(|v| v.multi_select);

            if multi_select {
                for value in &values {
                    handler.toggle(value).await?;
                }
            } else if let Some(value) = values.first() {
                handler.answer(Answer::parse(value)).await?;
            }
        }
    }
    Ok(())
}

async fn show(handler: &WizardSessionHandler, snapshot: &WizardSnapshot) {
    if snapshot.status == WizardStatus::Exhausted {
        println!("\n{}", terminal::render_results(&handler.results().await));
    } else {
        println!("\n{}", terminal::render_snapshot(snapshot));
    }
}

fn init_tracing(logging: &LoggingConfig) -> Result<(), CliError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .map_err(|e| CliError::Logger(e.to_string()))?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = match logging.log_format()? {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
    installed.map_err(|e| CliError::Logger(e.to_string()))
}

fn parse_prefill(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .filter(|(key, _)| !key.is_empty())
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))
}
