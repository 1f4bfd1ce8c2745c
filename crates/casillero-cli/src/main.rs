mod commands;
mod error;
mod util;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{addresses, clients, quotes, sheet, trackings, Context};
use crate::error::{exit_code_for, report_error};
use casillero_config as config;
use casillero_core::IdentityMatcher;
use casillero_store::{paths, Store};

#[derive(Debug, Parser)]
#[command(name = "casillero", version, about = "casillero CLI")]
struct Cli {
    #[arg(long, global = true)]
    db_path: Option<PathBuf>,
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Look up or register clients
    #[command(subcommand)]
    Client(clients::ClientCommand),
    /// List package trackings
    #[command(subcommand)]
    Tracking(trackings::TrackingCommand),
    /// Show warehouse addresses for a client
    #[command(subcommand)]
    Address(addresses::AddressCommand),
    /// Classify merchandise and record shipping quotes
    #[command(subcommand)]
    Quote(quotes::QuoteCommand),
    /// Read and write raw workbook cells
    #[command(subcommand)]
    Sheet(sheet::SheetCommand),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        db_path,
        config: config_path,
        json,
        verbose: _,
        command,
    } = cli;

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    match config::resolve_config_path(config_path) {
        Ok(path) if path.exists() => debug!(path = %path.display(), "config resolved"),
        Ok(path) => debug!(path = %path.display(), "config missing, using defaults"),
        Err(err) => debug!(error = %err, "config unavailable"),
    }

    let db_path = paths::resolve_db_path(db_path).with_context(|| "resolve workbook path")?;
    debug!(path = %db_path.display(), "workbook path resolved");

    let store = Store::open(&db_path)
        .with_context(|| format!("open workbook {}", db_path.display()))?;
    store.migrate().with_context(|| "run migrations")?;

    let matcher = IdentityMatcher::new(app_config.phones.clone());
    let ctx = Context {
        store: &store,
        json,
        config: &app_config,
        matcher: &matcher,
    };

    match command {
        Command::Client(cmd) => match cmd {
            clients::ClientCommand::Find(args) => clients::find_client(&ctx, args),
            clients::ClientCommand::Register(args) => clients::register_client(&ctx, args),
        },
        Command::Tracking(cmd) => match cmd {
            trackings::TrackingCommand::Ls(args) => trackings::list_trackings(&ctx, args),
        },
        Command::Address(cmd) => match cmd {
            addresses::AddressCommand::Show(args) => addresses::show_addresses(&ctx, args),
        },
        Command::Quote(cmd) => match cmd {
            quotes::QuoteCommand::Classify(args) => quotes::classify(&ctx, args),
            quotes::QuoteCommand::Create(args) => quotes::create_quote(&ctx, args),
        },
        Command::Sheet(cmd) => match cmd {
            sheet::SheetCommand::Ls => sheet::list_sheets(&ctx),
            sheet::SheetCommand::Show(args) => sheet::show_range(&ctx, args),
            sheet::SheetCommand::Append(args) => sheet::append_row(&ctx, args),
            sheet::SheetCommand::Set(args) => sheet::set_cell(&ctx, args),
        },
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
