mod commands;
mod config;
mod logger;
mod render;
mod store;

use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use thiserror::Error;

use crate::commands::Command;
use crate::config::{Config, ConfigError};
use crate::store::{Store, StoreError};

#[derive(Debug, Parser)]
#[command(name = "worldcup", version, about)]
pub struct Args {
    /// Path of the config file.
    #[arg(short, long, default_value = "worldcup.toml")]
    config: PathBuf,
    /// Path of the tournament snapshot, overriding the config.
    #[arg(short, long)]
    snapshot: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Engine(#[from] worldcup_core::Error),
    #[error(transparent)]
    Logger(#[from] log::SetLoggerError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("unknown team {0:?}")]
    UnknownTeam(String),
}

fn main() {
    let args = Args::parse();

    if let Err(err) = run(args) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Error> {
    let config = Config::load(&args.config)?;
    logger::init(config.loglevel)?;

    log::debug!("Using config: {:?}", config);

    let store = Store::new(args.snapshot.unwrap_or(config.snapshot));
    args.command.run(&store)
}
