use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;
use std::io;
use std::path::PathBuf;

use bank_ledger::utils::MemoryStorage;
use bank_ledger::{Bank, BankConfig, Console};

/// Bank Ledger - an in-memory banking console
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Sets the configuration file
    #[clap(short, long, value_name = "FILE", default_value = "bank-ledger.toml")]
    config: PathBuf,

    /// Let new accounts reuse an existing account number
    #[clap(long)]
    allow_duplicate_ids: bool,

    /// Turn debugging information on
    #[clap(short, long, action = clap::ArgAction::Count)]
    debug: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    let mut config = BankConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load configuration from {}", cli.config.display()))?;
    if cli.allow_duplicate_ids {
        config.registry.reject_duplicate_ids = false;
    }
    info!("Starting with {:?}", config);

    let mut bank = Bank::with_config(MemoryStorage::new(), config.registry);
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), config.console);
    console.run(&mut bank).context("Console session failed")?;

    Ok(())
}
