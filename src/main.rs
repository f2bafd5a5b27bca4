mod auth;
mod config;
mod controller;
mod error;
mod ledger;
mod models;
mod run;
mod storage;
mod ui;

use anyhow::Result;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let config = config::Config::resolve()?;
    config.init_logging()?;
    log::info!(
        "piebudget {} starting; data dir {}",
        env!("CARGO_PKG_VERSION"),
        config.data_dir.display()
    );

    let store = storage::SqliteStore::open(&config.db_path)?;

    match args.len() {
        1 => run::as_tui(store),
        2.. => run::as_cli(&args, store),
        _ => {
            eprintln!("Usage: piebudget [command]");
            Ok(())
        }
    }
}
