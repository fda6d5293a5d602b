use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod config;
mod seed;

#[derive(Parser)]
#[command(name = "climbunity", version, about = "Community platform for climbing gyms")]
struct Args {
    /// Path to the configuration file.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the web server (default).
    Run,
    /// Insert the default style and tag taxonomies.
    Seed,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    let cfg = config::Config::try_load_from_file_or_default(args.config.as_deref())?;

    log::info!("Opening database {}", cfg.db.conn_sqlite);
    let connections =
        climbunity_db_sqlite::Connections::init(&cfg.db.conn_sqlite, cfg.db.conn_pool_size.into())?;
    climbunity_db_sqlite::run_embedded_database_migrations(connections.exclusive()?);

    match args.command.unwrap_or(Command::Run) {
        Command::Seed => seed::seed_taxonomies(&connections)?,
        Command::Run => {
            climbunity_webserver::run(connections, env!("CARGO_PKG_VERSION")).await;
        }
    }
    Ok(())
}
