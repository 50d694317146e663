use std::time::Duration;

use clap::Parser;
use log::{error, info};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use tokio::main;

use stagehand::config::Config;
use stagehand::{build_router, DatabaseState};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, short, default_value_t = 3)]
    verbosity: usize,
    #[arg(long, short, default_value_t = false)]
    quiet: bool,
    #[arg(long, short)]
    config: String,
}

#[main]
async fn main() {
    let args = Args::parse();
    if let Err(err) = stderrlog::new()
        .verbosity(args.verbosity)
        .quiet(args.quiet)
        .timestamp(stderrlog::Timestamp::Millisecond)
        .init()
    {
        eprintln!("Could not set up logging: {}", err);
        return;
    }

    info!("Configuration path: {}", args.config);
    let config = match Config::load(&args.config) {
        Ok(config) => config,
        Err(err) => {
            error!("{}", err);
            return;
        }
    };

    let mut options = ConnectOptions::new(config.database.to_owned());
    options
        .max_connections(config.max_connections)
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);
    let connection = match Database::connect(options).await {
        Ok(connection) => connection,
        Err(err) => {
            error!("Error connecting to database: {}", err);
            return;
        }
    };

    info!("Running migrations");
    if let Err(err) = Migrator::up(&connection, None).await {
        error!("Error running migrations: {}", err);
        return;
    }

    let app = build_router(DatabaseState::new(connection));

    let address = config.bind_address();
    let listener = match tokio::net::TcpListener::bind(&address).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Could not bind {}: {}", address, err);
            return;
        }
    };
    info!("Listening on {}", address);
    info!("Welcome to Stagehand!");
    if let Err(err) = axum::serve(listener, app).await {
        error!("Server error: {}", err);
    }
}
