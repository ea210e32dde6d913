use std::path::PathBuf;

use league_standings::config::settings::get_config;
use league_standings::run;
use league_standings::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Panic if we can't read the config
    let config = get_config().expect("Failed to read the config.");

    // Logs go to stderr, stdout carries the table
    let subscriber = get_subscriber(
        "league-standings".into(),
        config.application.log_level.clone(),
        std::io::stderr
    );
    init_subscriber(subscriber);

    let matches_path = std::env::args().nth(1).map(PathBuf::from);

    match run(&config.league, matches_path.as_deref()).await {
        Ok(standings) => {
            println!("{}", standings);
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ Failed to compute standings: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
