use std::path::Path;

pub mod config;
pub mod error;
pub mod league;
pub mod models;
pub mod telemetry;

use crate::config::settings::LeagueSettings;
use crate::error::AppError;
use crate::league::source::load_matches_async;
use crate::league::standings::compute_standings;

/// Load the current matches, build the table and render it as JSON.
///
/// `matches_path` overrides the configured source when given.
pub async fn run(settings: &LeagueSettings, matches_path: Option<&Path>) -> Result<String, AppError> {
    let path = matches_path.unwrap_or(settings.matches_path.as_path());
    let matches = load_matches_async(path).await?;
    let standings = compute_standings(&matches);

    tracing::info!("Standings ready: {} teams from {} matches", standings.len(), matches.len());

    let rendered = if settings.pretty_output {
        serde_json::to_string_pretty(&standings)?
    } else {
        serde_json::to_string(&standings)?
    };
    Ok(rendered)
}
