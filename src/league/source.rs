use std::path::{Path, PathBuf};

use crate::models::match_result::MatchResult;

#[derive(Debug, thiserror::Error)]
pub enum MatchSourceError {
    #[error("Failed to read matches from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Matches file is not a JSON array of records: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read every match record from a JSON file.
///
/// The file is read on each call. Elements that do not form a record are
/// logged and skipped.
#[tracing::instrument(name = "Load matches", skip(path), fields(path = %path.as_ref().display()))]
pub fn load_matches(path: impl AsRef<Path>) -> Result<Vec<MatchResult>, MatchSourceError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| MatchSourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_matches(&contents)
}

#[tracing::instrument(name = "Load matches", skip(path), fields(path = %path.as_ref().display()))]
pub async fn load_matches_async(
    path: impl AsRef<Path>,
) -> Result<Vec<MatchResult>, MatchSourceError> {
    let path = path.as_ref();
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| MatchSourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    parse_matches(&contents)
}

pub fn parse_matches(contents: &str) -> Result<Vec<MatchResult>, MatchSourceError> {
    let records: Vec<serde_json::Value> = serde_json::from_str(contents)?;
    let total = records.len();

    let matches: Vec<MatchResult> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(game) => Some(game),
            Err(e) => {
                tracing::warn!("Skipping match record {}: {}", index, e);
                None
            }
        })
        .collect();

    tracing::info!("Loaded {} of {} match records", matches.len(), total);
    Ok(matches)
}
