//! Season data sources: local JSON files or an HTTP endpoint

use crate::error::LoadError;
use crate::types::SeasonFile;
use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Local(PathBuf),
    Remote(String),
}

impl DataSource {
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s.starts_with("http://") || s.starts_with("https://") {
            DataSource::Remote(s.to_string())
        } else {
            DataSource::Local(PathBuf::from(s))
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Local(path) => write!(f, "{}", path.display()),
            DataSource::Remote(url) => f.write_str(url),
        }
    }
}

/// Read and parse a season file. Blocking; call off the UI thread.
pub fn fetch_season(source: &DataSource) -> Result<SeasonFile, LoadError> {
    debug!(source = %source, "Fetching season data");
    let body = match source {
        DataSource::Local(path) => std::fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.display().to_string(),
            source: e,
        })?,
        DataSource::Remote(url) => {
            let response = reqwest::blocking::get(url)?;
            debug!(status = %response.status(), "Season response received");
            if !response.status().is_success() {
                return Err(LoadError::Status(response.status()));
            }
            response.text()?
        }
    };
    parse_season(&body)
}

pub fn parse_season(json: &str) -> Result<SeasonFile, LoadError> {
    let file: SeasonFile = serde_json::from_str(json)?;

    let mut seen = HashSet::new();
    let duplicates: Vec<&str> = file
        .scores
        .iter()
        .filter(|s| !seen.insert(s.student_id.as_str()))
        .map(|s| s.student_id.as_str())
        .collect();
    if !duplicates.is_empty() {
        warn!(ids = ?duplicates, "Duplicate student ids in season scores");
    }

    debug!(
        season = ?file.season,
        scores = file.scores.len(),
        students = file.students.len(),
        "Season parsed"
    );
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SEASON: &str = r#"{
        "season": "Spring",
        "students": [{"student_id": "S1", "display_name": "Ada"}],
        "scores": [
            {"student_id": "S1", "rank": 1, "weekly": [{"raw_score": 90}], "best_n": 4, "total_final": 90, "percent_100": 100},
            {"student_id": "S2", "rank": 2, "best_n": 4, "total_final": 45.5, "percent_100": 50.5}
        ]
    }"#;

    #[test]
    fn parse_distinguishes_urls_from_paths() {
        assert_eq!(
            DataSource::parse(" https://example.org/season.json "),
            DataSource::Remote("https://example.org/season.json".to_string())
        );
        assert_eq!(
            DataSource::parse("/tmp/season.json"),
            DataSource::Local(PathBuf::from("/tmp/season.json"))
        );
        assert_eq!(
            DataSource::parse("httpdocs/season.json"),
            DataSource::Local(PathBuf::from("httpdocs/season.json"))
        );
    }

    #[test]
    fn fetch_local_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SEASON.as_bytes()).unwrap();

        let season = fetch_season(&DataSource::Local(file.path().to_path_buf())).unwrap();
        assert_eq!(season.scores.len(), 2);
        assert!(season.scores[1].weekly.is_empty());
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = fetch_season(&DataSource::Local(dir.path().join("absent.json"))).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = parse_season(r#"{"scores": [{"student_id": 1}]}"#).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn duplicate_ids_are_kept() {
        let json = r#"{"scores": [
            {"student_id": "S1", "rank": 1, "best_n": 1, "total_final": 1, "percent_100": 1},
            {"student_id": "S1", "rank": 2, "best_n": 1, "total_final": 0, "percent_100": 0}
        ]}"#;
        assert_eq!(parse_season(json).unwrap().scores.len(), 2);
    }
}
