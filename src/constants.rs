//! Application constants and configuration

pub const APP_NAME: &str = "Season Scoreboard";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DB_FILE: &str = "season.db";
pub const LOG_FILE: &str = "season-scoreboard.log";

/// Overrides the configured data source for one session
pub const SOURCE_ENV: &str = "SEASON_SCORES_SOURCE";
