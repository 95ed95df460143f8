//! Utility functions

use crate::constants::APP_NAME;
use std::path::PathBuf;

/// Get the app data directory path
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Render an RFC 3339 timestamp in local time, e.g. "2025-03-01 14:05"
pub fn format_timestamp(rfc3339: &str) -> Option<String> {
    chrono::DateTime::parse_from_rfc3339(rfc3339)
        .ok()
        .map(|t| {
            t.with_timezone(&chrono::Local)
                .format("%Y-%m-%d %H:%M")
                .to_string()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_formatting() {
        let formatted = format_timestamp("2025-03-01T14:05:09+00:00").unwrap();
        assert_eq!(formatted.len(), "2025-03-01 14:05".len());
        assert!(formatted.starts_with("2025-03-0"));
        assert_eq!(format_timestamp("yesterday"), None);
    }
}
