//! Common types and data structures

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Student record, used for display-name lookup only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub student_id: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// A single graded week. Only the raw score is consumed by the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyScore {
    pub raw_score: f64,
}

/// Aggregated per-student result for a season
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonScore {
    pub student_id: String,
    pub rank: u32,
    #[serde(default)]
    pub weekly: Vec<WeeklyScore>,
    pub best_n: u32,
    pub total_final: f64,
    pub percent_100: f64,
}

/// student_id -> Student
pub type StudentMap = HashMap<String, Student>;

/// Season export as served by the grading backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonFile {
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub students: Vec<Student>,
    pub scores: Vec<SeasonScore>,
}

impl SeasonFile {
    #[cfg(test)]
    pub fn student_map(&self) -> StudentMap {
        self.students
            .iter()
            .map(|s| (s.student_id.clone(), s.clone()))
            .collect()
    }
}

/// Which block of columns the table shows on the right
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Raw,
    #[default]
    Final,
}

/// Column to sort the season table by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    StudentId,
    TotalFinal,
}

impl SortField {
    /// Direction applied when switching to this field
    pub fn default_direction(self) -> SortDirection {
        match self {
            SortField::StudentId => SortDirection::Ascending,
            SortField::TotalFinal => SortDirection::Descending,
        }
    }
}

/// Sort direction for the season table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn apply(self, ordering: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn season_file_ignores_unknown_weekly_fields() {
        let json = r#"{
            "season": "2025 Fall",
            "students": [{"student_id": "S1", "display_name": "Ada"}, {"student_id": "S2"}],
            "scores": [{
                "student_id": "S1", "rank": 1,
                "weekly": [{"raw_score": 80, "week": 1, "late": false}],
                "best_n": 5, "total_final": 92.5, "percent_100": 92.5
            }]
        }"#;
        let file: SeasonFile = serde_json::from_str(json).unwrap();
        assert_eq!(file.season.as_deref(), Some("2025 Fall"));
        assert_eq!(file.scores[0].weekly, vec![WeeklyScore { raw_score: 80.0 }]);

        let students = file.student_map();
        assert_eq!(students["S1"].display_name.as_deref(), Some("Ada"));
        assert_eq!(students["S2"].display_name, None);
    }

    #[test]
    fn view_mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ViewMode::Raw).unwrap(), "\"raw\"");
        let mode: ViewMode = serde_json::from_str("\"final\"").unwrap();
        assert_eq!(mode, ViewMode::Final);
    }
}
