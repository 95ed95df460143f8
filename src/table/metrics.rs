//! Per-row derived values and cell formatting

use crate::types::{SeasonScore, StudentMap};

/// Mean of the weekly raw scores, 0 when no weeks were graded
pub fn avg_raw_score(score: &SeasonScore) -> f64 {
    if score.weekly.is_empty() {
        return 0.0;
    }
    let total: f64 = score.weekly.iter().map(|w| w.raw_score).sum();
    total / score.weekly.len() as f64
}

/// Number of weeks that actually count toward the best-N total
pub fn best_weeks_used(score: &SeasonScore) -> usize {
    (score.best_n as usize).min(score.weekly.len())
}

/// "used / best_n"
pub fn best_weeks_label(score: &SeasonScore) -> String {
    format!("{} / {}", best_weeks_used(score), score.best_n)
}

/// Display name from the student map, falling back to the id
pub fn display_name<'a>(score: &'a SeasonScore, students: &'a StudentMap) -> &'a str {
    students
        .get(&score.student_id)
        .and_then(|s| s.display_name.as_deref())
        .filter(|name| !name.is_empty())
        .unwrap_or(&score.student_id)
}

/// Two-decimal fixed point. Exact halves round away from zero.
pub fn format_fixed(value: f64) -> String {
    let scaled = value * 100.0;
    // Only an exact half is a tie; a product that rounded onto .5 is not
    if scaled.fract().abs() == 0.5 && value.mul_add(100.0, -scaled) == 0.0 {
        format!("{:.2}", scaled.round() / 100.0)
    } else {
        format!("{:.2}", value)
    }
}
