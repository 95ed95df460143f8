//! Sort state and row ordering for the season table

use crate::types::{SeasonScore, SortDirection, SortField};
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Active sort column and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            field: SortField::TotalFinal,
            direction: SortDirection::Descending,
        }
    }
}

/// Header icon for a sortable column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIcon {
    Neutral,
    Ascending,
    Descending,
}

impl SortState {
    /// Same field flips direction; a new field starts at its default direction.
    pub fn toggle(&mut self, field: SortField) {
        if self.field == field {
            self.direction = self.direction.flipped();
        } else {
            self.field = field;
            self.direction = field.default_direction();
        }
    }

    pub fn icon_for(&self, field: SortField) -> SortIcon {
        if self.field != field {
            return SortIcon::Neutral;
        }
        match self.direction {
            SortDirection::Ascending => SortIcon::Ascending,
            SortDirection::Descending => SortIcon::Descending,
        }
    }

    pub fn compare(&self, a: &SeasonScore, b: &SeasonScore) -> Ordering {
        let cmp = match self.field {
            SortField::StudentId => locale_compare(&a.student_id, &b.student_id),
            SortField::TotalFinal => a
                .total_final
                .partial_cmp(&b.total_final)
                .unwrap_or(Ordering::Equal),
        };
        self.direction.apply(cmp)
    }
}

/// Indices into `scores` in display order. `scores` itself is left untouched.
///
/// `sort_by` is stable, so rows with equal keys keep their input order.
pub fn sorted_indices(scores: &[SeasonScore], state: SortState) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..scores.len()).collect();
    indices.sort_by(|&a, &b| state.compare(&scores[a], &scores[b]));
    indices
}

/// ASCII punctuation and symbols in root collation order
const PUNCT_ORDER: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

/// One base character plus the marks that decomposed off it
struct CollationElement {
    primary: (u8, u32),
    marks: Vec<char>,
    upper: bool,
}

/// Primary weight: whitespace, punctuation and symbols, digits, letters.
/// Letters compare case-folded with accents already stripped.
fn primary_weight(c: char) -> (u8, u32) {
    if c.is_whitespace() {
        (0, c as u32)
    } else if c.is_alphabetic() {
        (3, c.to_lowercase().next().unwrap_or(c) as u32)
    } else if c.is_numeric() {
        (2, c.to_digit(10).unwrap_or(c as u32))
    } else {
        match PUNCT_ORDER.find(c) {
            Some(pos) => (1, pos as u32),
            None => (1, PUNCT_ORDER.len() as u32 + c as u32),
        }
    }
}

fn collation_elements(s: &str) -> Vec<CollationElement> {
    let mut elements: Vec<CollationElement> = Vec::new();
    for c in s.nfd() {
        if is_combining_mark(c) {
            if let Some(last) = elements.last_mut() {
                last.marks.push(c);
                continue;
            }
        }
        elements.push(CollationElement {
            primary: primary_weight(c),
            marks: Vec::new(),
            upper: c.is_uppercase(),
        });
    }
    elements
}

/// Root-locale style string comparison.
///
/// Levels, each consulted only when the previous one ties: base characters
/// (class, then case-folded letter without accents), accents, case with
/// lowercase first, and finally code points so the order stays total.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let ea = collation_elements(a);
    let eb = collation_elements(b);

    ea.iter()
        .map(|e| e.primary)
        .cmp(eb.iter().map(|e| e.primary))
        .then_with(|| {
            ea.iter()
                .map(|e| &e.marks)
                .cmp(eb.iter().map(|e| &e.marks))
        })
        .then_with(|| ea.iter().map(|e| e.upper).cmp(eb.iter().map(|e| e.upper)))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(id: &str, total: f64) -> SeasonScore {
        SeasonScore {
            student_id: id.to_string(),
            rank: 0,
            weekly: Vec::new(),
            best_n: 5,
            total_final: total,
            percent_100: total,
        }
    }

    fn ids(scores: &[SeasonScore], order: &[usize]) -> Vec<String> {
        order.iter().map(|&i| scores[i].student_id.clone()).collect()
    }

    fn sample() -> Vec<SeasonScore> {
        vec![
            score("b07", 71.5),
            score("A01", 88.0),
            score("a02", 64.25),
            score("C10", 88.0),
            score("c03", 90.0),
        ]
    }

    #[test]
    fn initial_state_is_total_descending() {
        let state = SortState::default();
        assert_eq!(state.field, SortField::TotalFinal);
        assert_eq!(state.direction, SortDirection::Descending);
    }

    #[test]
    fn toggle_same_field_twice_restores_direction() {
        let mut state = SortState::default();
        state.toggle(SortField::TotalFinal);
        assert_eq!(state.direction, SortDirection::Ascending);
        state.toggle(SortField::TotalFinal);
        assert_eq!(state, SortState::default());
    }

    #[test]
    fn switching_field_uses_field_default_direction() {
        let mut state = SortState::default();
        state.toggle(SortField::StudentId);
        assert_eq!(state.field, SortField::StudentId);
        assert_eq!(state.direction, SortDirection::Ascending);

        state.toggle(SortField::StudentId);
        assert_eq!(state.direction, SortDirection::Descending);

        // Back to totals: default is descending regardless of previous direction
        state.toggle(SortField::TotalFinal);
        assert_eq!(state.direction, SortDirection::Descending);
    }

    #[test]
    fn icon_reflects_active_field_only() {
        let mut state = SortState::default();
        assert_eq!(state.icon_for(SortField::StudentId), SortIcon::Neutral);
        assert_eq!(state.icon_for(SortField::TotalFinal), SortIcon::Descending);
        state.toggle(SortField::StudentId);
        assert_eq!(state.icon_for(SortField::StudentId), SortIcon::Ascending);
        assert_eq!(state.icon_for(SortField::TotalFinal), SortIcon::Neutral);
    }

    #[test]
    fn student_id_order_is_case_insensitive() {
        let scores = sample();
        let mut state = SortState::default();
        state.toggle(SortField::StudentId);

        let asc = sorted_indices(&scores, state);
        assert_eq!(ids(&scores, &asc), ["A01", "a02", "b07", "c03", "C10"]);
        for pair in asc.windows(2) {
            let (a, b) = (&scores[pair[0]].student_id, &scores[pair[1]].student_id);
            assert_ne!(locale_compare(a, b), Ordering::Greater);
        }

        state.toggle(SortField::StudentId);
        let desc = sorted_indices(&scores, state);
        assert_eq!(ids(&scores, &desc), ["C10", "c03", "b07", "a02", "A01"]);
    }

    #[test]
    fn total_order_and_stable_ties() {
        let scores = sample();
        let desc = sorted_indices(&scores, SortState::default());
        // A01 and C10 tie at 88.0 and keep input order
        assert_eq!(ids(&scores, &desc), ["c03", "A01", "C10", "b07", "a02"]);
        for pair in desc.windows(2) {
            assert!(scores[pair[0]].total_final >= scores[pair[1]].total_final);
        }

        let asc_state = SortState {
            field: SortField::TotalFinal,
            direction: SortDirection::Ascending,
        };
        let asc = sorted_indices(&scores, asc_state);
        assert_eq!(ids(&scores, &asc), ["a02", "b07", "A01", "C10", "c03"]);
    }

    #[test]
    fn sorting_is_idempotent_and_does_not_touch_input() {
        let scores = sample();
        let before = scores.clone();
        let state = SortState::default();

        let once: Vec<SeasonScore> = sorted_indices(&scores, state)
            .into_iter()
            .map(|i| scores[i].clone())
            .collect();
        let twice: Vec<SeasonScore> = sorted_indices(&once, state)
            .into_iter()
            .map(|i| once[i].clone())
            .collect();

        assert_eq!(once, twice);
        assert_eq!(scores, before);
    }

    #[test]
    fn locale_compare_orders_classes_and_case() {
        assert_eq!(locale_compare("a", "B"), Ordering::Less);
        assert_eq!(locale_compare("a", "A"), Ordering::Less);
        assert_eq!(locale_compare("A", "a"), Ordering::Greater);
        assert_eq!(locale_compare("9", "a"), Ordering::Less);
        assert_eq!(locale_compare("-1", "01"), Ordering::Less);
        assert_eq!(locale_compare("S10", "S2"), Ordering::Less);
        assert_eq!(locale_compare("s1", "s1"), Ordering::Equal);
    }

    #[test]
    fn locale_compare_treats_accents_as_secondary() {
        assert_eq!(locale_compare("Émile", "Zoe"), Ordering::Less);
        assert_eq!(locale_compare("e", "é"), Ordering::Less);
        assert_eq!(locale_compare("é", "f"), Ordering::Less);
        // Accent difference outranks case difference
        assert_eq!(locale_compare("é", "E"), Ordering::Greater);
        assert_eq!(locale_compare("resume", "résumé"), Ordering::Less);
        // Decomposed input collates like the precomposed letter
        assert_eq!(locale_compare("e\u{301}", "E"), Ordering::Greater);
        assert_eq!(locale_compare("e\u{301}", "f"), Ordering::Less);
    }

    #[test]
    fn locale_compare_orders_punctuation_by_collation() {
        assert_eq!(locale_compare("S_1", "S-1"), Ordering::Less);
        assert_eq!(locale_compare("S-1", "S.1"), Ordering::Less);
        assert_eq!(locale_compare("a b", "a-b"), Ordering::Less);
        assert_eq!(locale_compare("S~1", "S01"), Ordering::Less);
    }

    #[test]
    fn empty_scores_sort_to_empty_order() {
        assert!(sorted_indices(&[], SortState::default()).is_empty());
    }
}
