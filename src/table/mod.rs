//! Season score table component
//!
//! Owns the sort state and a memoized display order. Score data, student
//! records and the view mode are supplied by the caller every frame.

mod metrics;
mod render;
mod sort;
mod view;

pub use sort::{SortIcon, SortState};
pub use view::{Cell, CellAlign, CellStyle, HeaderCell};

use sort::sorted_indices;
use view::TableView;

use crate::types::{SeasonScore, SortField, StudentMap, ViewMode};
use std::sync::Arc;
use tracing::debug;

/// Display order computed for one (score list, sort state) pair
struct SortCache {
    scores: Arc<Vec<SeasonScore>>,
    sort: SortState,
    order: Vec<usize>,
}

#[derive(Default)]
pub struct SeasonTable {
    sort: SortState,
    cache: Option<SortCache>,
}

impl SeasonTable {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    pub fn toggle_sort(&mut self, field: SortField) {
        self.sort.toggle(field);
        debug!(field = ?self.sort.field, direction = ?self.sort.direction, "Sort changed");
    }

    /// Display order for `scores`, recomputed only when the list (by identity)
    /// or the sort state changed since the last call.
    pub fn sorted_order(&mut self, scores: &Arc<Vec<SeasonScore>>) -> &[usize] {
        let stale = match &self.cache {
            Some(cache) => !Arc::ptr_eq(&cache.scores, scores) || cache.sort != self.sort,
            None => true,
        };
        if stale {
            self.cache = Some(SortCache {
                scores: Arc::clone(scores),
                sort: self.sort,
                order: sorted_indices(scores, self.sort),
            });
        }
        match &self.cache {
            Some(cache) => &cache.order,
            None => &[],
        }
    }

    pub fn view(
        &mut self,
        scores: &Arc<Vec<SeasonScore>>,
        students: &StudentMap,
        mode: ViewMode,
    ) -> TableView {
        let sort = self.sort;
        let order = self.sorted_order(scores);
        view::project(scores, order, students, mode, sort)
    }

    #[cfg(test)]
    fn cached_order_ptr(&self) -> Option<*const usize> {
        self.cache.as_ref().map(|c| c.order.as_ptr())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SortDirection;
    use super::view::EMPTY_MESSAGE;

    fn score(id: &str, total: f64) -> SeasonScore {
        SeasonScore {
            student_id: id.to_string(),
            rank: 0,
            weekly: Vec::new(),
            best_n: 3,
            total_final: total,
            percent_100: total,
        }
    }

    fn row_keys(view: &TableView) -> Vec<&str> {
        view.rows().iter().map(|r| r.key.as_str()).collect()
    }

    #[test]
    fn new_table_starts_with_totals_descending() {
        let table = SeasonTable::new();
        assert_eq!(table.sort_state().field, SortField::TotalFinal);
        assert_eq!(table.sort_state().direction, SortDirection::Descending);
    }

    #[test]
    fn order_is_memoized_until_inputs_change() {
        let scores = Arc::new(vec![score("S2", 10.0), score("S1", 20.0)]);
        let mut table = SeasonTable::new();

        assert_eq!(table.sorted_order(&scores), [1, 0]);
        let first = table.cached_order_ptr();
        table.sorted_order(&scores);
        assert_eq!(table.cached_order_ptr(), first);

        // Same contents, new allocation: recomputed
        let reloaded = Arc::new((*scores).clone());
        table.sorted_order(&reloaded);
        assert_ne!(table.cached_order_ptr(), first);

        table.toggle_sort(SortField::StudentId);
        assert_eq!(table.sorted_order(&reloaded), [1, 0]);
        table.toggle_sort(SortField::StudentId);
        assert_eq!(table.sorted_order(&reloaded), [0, 1]);
    }

    #[test]
    fn view_follows_toggles() {
        let scores = Arc::new(vec![score("b", 50.0), score("a", 70.0), score("c", 60.0)]);
        let students = StudentMap::new();
        let mut table = SeasonTable::new();

        let view = table.view(&scores, &students, ViewMode::Final);
        assert_eq!(row_keys(&view), ["a", "c", "b"]);

        table.toggle_sort(SortField::StudentId);
        let view = table.view(&scores, &students, ViewMode::Raw);
        assert_eq!(row_keys(&view), ["a", "b", "c"]);

        table.toggle_sort(SortField::TotalFinal);
        table.toggle_sort(SortField::TotalFinal);
        let view = table.view(&scores, &students, ViewMode::Final);
        assert_eq!(row_keys(&view), ["b", "c", "a"]);
    }

    #[test]
    fn empty_list_shows_message() {
        let mut table = SeasonTable::new();
        let view = table.view(&Arc::new(Vec::new()), &StudentMap::new(), ViewMode::Raw);
        assert_eq!(view, TableView::Empty { message: EMPTY_MESSAGE });
    }
}
