//! egui rendering for the season table

use super::view::{Column, TableView};
use super::SeasonTable;
use crate::theme;
use crate::types::{SeasonScore, SortField, StudentMap, ViewMode};
use crate::ui::components;
use eframe::egui;
use std::sync::Arc;

const ROW_HEIGHT: f32 = 29.0;
const HEADER_HEIGHT: f32 = 42.0;

fn column_width(column: Column) -> egui_extras::Column {
    use egui_extras::Column as TableColumn;
    match column {
        Column::Rank => TableColumn::exact(72.0),
        Column::StudentId => TableColumn::exact(150.0).clip(true),
        Column::Name => TableColumn::remainder().at_least(120.0).clip(true),
        Column::AvgRawScore | Column::TotalFinal => TableColumn::exact(150.0),
        _ => TableColumn::exact(110.0),
    }
}

impl SeasonTable {
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        scores: &Arc<Vec<SeasonScore>>,
        students: &StudentMap,
        mode: ViewMode,
    ) {
        use egui_extras::TableBuilder;

        let (header, rows) = match self.view(scores, students, mode) {
            TableView::Empty { message } => {
                components::empty_state(ui, message);
                return;
            }
            TableView::Rows { header, rows } => (header, rows),
        };

        let mut clicked: Option<SortField> = None;

        theme::section_frame().show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(false)
                .resizable(false)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .min_scrolled_height(0.0);
            for cell in &header {
                table = table.column(column_width(cell.column));
            }

            table
                .header(HEADER_HEIGHT, |mut row| {
                    for cell in &header {
                        row.col(|ui| {
                            if components::column_header(ui, cell) {
                                clicked = cell.column.sort_field();
                            }
                        });
                    }
                })
                .body(|body| {
                    body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                        let view_row = &rows[row.index()];
                        for cell in &view_row.cells {
                            row.col(|ui| components::table_cell(ui, cell));
                        }
                    });
                });
        });

        if let Some(field) = clicked {
            self.toggle_sort(field);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WeeklyScore;

    fn run_frame(table: &mut SeasonTable, scores: &Arc<Vec<SeasonScore>>, mode: ViewMode) {
        let ctx = egui::Context::default();
        let students = StudentMap::new();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                table.show(ui, scores, &students, mode);
            });
        });
    }

    #[test]
    fn renders_headless_in_every_state() {
        let scores = Arc::new(vec![SeasonScore {
            student_id: "S1".to_string(),
            rank: 1,
            weekly: vec![WeeklyScore { raw_score: 80.0 }],
            best_n: 5,
            total_final: 80.0,
            percent_100: 80.0,
        }]);
        let mut table = SeasonTable::new();

        run_frame(&mut table, &scores, ViewMode::Raw);
        run_frame(&mut table, &scores, ViewMode::Final);
        run_frame(&mut table, &Arc::new(Vec::new()), ViewMode::Final);

        // Rendering alone never touches the sort state
        assert_eq!(table.sort_state(), Default::default());
    }
}
