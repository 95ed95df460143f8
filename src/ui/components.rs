//! Reusable UI components
//!
//! Standalone widgets shared by the season table and the top bar.

use crate::table::{Cell, CellAlign, CellStyle, HeaderCell, SortIcon};
use crate::theme;
use eframe::egui;

/// Phosphor glyph for a header sort icon
pub fn sort_glyph(icon: SortIcon) -> &'static str {
    match icon {
        SortIcon::Neutral => egui_phosphor::regular::CARET_UP_DOWN,
        SortIcon::Ascending => egui_phosphor::regular::CARET_UP,
        SortIcon::Descending => egui_phosphor::regular::CARET_DOWN,
    }
}

/// Column header. Sortable headers are clickable labels with a sort icon;
/// returns true when clicked.
pub fn column_header(ui: &mut egui::Ui, cell: &HeaderCell) -> bool {
    let label = cell.column.label();
    let layout = match cell.column.align() {
        CellAlign::Left => egui::Layout::left_to_right(egui::Align::Center),
        CellAlign::Center => egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
        CellAlign::Right => egui::Layout::right_to_left(egui::Align::Center),
    };

    ui.with_layout(layout, |ui| match cell.icon {
        Some(icon) => {
            let color = if icon == SortIcon::Neutral {
                theme::TEXT_MUTED
            } else {
                theme::TEXT_PRIMARY
            };
            let text = format!("{} {}", label, sort_glyph(icon));
            let resp = ui.add(
                egui::Label::new(
                    egui::RichText::new(text)
                        .size(theme::FONT_LABEL)
                        .strong()
                        .color(color),
                )
                .selectable(false)
                .sense(egui::Sense::click()),
            );
            if resp.hovered() {
                ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
            }
            resp.clicked()
        }
        None => {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(label)
                        .size(theme::FONT_LABEL)
                        .strong()
                        .color(theme::TEXT_PRIMARY),
                )
                .selectable(false),
            );
            false
        }
    })
    .inner
}

/// Body cell text with the cell's alignment and emphasis
pub fn table_cell(ui: &mut egui::Ui, cell: &Cell) {
    let text = egui::RichText::new(&cell.text);
    let text = match cell.style {
        CellStyle::Plain => text.size(theme::FONT_BODY).color(theme::TEXT_SECONDARY),
        CellStyle::Medium => text.size(theme::FONT_BODY).strong(),
        CellStyle::Mono => text.monospace().size(theme::FONT_LABEL).color(theme::TEXT_SECONDARY),
        CellStyle::Emphasis => text.size(theme::FONT_BODY).strong().color(theme::ACCENT),
    };
    let label = egui::Label::new(text).truncate().selectable(false);

    match cell.align {
        CellAlign::Left => {
            ui.add(label);
        }
        CellAlign::Center => {
            ui.centered_and_justified(|ui| ui.add(label));
        }
        CellAlign::Right => {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add(label)
            });
        }
    }
}

/// Centered placeholder shown instead of an empty table
pub fn empty_state(ui: &mut egui::Ui, message: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() / 3.0);
        ui.label(
            egui::RichText::new(egui_phosphor::regular::TABLE)
                .size(48.0)
                .color(theme::TEXT_DIM),
        );
        ui.add_space(theme::SPACING_MD);
        ui.label(
            egui::RichText::new(message)
                .size(theme::FONT_HEADING)
                .color(theme::TEXT_MUTED),
        );
    });
}
