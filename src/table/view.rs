//! Renderer-independent projection of the season table

use super::metrics::{avg_raw_score, best_weeks_label, display_name, format_fixed};
use super::sort::{SortIcon, SortState};
use crate::types::{SeasonScore, SortField, StudentMap, ViewMode};

pub const EMPTY_MESSAGE: &str = "No season score data yet";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Rank,
    StudentId,
    Name,
    Weeks,
    AvgRawScore,
    BestWeeks,
    TotalFinal,
    Percent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellAlign {
    Left,
    Center,
    Right,
}

/// Text weight/emphasis for a body cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    Plain,
    Medium,
    Mono,
    Emphasis,
}

const RAW_COLUMNS: &[Column] = &[
    Column::Rank,
    Column::StudentId,
    Column::Name,
    Column::Weeks,
    Column::AvgRawScore,
];

const FINAL_COLUMNS: &[Column] = &[
    Column::Rank,
    Column::StudentId,
    Column::Name,
    Column::BestWeeks,
    Column::TotalFinal,
    Column::Percent,
];

impl Column {
    pub fn for_mode(mode: ViewMode) -> &'static [Column] {
        match mode {
            ViewMode::Raw => RAW_COLUMNS,
            ViewMode::Final => FINAL_COLUMNS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Column::Rank => "RANK",
            Column::StudentId => "STUDENT ID",
            Column::Name => "NAME",
            Column::Weeks => "WEEKS",
            Column::AvgRawScore => "AVG RAW SCORE",
            Column::BestWeeks => "BEST WEEKS",
            Column::TotalFinal => "SEASON TOTAL",
            Column::Percent => "PERCENT",
        }
    }

    /// Sort trigger behind this header, if any
    pub fn sort_field(self) -> Option<SortField> {
        match self {
            Column::StudentId => Some(SortField::StudentId),
            Column::TotalFinal => Some(SortField::TotalFinal),
            _ => None,
        }
    }

    pub fn align(self) -> CellAlign {
        match self {
            Column::Rank => CellAlign::Center,
            Column::StudentId | Column::Name => CellAlign::Left,
            _ => CellAlign::Right,
        }
    }

    fn style(self) -> CellStyle {
        match self {
            Column::Rank | Column::AvgRawScore => CellStyle::Medium,
            Column::StudentId => CellStyle::Mono,
            Column::TotalFinal => CellStyle::Emphasis,
            _ => CellStyle::Plain,
        }
    }

    fn text(self, score: &SeasonScore, students: &StudentMap) -> String {
        match self {
            Column::Rank => score.rank.to_string(),
            Column::StudentId => score.student_id.clone(),
            Column::Name => display_name(score, students).to_string(),
            Column::Weeks => score.weekly.len().to_string(),
            Column::AvgRawScore => format_fixed(avg_raw_score(score)),
            Column::BestWeeks => best_weeks_label(score),
            Column::TotalFinal => format_fixed(score.total_final),
            Column::Percent => format_fixed(score.percent_100),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCell {
    pub column: Column,
    /// `Some` for sortable headers
    pub icon: Option<SortIcon>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub text: String,
    pub align: CellAlign,
    pub style: CellStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    /// student_id
    pub key: String,
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableView {
    Empty { message: &'static str },
    Rows {
        header: Vec<HeaderCell>,
        rows: Vec<RowView>,
    },
}

impl TableView {
    #[cfg(test)]
    pub fn rows(&self) -> &[RowView] {
        match self {
            TableView::Empty { .. } => &[],
            TableView::Rows { rows, .. } => rows,
        }
    }
}

/// Build the display table for `order` (indices into `scores`)
pub fn project(
    scores: &[SeasonScore],
    order: &[usize],
    students: &StudentMap,
    mode: ViewMode,
    sort: SortState,
) -> TableView {
    if scores.is_empty() {
        return TableView::Empty {
            message: EMPTY_MESSAGE,
        };
    }

    let columns = Column::for_mode(mode);
    let header = columns
        .iter()
        .map(|&column| HeaderCell {
            column,
            icon: column.sort_field().map(|field| sort.icon_for(field)),
        })
        .collect();

    let rows = order
        .iter()
        .map(|&idx| {
            let score = &scores[idx];
            RowView {
                key: score.student_id.clone(),
                cells: columns
                    .iter()
                    .map(|&column| Cell {
                        text: column.text(score, students),
                        align: column.align(),
                        style: column.style(),
                    })
                    .collect(),
            }
        })
        .collect();

    TableView::Rows { header, rows }
}
