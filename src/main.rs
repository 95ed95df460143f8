#![windows_subsystem = "windows"]
//! Season Scoreboard - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod app;
mod constants;
mod db;
mod error;
mod settings;
mod source;
mod table;
mod theme;
mod types;
mod ui;
mod utils;

use app::App;
use constants::*;
use db::Database;
use eframe::egui;
use source::{fetch_season, DataSource};
use tracing::{error, info, warn};
use types::ViewMode;
use utils::{format_timestamp, get_data_dir};

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,season_scoreboard=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn main() -> eframe::Result<()> {
    let data_dir = get_data_dir();
    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "Season Scoreboard starting");

    let db_path = data_dir.join(DB_FILE);
    let db = match Database::open(&db_path) {
        Ok(db) => {
            info!(path = %db_path.display(), "Database opened");
            db
        }
        Err(e) => {
            error!(error = %e, path = %db_path.display(), "Failed to open database");
            panic!("Failed to open database: {}", e);
        }
    };

    let settings = settings::Settings::load(&data_dir);
    let data_source = settings.effective_source(std::env::var(SOURCE_ENV).ok());

    // First run: import synchronously so the table isn't empty on open
    if db.score_count().unwrap_or(0) == 0 {
        if let Some(source) = data_source.as_deref().map(DataSource::parse) {
            info!(source = %source, "Database empty, importing initial season");
            match fetch_season(&source) {
                Ok(season) => match db.replace_season(&season) {
                    Ok(count) => info!(count, "Imported initial season"),
                    Err(e) => error!(error = %e, "Failed to import initial season"),
                },
                Err(e) => warn!(error = %e, "Initial season fetch failed"),
            }
        }
    }

    let win_pos = match (settings.window_x, settings.window_y) {
        (Some(x), Some(y)) => Some(egui::pos2(x, y)),
        _ => None,
    };
    let win_size = match (settings.window_w, settings.window_h) {
        (Some(w), Some(h)) => Some(egui::vec2(w, h)),
        _ => None,
    };

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(win_size.unwrap_or(egui::vec2(1100.0, 720.0)))
        .with_min_inner_size([760.0, 480.0])
        .with_title(APP_NAME);
    if let Some(pos) = win_pos {
        viewport = viewport.with_position(pos);
    }

    let options = eframe::NativeOptions {
        viewport,
        centered: win_pos.is_none(),
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, db, settings, data_source, data_dir)))),
    )
}

// ============================================================================
// MAIN UPDATE LOOP & UI RENDERING
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window position/size for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        self.poll_reload();

        egui::TopBottomPanel::top("top_bar")
            .exact_height(theme::TOP_BAR_HEIGHT)
            .frame(theme::top_bar_frame())
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| self.render_top_bar(ui, ctx));
            });

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::same(16)),
            )
            .show(ctx, |ui| {
                self.central_panel_rect = Some(ui.max_rect());
                self.table
                    .show(ui, &self.scores, &self.students, self.view_mode);
            });

        self.render_toast(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application shutting down");
        self.save_settings();
    }
}

impl App {
    fn render_top_bar(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.label(
            egui::RichText::new(APP_NAME)
                .size(theme::FONT_TITLE)
                .strong()
                .color(theme::TEXT_PRIMARY),
        );
        if let Some(label) = &self.season_label {
            ui.label(
                egui::RichText::new(label)
                    .size(theme::FONT_BODY)
                    .color(theme::ACCENT),
            );
        }

        let mut status = format!("{} students", self.scores.len());
        if let Some(at) = self.imported_at.as_deref().and_then(format_timestamp) {
            status = format!("{} • imported {}", status, at);
        }
        ui.label(egui::RichText::new(status).size(theme::FONT_LABEL).color(theme::TEXT_DIM));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.spacing_mut().item_spacing.x = theme::SPACING_SM * 2.0;

            if ui
                .add(theme::button(egui_phosphor::regular::FOLDER_OPEN))
                .on_hover_text("Open data folder")
                .clicked()
            {
                self.open_data_folder();
            }

            if ui
                .add(theme::button(format!("{}  Open", egui_phosphor::regular::FILE)))
                .on_hover_text("Open season file")
                .clicked()
            {
                self.open_season_file(ctx);
            }

            let reloading = self.is_reloading();
            let reload_label = if reloading {
                format!("{}  Loading…", egui_phosphor::regular::ARROW_CLOCKWISE)
            } else {
                format!("{}  Reload", egui_phosphor::regular::ARROW_CLOCKWISE)
            };
            let can_reload = !reloading && self.data_source.is_some();
            if ui
                .add_enabled(can_reload, theme::button_enabled(reload_label, can_reload))
                .clicked()
            {
                self.reload(ctx);
            }

            ui.add_space(theme::SPACING_LG);

            let mut raw_active = self.view_mode == ViewMode::Raw;
            if theme::segmented_toggle(ui, "Raw", "Final", &mut raw_active) {
                self.view_mode = if raw_active {
                    ViewMode::Raw
                } else {
                    ViewMode::Final
                };
            }
        });
    }
}
