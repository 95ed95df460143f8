//! App module - contains the main application state and logic

mod loading;
mod toast;

use crate::db::Database;
use crate::error::LoadError;
use crate::settings::Settings;
use crate::table::SeasonTable;
use crate::theme;
use crate::types::*;
use eframe::egui;
use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use tracing::warn;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) db: Database,
    // Season data, replaced wholesale on every refresh
    pub(crate) scores: Arc<Vec<SeasonScore>>,
    pub(crate) students: StudentMap,
    pub(crate) season_label: Option<String>,
    pub(crate) imported_at: Option<String>,
    // View
    pub(crate) view_mode: ViewMode,
    pub(crate) table: SeasonTable,
    // Loading. `data_source` may come from the environment for this session
    // only; `saved_source` is what gets written back to settings.
    pub(crate) data_source: Option<String>,
    pub(crate) saved_source: Option<String>,
    pub(crate) reload_rx: Option<mpsc::Receiver<Result<SeasonFile, LoadError>>>,
    // Toast notification
    pub(crate) toast_message: Option<String>,
    pub(crate) toast_is_error: bool,
    pub(crate) toast_start: Option<std::time::Instant>,
    pub(crate) central_panel_rect: Option<egui::Rect>,
    // Window
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        db: Database,
        settings: Settings,
        data_source: Option<String>,
        data_dir: PathBuf,
    ) -> Self {
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Phosphor icons for sort carets and toolbar buttons
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        let mut app = Self {
            db,
            scores: Arc::new(Vec::new()),
            students: StudentMap::new(),
            season_label: None,
            imported_at: None,
            view_mode: settings.view_mode,
            table: SeasonTable::new(),
            data_source,
            saved_source: settings.data_source,
            reload_rx: None,
            toast_message: None,
            toast_is_error: false,
            toast_start: None,
            central_panel_rect: None,
            window_pos: None,
            window_size: None,
            data_dir,
        };
        app.refresh_from_db();
        app
    }

    /// Reload everything the UI shows from the cache database
    pub fn refresh_from_db(&mut self) {
        match self.db.get_scores() {
            Ok(scores) => self.scores = Arc::new(scores),
            Err(e) => warn!(error = %e, "Failed to read cached scores"),
        }
        match self.db.get_students() {
            Ok(students) => self.students = students,
            Err(e) => warn!(error = %e, "Failed to read cached students"),
        }
        self.season_label = self.db.season_label().ok().flatten();
        self.imported_at = self.db.imported_at().ok().flatten();
    }

    pub fn is_reloading(&self) -> bool {
        self.reload_rx.is_some()
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            view_mode: self.view_mode,
            data_source: self.saved_source.clone(),
        };
        settings.save(&self.data_dir);
    }
}
