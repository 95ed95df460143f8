//! Season reload: fetch off the UI thread, import on it

use super::App;
use crate::error::LoadError;
use crate::source::{fetch_season, DataSource};
use eframe::egui;
use std::sync::mpsc;
use tracing::{error, info, warn};

impl App {
    /// Start fetching the configured source in the background
    pub fn reload(&mut self, ctx: &egui::Context) {
        if self.is_reloading() {
            return;
        }
        let Some(source) = self.data_source.as_deref().map(DataSource::parse) else {
            self.show_toast(LoadError::NoSource.to_string(), true);
            return;
        };

        info!(source = %source, "Reloading season data");
        let (tx, rx) = mpsc::channel();
        self.reload_rx = Some(rx);

        let ctx = ctx.clone();
        std::thread::spawn(move || {
            let result = fetch_season(&source);
            if tx.send(result).is_err() {
                warn!("Reload finished after the app closed");
            }
            ctx.request_repaint();
        });
    }

    /// Pick a local season file and reload from it
    pub fn open_season_file(&mut self, ctx: &egui::Context) {
        let Some(path) = rfd::FileDialog::new()
            .set_title("Open season file")
            .add_filter("Season JSON", &["json"])
            .pick_file()
        else {
            return;
        };

        let source = path.display().to_string();
        info!(path = %source, "Season file selected");
        self.data_source = Some(source.clone());
        self.saved_source = Some(source);
        self.save_settings();
        self.reload(ctx);
    }

    /// Apply a finished background fetch, if any
    pub fn poll_reload(&mut self) {
        let Some(rx) = &self.reload_rx else {
            return;
        };
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(mpsc::TryRecvError::Empty) => return,
            Err(mpsc::TryRecvError::Disconnected) => {
                self.reload_rx = None;
                error!("Reload thread exited without a result");
                self.show_toast("Reload failed".to_string(), true);
                return;
            }
        };
        self.reload_rx = None;

        let imported = result.and_then(|season| {
            let count = self.db.replace_season(&season)?;
            Ok((count, season.season))
        });
        match imported {
            Ok((count, label)) => {
                self.refresh_from_db();
                info!(count, season = ?label, "Season data reloaded");
                self.show_toast(format!("Loaded {} students", count), false);
            }
            Err(e) => {
                error!(error = %e, "Failed to reload season data");
                self.show_toast(format!("Reload failed: {}", e), true);
            }
        }
    }

    pub fn open_data_folder(&mut self) {
        if let Err(e) = open::that(&self.data_dir) {
            warn!(error = %e, path = %self.data_dir.display(), "Failed to open data folder");
            self.show_toast("Could not open data folder".to_string(), true);
        }
    }
}
