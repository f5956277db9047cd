//! Scoring methods for `DetectorApp`.
//!
//! Covers the asynchronous request lifecycle (`submit`, `check_score`) and
//! the alert raised when a request fails.

use std::sync::{mpsc, Arc};

use eframe::egui;

use cringe_detector::error::ScoreError;

use super::DetectorApp;

impl DetectorApp {
    /// Start an async scoring request for the current text.
    pub fn submit(&mut self, ctx: &egui::Context) {
        let Some(text) = self.panel.begin_submit() else {
            return;
        };

        let (tx, rx) = mpsc::channel();
        self.score_rx = Some(rx);

        let scorer = Arc::clone(&self.scorer);
        let ctx = ctx.clone();

        std::thread::spawn(move || {
            let result = scorer.score(&text);
            let _ = tx.send(result);
            ctx.request_repaint();
        });
    }

    /// Poll the scoring channel and hand the answer to the panel.
    pub fn check_score(&mut self) {
        if let Some(rx) = &self.score_rx {
            let result = match rx.try_recv() {
                Ok(result) => result,
                Err(mpsc::TryRecvError::Empty) => return,
                Err(mpsc::TryRecvError::Disconnected) => Err(ScoreError::Decode(
                    "scoring worker exited without an answer".to_string(),
                )),
            };
            self.panel.finish(result);
            self.score_rx = None;
        }
    }

    /// Show the pending alert until the user dismisses it.
    pub fn draw_alert(&mut self, ctx: &egui::Context) {
        if let Some(message) = self.panel.take_alert() {
            self.alert = Some(message);
        }
        let Some(message) = self.alert else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new("Alert")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });

        if dismissed {
            self.alert = None;
        }
    }
}
