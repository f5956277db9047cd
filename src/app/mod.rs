//! `DetectorApp` — the top-level egui application state.
//!
//! This module declares the `DetectorApp` struct and its `eframe::App` impl.
//! All other methods are split across the sibling sub-modules:
//!
//! - `scoring`    — async submit and result polling
//! - `card`       — the glass card with input, button and verdict
//! - `background` — scene lifecycle and painting

pub mod background;
pub mod card;
pub mod scoring;

use std::sync::{mpsc, Arc};
use std::time::Instant;

use eframe::egui;

use cringe_detector::config::Config;
use cringe_detector::error::ScoreResult;
use cringe_detector::net::scorer::Scorer;
use cringe_detector::panel::ScoringPanel;
use cringe_detector::render::painter::ScenePainter;
use cringe_detector::scene::{SceneContext, SceneSetup};
use cringe_detector::score::Score;

// ─── Application state ───────────────────────────────────────────────────────

pub struct DetectorApp {
    pub panel: ScoringPanel,
    pub scorer: Arc<dyn Scorer>,
    pub score_rx: Option<mpsc::Receiver<ScoreResult<Score>>>,
    /// Alert currently on screen; blocks the card until dismissed
    pub alert: Option<&'static str>,
    // Background scene
    pub scene: Option<SceneContext>,
    /// Score the current scene was built for
    pub scene_score: Option<Score>,
    pub scene_setup: SceneSetup,
    pub rng: fastrand::Rng,
    pub painter: ScenePainter,
    pub app_start: Instant,
}

impl DetectorApp {
    pub fn new(config: &Config, scorer: Arc<dyn Scorer>) -> Self {
        Self {
            panel: ScoringPanel::new(),
            scorer,
            score_rx: None,
            alert: None,
            scene: None,
            scene_score: None,
            scene_setup: SceneSetup {
                assets_dir: Some(config.assets_dir.clone()),
                ..SceneSetup::default()
            },
            rng: config.rng(),
            painter: ScenePainter::new(),
            app_start: Instant::now(),
        }
    }
}

impl eframe::App for DetectorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_score();
        self.draw_background(ctx);
        self.draw_card(ctx);
        self.draw_alert(ctx);

        // The scene animates continuously
        ctx.request_repaint();
    }
}
