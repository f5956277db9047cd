//! Background scene methods for `DetectorApp`.

use eframe::egui;

use cringe_detector::scene::SceneContext;

use super::DetectorApp;

impl DetectorApp {
    /// Rebuild the scene when the panel's score differs from the one the
    /// current scene was built for. The old scene is disposed first.
    pub fn sync_scene(&mut self) {
        let score = self.panel.score();
        if self.scene.is_some() && self.scene_score == score {
            return;
        }

        if let Some(mut old) = self.scene.take() {
            old.dispose();
        }
        self.scene = Some(SceneContext::build(score, &self.scene_setup, &mut self.rng));
        self.scene_score = score;
    }

    /// Advance and paint the scene behind everything else.
    pub fn draw_background(&mut self, ctx: &egui::Context) {
        self.sync_scene();

        let rect = ctx.screen_rect();
        let painter = ctx.layer_painter(egui::LayerId::background());
        let time = self.app_start.elapsed().as_secs_f32();

        if let Some(scene) = self.scene.as_mut() {
            scene.tick(time);
            self.painter.paint(ctx, &painter, rect, scene);
        }
    }
}
