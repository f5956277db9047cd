//! Card rendering for `DetectorApp`.
//!
//! Draws the translucent card floating over the scene: title, post editor,
//! submit button, once scored the rating and percentage, and a footer link.

use eframe::egui;
use egui::{Color32, RichText, Stroke};

use cringe_detector::panel::{CONNECT_LABEL, CONNECT_URL};

use super::DetectorApp;

const CARD_WIDTH: f32 = 576.0;
/// Tailwind blue-200, used for secondary text on the card
const SUBTLE_TEXT: Color32 = Color32::from_rgb(0xbf, 0xdb, 0xfe);
const LINKEDIN_BLUE: Color32 = Color32::from_rgb(0x0a, 0x66, 0xc2);

impl DetectorApp {
    /// Render the centered card. Disabled while an alert is open.
    pub fn draw_card(&mut self, ctx: &egui::Context) {
        let enabled = self.alert.is_none();

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                ui.add_enabled_ui(enabled, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(64.0);
                        egui::Frame::none()
                            .fill(Color32::from_white_alpha(13))
                            .stroke(Stroke::new(1.0, Color32::from_white_alpha(26)))
                            .rounding(24.0)
                            .inner_margin(egui::Margin::same(32.0))
                            .show(ui, |ui| {
                                ui.set_max_width(CARD_WIDTH);
                                self.draw_card_body(ui, ctx);
                            });
                    });
                });
            });
    }

    fn draw_card_body(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.label(
            RichText::new("Cringe or not?")
                .size(34.0)
                .strong()
                .color(Color32::WHITE),
        );
        ui.label(
            RichText::new("Check how cringe your post is! 🤣")
                .size(18.0)
                .color(SUBTLE_TEXT),
        );
        ui.add_space(24.0);

        ui.add_sized(
            [ui.available_width(), 128.0],
            egui::TextEdit::multiline(&mut self.panel.text)
                .hint_text("Write your post here...")
                .text_color(Color32::WHITE)
                .frame(true),
        );
        ui.add_space(24.0);

        let button = egui::Button::new(
            RichText::new(self.panel.button_label())
                .size(18.0)
                .strong()
                .color(Color32::WHITE),
        )
        .fill(Color32::from_white_alpha(51))
        .rounding(12.0)
        .min_size(egui::vec2(ui.available_width(), 56.0));

        if ui.add_enabled(self.panel.can_submit(), button).clicked() {
            self.submit(ctx);
        }

        let theme = self.panel.theme();
        if let (Some(label), Some(line)) = (theme.label(), self.panel.score_line()) {
            ui.add_space(24.0);
            ui.label(RichText::new(label).size(24.0).strong().color(Color32::WHITE));
            ui.label(RichText::new(line).size(16.0).color(SUBTLE_TEXT));
        }

        ui.add_space(16.0);
        ui.separator();
        ui.add_space(8.0);
        ui.vertical_centered(|ui| {
            ui.hyperlink_to(
                RichText::new(CONNECT_LABEL)
                    .size(18.0)
                    .strong()
                    .color(LINKEDIN_BLUE),
                CONNECT_URL,
            );
        });
    }
}
