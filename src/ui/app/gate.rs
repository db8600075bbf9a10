//! Lock form shown until the session is unlocked.

use super::PlannerApp;
use egui::{Color32, TextEdit};

impl PlannerApp {
    pub(super) fn render_gate(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(120.0);
                ui.heading("📅 Emploi du temps");
                ui.add_space(16.0);
                ui.label("Mot de passe");

                let response = ui.add(
                    TextEdit::singleline(&mut self.password_input)
                        .password(true)
                        .hint_text("••••••")
                        .desired_width(200.0),
                );
                let submitted_with_enter =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                ui.add_space(8.0);
                let clicked = ui.button("Déverrouiller").clicked();

                if clicked || submitted_with_enter {
                    if self.gate.submit(&self.password_input) {
                        log::info!("Session unlocked");
                        self.toasts.success("Édition déverrouillée ✅");
                        // Restart the UI: next frame renders the editor shell
                        ctx.request_repaint();
                    }
                }

                if let Some(error) = self.gate.error() {
                    ui.add_space(8.0);
                    ui.colored_label(Color32::from_rgb(180, 40, 40), format!("❌ {}", error));
                }
            });
        });
    }
}
