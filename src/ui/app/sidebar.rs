//! Sidebar controls: week name, palette, font size, and the three actions.

use super::{PlannerApp, MAX_FONT_PX, MIN_FONT_PX};
use crate::models::grid::WeekGrid;
use crate::services::palette::PALETTE_NAMES;

impl PlannerApp {
    pub(super) fn render_sidebar(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("controls")
            .default_width(230.0)
            .min_width(200.0)
            .resizable(true)
            .show(ctx, |ui| {
                ui.heading("⚙️ Paramètres");
                ui.add_space(8.0);

                ui.label("Nom de la semaine");
                ui.text_edit_singleline(&mut self.week_name);
                ui.add_space(8.0);

                ui.label("Palette de couleurs");
                egui::ComboBox::from_id_source("palette_choice")
                    .selected_text(self.palette_name.clone())
                    .width(180.0)
                    .show_ui(ui, |ui| {
                        for name in PALETTE_NAMES {
                            ui.selectable_value(&mut self.palette_name, name.to_string(), name);
                        }
                    });
                ui.add_space(8.0);

                ui.label("Taille du texte (px)");
                ui.add(egui::Slider::new(&mut self.font_px, MIN_FONT_PX..=MAX_FONT_PX));

                ui.add_space(12.0);
                ui.separator();
                ui.add_space(8.0);

                if ui.button("➕ Créer semaine vide").clicked() {
                    self.create_week();
                }
                ui.add_space(4.0);
                if ui.button("📂 Charger").clicked() {
                    self.load_week();
                }
                ui.add_space(4.0);
                if ui.button("💾 Sauvegarder").clicked() {
                    self.save_week();
                }
            });
    }

    /// Create = persist a blank grid under the current name. The session
    /// grid is left untouched until the user loads it explicitly.
    fn create_week(&mut self) {
        match self.store.save(&self.week_name, &WeekGrid::blank()) {
            Ok(()) => {
                self.toasts
                    .success(format!("Semaine '{}' créée.", self.week_name));
            }
            Err(err) => {
                log::error!("Failed to create week '{}': {:?}", self.week_name, err);
                self.toasts.error(format!("Création impossible : {}", err));
            }
        }
    }

    fn load_week(&mut self) {
        match self.store.load(&self.week_name) {
            Ok(grid) => {
                self.grid = grid;
                self.toasts
                    .success(format!("Semaine '{}' chargée.", self.week_name));
            }
            Err(err) => {
                log::error!("Failed to load week '{}': {:?}", self.week_name, err);
                self.toasts.error(format!("Chargement impossible : {}", err));
            }
        }
    }

    fn save_week(&mut self) {
        match self.store.save(&self.week_name, &self.grid) {
            Ok(()) => {
                self.toasts
                    .success(format!("Semaine '{}' sauvegardée.", self.week_name));
            }
            Err(err) => {
                log::error!("Failed to save week '{}': {:?}", self.week_name, err);
                self.toasts.error(format!("Sauvegarde impossible : {}", err));
            }
        }
    }
}
