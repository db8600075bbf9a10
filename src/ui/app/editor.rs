//! Editable week grid bound directly to session state.
//!
//! The shape is fixed: users edit cell text only, never rows or columns.
//! Every keystroke writes straight back into the session grid, so the
//! preview below reflects it on the same frame.

use super::PlannerApp;
use egui::{FontId, RichText, TextEdit};

impl PlannerApp {
    pub(super) fn render_editor(&mut self, ui: &mut egui::Ui) {
        let font_px = self.font_px as f32;
        let font = FontId::proportional(font_px);
        let days = self.grid.day_labels().to_vec();
        let slot_count = self.grid.slot_labels().len();

        egui::Grid::new("week_editor")
            .num_columns(days.len() + 1)
            .striped(true)
            .spacing([4.0, 4.0])
            .show(ui, |ui| {
                ui.label(RichText::new("Heure").strong().size(font_px));
                for day in &days {
                    ui.label(RichText::new(day).strong().size(font_px));
                }
                ui.end_row();

                for slot in 0..slot_count {
                    let slot_label = self.grid.slot_labels()[slot].clone();
                    ui.label(RichText::new(slot_label).size(font_px));
                    for day in 0..days.len() {
                        ui.add(
                            TextEdit::singleline(self.grid.cell_mut(slot, day))
                                .font(font.clone())
                                .desired_width(130.0),
                        );
                    }
                    ui.end_row();
                }
            });
    }
}
