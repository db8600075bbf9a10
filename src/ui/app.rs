mod editor;
mod gate;
mod sidebar;

use crate::models::grid::WeekGrid;
use crate::services::palette::DEFAULT_PALETTE;
use crate::services::secret::resolve_app_password;
use crate::services::session::SessionGate;
use crate::services::store::WeekStore;
use crate::ui::preview::{build_preview, show_preview};
use crate::ui::toast::ToastManager;
use egui::RichText;

/// Week loaded when a session starts.
pub const DEFAULT_WEEK_NAME: &str = "Semaine 1";

const DEFAULT_FONT_PX: u8 = 14;
const MIN_FONT_PX: u8 = 10;
const MAX_FONT_PX: u8 = 20;

pub struct PlannerApp {
    store: WeekStore,
    /// Edit lock; nothing below the gate renders until it opens
    gate: SessionGate,
    password_input: String,
    /// Session state: the grid being edited plus transient UI selections
    grid: WeekGrid,
    week_name: String,
    palette_name: String,
    font_px: u8,
    toasts: ToastManager,
}

impl eframe::App for PlannerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.gate.is_unlocked() {
            self.render_gate(ctx);
            // Startup failures must stay visible while the gate is locked
            self.toasts.render(ctx);
            return;
        }

        self.render_sidebar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("📅 Emploi du temps interactif — Semaine par semaine");
            ui.add_space(8.0);

            egui::ScrollArea::vertical()
                .id_source("main_scroll")
                .show(ui, |ui| {
                    ui.label(RichText::new("Édition").strong());
                    ui.add_space(4.0);
                    self.render_editor(ui);

                    ui.add_space(12.0);
                    ui.separator();
                    ui.add_space(4.0);

                    ui.label(RichText::new("Vue esthétique (couleurs par activité)").strong());
                    ui.add_space(4.0);
                    let table = build_preview(&self.grid, &self.palette_name, self.font_px as f32);
                    show_preview(ui, &table);

                    ui.add_space(12.0);
                    self.render_legend(ui);
                });
        });

        // Toasts last, so they appear on top
        self.toasts.render(ctx);
    }
}

impl PlannerApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());

        let store = WeekStore::open_default();
        let gate = SessionGate::new(resolve_app_password());
        let mut toasts = ToastManager::new();

        let week_name = DEFAULT_WEEK_NAME.to_string();
        let grid = load_startup_grid(&store, &week_name, &mut toasts);

        Self {
            store,
            gate,
            password_input: String::new(),
            grid,
            week_name,
            palette_name: DEFAULT_PALETTE.to_string(),
            font_px: DEFAULT_FONT_PX,
            toasts,
        }
    }

    fn render_legend(&self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("🎨 Légende des couleurs").show(ui, |ui| {
            ui.label("• Bleu : Cours / CM / TD");
            ui.label("• Vert : BU / Projet");
            ui.label("• Violet : Musculation");
            ui.label("• Orange : Court métrage / Club photo");
            ui.label("• Jaune : RU (repas)");
        });
    }
}

/// Load the week a session opens on.
///
/// A failure is surfaced as an error toast and the session falls back to a
/// blank in-memory grid; the stored file is left untouched so the
/// corruption stays inspectable instead of being masked.
pub fn load_startup_grid(
    store: &WeekStore,
    week_name: &str,
    toasts: &mut ToastManager,
) -> WeekGrid {
    match store.load(week_name) {
        Ok(grid) => grid,
        Err(err) => {
            log::error!("Failed to load week '{}' at startup: {:?}", week_name, err);
            toasts.error(format!("Chargement de '{}' impossible : {}", week_name, err));
            WeekGrid::blank()
        }
    }
}
