//! Read-only color-coded rendering of the week grid.
//!
//! [`build_preview`] is a pure derivation step: it snapshots the grid into a
//! styled table without touching session state, so the drawing code (and
//! tests) consume a value that cannot mutate the grid.

use egui::{Color32, RichText};
use egui_extras::{Column, TableBuilder};

use crate::models::grid::WeekGrid;
use crate::services::palette::{CellStyle, Palette};

#[derive(Debug, Clone, PartialEq)]
pub struct PreviewCell {
    pub text: String,
    pub style: CellStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PreviewRow {
    pub slot: String,
    pub cells: Vec<PreviewCell>,
}

/// Presentation-only snapshot of a grid under one palette and font size.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewTable {
    pub days: Vec<String>,
    pub rows: Vec<PreviewRow>,
    pub font_px: f32,
}

/// Derive the styled display table for `grid` under the named palette.
/// Unknown palette names fall back to the default palette.
pub fn build_preview(grid: &WeekGrid, palette_name: &str, font_px: f32) -> PreviewTable {
    let palette = Palette::resolve(palette_name);
    let rows = grid
        .rows()
        .map(|(slot, cells)| PreviewRow {
            slot: slot.to_string(),
            cells: cells
                .iter()
                .map(|text| PreviewCell {
                    text: text.clone(),
                    style: CellStyle::for_text(text, &palette),
                })
                .collect(),
        })
        .collect();

    PreviewTable {
        days: grid.day_labels().to_vec(),
        rows,
        font_px,
    }
}

const LABEL_BG: Color32 = Color32::from_rgb(0xFA, 0xFA, 0xFA);
const MAX_TABLE_HEIGHT: f32 = 420.0;

/// Draw a preview table. The table scrolls within its own region so the
/// header row stays visible; the slot-label column never scrolls away.
pub fn show_preview(ui: &mut egui::Ui, table: &PreviewTable) {
    let row_height = table.font_px + 16.0;

    TableBuilder::new(ui)
        .column(Column::auto().at_least(70.0))
        .columns(Column::remainder().at_least(90.0), table.days.len())
        .vscroll(true)
        .max_scroll_height(MAX_TABLE_HEIGHT)
        .header(row_height, |mut header| {
            header.col(|ui| {
                paint_cell_background(ui, LABEL_BG);
                ui.label(RichText::new("Heure").strong().size(table.font_px));
            });
            for day in &table.days {
                header.col(|ui| {
                    paint_cell_background(ui, LABEL_BG);
                    ui.label(RichText::new(day).strong().size(table.font_px));
                });
            }
        })
        .body(|mut body| {
            for row in &table.rows {
                body.row(row_height, |mut table_row| {
                    table_row.col(|ui| {
                        paint_cell_background(ui, LABEL_BG);
                        ui.label(RichText::new(&row.slot).strong().size(table.font_px));
                    });
                    for cell in &row.cells {
                        table_row.col(|ui| {
                            paint_cell_background(ui, cell.style.background);
                            let mut text = RichText::new(&cell.text)
                                .size(table.font_px)
                                .color(cell.style.text);
                            if cell.style.bold {
                                text = text.strong();
                            }
                            ui.label(text);
                        });
                    }
                });
            }
        });
}

fn paint_cell_background(ui: &mut egui::Ui, color: Color32) {
    ui.painter()
        .rect_filled(ui.available_rect_before_wrap(), 0.0, color);
}
