//! Metric tile row and the collapsible insight note.

use eframe::egui::{self, RichText};

use crate::core::MetricTile;
use crate::theme::Theme;

pub fn metric_row(ui: &mut egui::Ui, tiles: &[MetricTile], theme: &Theme) {
    if tiles.is_empty() {
        return;
    }

    let tile_frame = egui::Frame::new()
        .fill(theme.card.color32())
        .stroke(egui::Stroke::new(1.0, theme.border.color32()))
        .corner_radius(6.0)
        .inner_margin(10.0);

    ui.horizontal(|ui| {
        let tile_width =
            (ui.available_width() - 8.0 * (tiles.len() as f32 - 1.0)) / tiles.len() as f32;
        for tile in tiles {
            tile_frame.show(ui, |ui| {
                ui.set_width(tile_width.max(120.0));
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(&tile.label)
                            .color(theme.text_muted.color32())
                            .size(11.0),
                    );
                    ui.label(
                        RichText::new(&tile.value)
                            .color(theme.text.color32())
                            .size(18.0)
                            .strong(),
                    );
                    if let Some(delta) = &tile.delta {
                        ui.label(
                            RichText::new(delta)
                                .color(theme.positive.color32())
                                .size(11.0),
                        );
                    }
                });
            });
            ui.add_space(8.0);
        }
    });
}

pub fn insight_panel(ui: &mut egui::Ui, insight: &str, theme: &Theme) {
    egui::CollapsingHeader::new(
        RichText::new("Insight").color(theme.text_secondary.color32()),
    )
    .default_open(false)
    .show(ui, |ui| {
        ui.label(
            RichText::new(insight)
                .color(theme.text_secondary.color32())
                .size(12.0),
        );
    });
}
