//! Sidebar navigation: the five-purpose radio selector.

use eframe::egui::{self, RichText};

use super::ExplorerApp;
use crate::core::Purpose;
use crate::theme::accent32;

impl ExplorerApp {
    pub(crate) fn render_sidebar(&mut self, ctx: &egui::Context) {
        let theme = self.theme.clone();
        egui::SidePanel::left("purpose_selector")
            .default_width(260.0)
            .resizable(false)
            .frame(
                egui::Frame::new()
                    .fill(theme.bg.color32())
                    .inner_margin(12.0),
            )
            .show(ctx, |ui| {
                ui.label(
                    RichText::new("\u{25b8} DATAVIZ EXPLORER")
                        .color(accent32())
                        .monospace()
                        .size(12.0),
                );
                ui.separator();

                ui.label(
                    RichText::new("Select Chart Purpose")
                        .color(theme.text_muted.color32())
                        .size(11.0),
                );
                ui.add_space(4.0);
                for purpose in Purpose::ALL {
                    ui.radio_value(&mut self.purpose, purpose, purpose.selector_label());
                }

                ui.separator();
                ui.label(
                    RichText::new("Built with egui + egui_plot")
                        .color(theme.text_muted.color32())
                        .small(),
                );
            });
    }
}
