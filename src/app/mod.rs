//! DataViz Explorer egui shell.
//!
//! One synchronous recomputation per frame: the selected purpose's dataset,
//! chart spec and metric tiles are rebuilt from scratch and rendered in fixed
//! order (tag, title, chart, tiles, insight). Nothing is cached between
//! frames; determinism of the generators keeps the output stable.

mod chart;
mod sidebar;
mod tiles;

use eframe::egui::{self, RichText};
use tracing::warn;

use crate::core::{Projection, Purpose, ViewModel, ViewOptions};
use crate::theme::{accent32, dark_visuals, Theme};

pub struct ExplorerApp {
    purpose: Purpose,
    options: ViewOptions,
    /// Active tab for multi-figure purposes (treemap vs sunburst).
    figure_tab: usize,
    theme: Theme,
}

impl ExplorerApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let theme = Theme::dark();
        cc.egui_ctx.set_visuals(dark_visuals(&theme));
        Self {
            purpose: Purpose::default(),
            options: ViewOptions::default(),
            figure_tab: 0,
            theme,
        }
    }
}

impl eframe::App for ExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let previous = self.purpose;
        self.render_sidebar(ctx);
        if self.purpose != previous {
            self.figure_tab = 0;
        }

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(self.theme.bg.color32())
                    .inner_margin(16.0),
            )
            .show(ctx, |ui| {
                self.render_page(ui);
            });
    }
}

impl ExplorerApp {
    fn render_page(&mut self, ui: &mut egui::Ui) {
        ui.label(
            RichText::new(self.purpose.tag())
                .color(accent32())
                .monospace()
                .size(11.0),
        );
        ui.label(
            RichText::new(self.purpose.title())
                .color(self.theme.text.color32())
                .size(24.0)
                .strong(),
        );
        ui.label(
            RichText::new(format!(
                "Chart type: {}  /  Dataset: {}",
                self.purpose.chart_kind(),
                self.purpose.dataset_caption()
            ))
            .color(self.theme.text_muted.color32())
            .size(11.0),
        );
        ui.add_space(8.0);

        if self.purpose == Purpose::GeoSpatial {
            self.render_projection_picker(ui);
            ui.add_space(8.0);
        }

        match ViewModel::compose(self.purpose, &self.options, &self.theme) {
            Ok(view) => {
                if view.figures.len() > 1 {
                    ui.horizontal(|ui| {
                        for (i, figure) in view.figures.iter().enumerate() {
                            let selected = i == self.figure_tab;
                            let color = if selected {
                                self.theme.text.color32()
                            } else {
                                self.theme.text_muted.color32()
                            };
                            if ui
                                .selectable_label(selected, RichText::new(figure.label).color(color))
                                .clicked()
                            {
                                self.figure_tab = i;
                            }
                        }
                    });
                    ui.add_space(4.0);
                }

                let figure = &view.figures[self.figure_tab.min(view.figures.len() - 1)];
                let height = figure.spec.layout.height;
                ui.allocate_ui(
                    egui::vec2(ui.available_width(), height),
                    |ui| {
                        chart::show(ui, &figure.spec, &self.theme);
                    },
                );

                ui.add_space(10.0);
                tiles::metric_row(ui, &view.tiles, &self.theme);
                ui.add_space(10.0);
                tiles::insight_panel(ui, view.insight, &self.theme);
            }
            Err(err) => {
                // Fail-fast policy: a broken view renders as an error, never
                // as a partially drawn chart.
                warn!(error = %err, purpose = ?self.purpose, "view composition failed");
                ui.colored_label(
                    egui::Color32::from_rgb(200, 100, 100),
                    format!("View unavailable: {err}"),
                );
            }
        }
    }

    fn render_projection_picker(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new("Map Projection")
                    .color(self.theme.text_muted.color32())
                    .size(11.0),
            );
            egui::ComboBox::from_id_salt("projection")
                .selected_text(self.options.projection.label())
                .show_ui(ui, |ui| {
                    for projection in Projection::ALL {
                        ui.selectable_value(
                            &mut self.options.projection,
                            projection,
                            projection.label(),
                        );
                    }
                });
        });
    }
}
