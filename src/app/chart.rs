//! Bind chart specs onto egui_plot primitives.
//!
//! One spec becomes one `Plot`. Hierarchy and geo traces have no egui_plot
//! primitive, so their geometry comes from the pure `render` layouts and is
//! drawn as polygons and points.

use eframe::egui::{self, Align2, RichText};
use egui_plot::{Bar, BarChart, Legend, Line, LineStyle, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};
use tracing::warn;

use crate::core::{AxisScale, ChartSpec, HierarchyKind, Layout, Trace};
use crate::render::{geo, scale, sunburst, treemap};
use crate::theme::Theme;

/// Largest bubble radius in screen points, matching the source's size cap.
const MAX_BUBBLE_RADIUS: f32 = 25.0;

/// Sunburst ring radii: hole, sector ring, leaf ring.
const RING_RADII: [f64; 3] = [0.3, 0.65, 1.0];

pub fn show(ui: &mut egui::Ui, spec: &ChartSpec, theme: &Theme) {
    match spec.traces.first() {
        Some(Trace::HorizontalBar { .. }) => bar_chart(ui, spec, theme),
        Some(Trace::Hierarchy { .. }) => hierarchy_chart(ui, spec, theme),
        Some(Trace::FilledLine { .. }) => area_chart(ui, spec, theme),
        Some(Trace::Choropleth { .. }) => choropleth_chart(ui, spec, theme),
        Some(Trace::Bubble { .. } | Trace::TrendLine { .. }) => bubble_chart(ui, spec, theme),
        None => {}
    }
}

/// Shared plot scaffolding: static view, themed grid, optional legend.
fn base_plot(id: &str, layout: &Layout) -> Plot<'static> {
    let mut plot = Plot::new(id.to_owned())
        .show_background(false)
        .show_grid([layout.x_axis.grid, layout.y_axis.grid])
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false);
    if let Some(title) = &layout.x_axis.title {
        plot = plot.x_axis_label(title.clone());
    }
    if let Some(title) = &layout.y_axis.title {
        plot = plot.y_axis_label(title.clone());
    }
    if layout.show_legend {
        plot = plot.legend(Legend::default());
    }
    plot
}

fn bar_chart(ui: &mut egui::Ui, spec: &ChartSpec, theme: &Theme) {
    let Some(Trace::HorizontalBar {
        categories,
        values,
        highlight,
        accent,
        base,
    }) = spec.traces.first()
    else {
        return;
    };

    let bars: Vec<Bar> = values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let fill = if i == *highlight { *accent } else { *base };
            Bar::new(i as f64, value)
                .name(&categories[i])
                .fill(fill.color32())
                .stroke(egui::Stroke::new(1.0, theme.bg.color32()))
        })
        .collect();

    let names = categories.clone();
    let mut plot = base_plot("bar_chart", &spec.layout)
        .show_axes([true, true])
        .y_axis_formatter(move |mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > 0.05 || idx < 0.0 {
                return String::new();
            }
            names.get(idx as usize).cloned().unwrap_or_default()
        })
        .include_y(-0.6)
        .include_y(values.len() as f64 - 0.4);
    if let Some([lo, hi]) = spec.layout.x_axis.range {
        plot = plot.include_x(lo).include_x(hi);
    }

    plot.show(ui, |plot_ui| {
        plot_ui.bar_chart(
            BarChart::new(bars)
                .horizontal()
                .element_formatter(Box::new(|bar, _chart| {
                    format!("{} {:.1}", bar.name, bar.value)
                })),
        );
        // Score printed past the bar end, like the source's outside labels
        for (i, &value) in values.iter().enumerate() {
            plot_ui.text(
                Text::new(
                    PlotPoint::new(value + 2.0, i as f64),
                    RichText::new(format!("{value:.1}"))
                        .size(12.0)
                        .color(theme.text_secondary.color32()),
                )
                .anchor(Align2::LEFT_CENTER),
            );
        }
    });
}

fn hierarchy_chart(ui: &mut egui::Ui, spec: &ChartSpec, theme: &Theme) {
    let Some(Trace::Hierarchy {
        kind,
        sectors,
        gradient,
        domain,
    }) = spec.traces.first()
    else {
        return;
    };

    match kind {
        HierarchyKind::Treemap => {
            let bounds = treemap::Rect::new(0.0, 0.0, 100.0, 62.0);
            let laid = treemap::layout(sectors, bounds);

            Plot::new("treemap")
                .show_background(false)
                .show_grid(false)
                .show_axes([false, false])
                .allow_zoom(false)
                .allow_drag(false)
                .allow_scroll(false)
                .include_x(bounds.x)
                .include_x(bounds.x + bounds.w)
                .include_y(bounds.y)
                .include_y(bounds.y + bounds.h)
                .show(ui, |plot_ui| {
                    for leaf_rect in &laid.leaves {
                        let sector = &sectors[leaf_rect.sector];
                        let leaf = &sector.leaves[leaf_rect.leaf];
                        let fill = scale::sample_gradient(gradient, *domain, leaf.value);
                        plot_ui.polygon(
                            Polygon::new(PlotPoints::from(leaf_rect.rect.corners().to_vec()))
                                .fill_color(fill.color32())
                                .stroke(egui::Stroke::new(1.5, theme.bg.color32()))
                                .name(format!(
                                    "{} / {} ${:.0}B",
                                    sector.label, leaf.label, leaf.value
                                )),
                        );
                        // Label rectangles big enough to hold text
                        if leaf_rect.rect.w > 10.0 && leaf_rect.rect.h > 6.0 {
                            let [cx, cy] = leaf_rect.rect.center();
                            plot_ui.text(
                                Text::new(
                                    PlotPoint::new(cx, cy),
                                    RichText::new(format!("{}\n${:.0}B", leaf.label, leaf.value))
                                        .size(14.0)
                                        .color(theme.text.color32()),
                                )
                                .anchor(Align2::CENTER_CENTER),
                            );
                        }
                    }
                });
        }
        HierarchyKind::Sunburst => {
            let arcs = sunburst::layout(sectors);

            Plot::new("sunburst")
                .show_background(false)
                .show_grid(false)
                .show_axes([false, false])
                .allow_zoom(false)
                .allow_drag(false)
                .allow_scroll(false)
                .data_aspect(1.0)
                .include_x(-1.05)
                .include_x(1.05)
                .include_y(-1.05)
                .include_y(1.05)
                .show(ui, |plot_ui| {
                    for arc in &arcs {
                        let (r_inner, r_outer, label) = match arc.leaf {
                            None => {
                                let sector = &sectors[arc.sector];
                                (RING_RADII[0], RING_RADII[1], sector.label.clone())
                            }
                            Some(li) => {
                                let leaf = &sectors[arc.sector].leaves[li];
                                (RING_RADII[1], RING_RADII[2], leaf.label.clone())
                            }
                        };
                        let fill = scale::sample_gradient(gradient, *domain, arc.value);
                        plot_ui.polygon(
                            Polygon::new(PlotPoints::from(sunburst::arc_polygon(
                                arc, r_inner, r_outer, 32,
                            )))
                            .fill_color(fill.color32())
                            .stroke(egui::Stroke::new(1.5, theme.bg.color32()))
                            .name(format!("{} ${:.0}B", label, arc.value)),
                        );
                        if arc.sweep > 0.25 {
                            let mid_r = (r_inner + r_outer) / 2.0;
                            let angle = arc.mid_angle();
                            plot_ui.text(
                                Text::new(
                                    PlotPoint::new(mid_r * angle.sin(), mid_r * angle.cos()),
                                    RichText::new(label).size(12.0).color(theme.text.color32()),
                                )
                                .anchor(Align2::CENTER_CENTER),
                            );
                        }
                    }
                });
        }
    }
}

fn area_chart(ui: &mut egui::Ui, spec: &ChartSpec, theme: &Theme) {
    let plot = base_plot("area_chart", &spec.layout)
        .show_axes([true, true])
        .x_axis_formatter(|mark, _range| format_day_number(mark.value))
        .label_formatter(|name, value| {
            // Unified-hover stand-in: date plus the hovered series value
            if name.is_empty() {
                String::new()
            } else {
                format!("{}\n{} {:.1}M", format_day_number(value.x), name, value.y)
            }
        });

    plot.show(ui, |plot_ui| {
        for trace in &spec.traces {
            let Trace::FilledLine {
                name,
                points,
                color,
                fill_alpha,
            } = trace
            else {
                continue;
            };
            let line_points: Vec<[f64; 2]> = points
                .iter()
                .map(|(date, value)| [day_number(*date), *value])
                .collect();
            plot_ui.line(
                Line::new(PlotPoints::from(line_points))
                    .name(name)
                    .color(color.color32())
                    .width(2.5)
                    .fill(0.0)
                    .fill_alpha(*fill_alpha),
            );
        }
    });
}

fn choropleth_chart(ui: &mut egui::Ui, spec: &ChartSpec, theme: &Theme) {
    let Some(Trace::Choropleth {
        regions,
        gradient,
        domain,
    }) = spec.traces.first()
    else {
        return;
    };
    let projection = spec.layout.projection.unwrap_or_default();

    Plot::new("choropleth")
        .show_background(false)
        .show_grid(false)
        .show_axes([false, false])
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .data_aspect(1.0)
        .show(ui, |plot_ui| {
            for line in geo::graticule(projection) {
                plot_ui.line(
                    Line::new(PlotPoints::from(line))
                        .color(theme.border.color32())
                        .width(0.5),
                );
            }

            for region in regions {
                let Some((lon, lat)) = geo::centroid(&region.iso) else {
                    warn!(iso = %region.iso, "no centroid in the built-in geography");
                    continue;
                };
                // Far hemisphere under the orthographic globe
                let Some(position) = geo::project(projection, lon, lat) else {
                    continue;
                };
                let fill = scale::sample_gradient(gradient, *domain, region.value);
                plot_ui.points(
                    Points::new(PlotPoints::from(vec![position]))
                        .color(fill.color32())
                        .radius(6.0)
                        .filled(true)
                        .name(format!("{} {:.0}%", region.name, region.value)),
                );
            }
        });
}

fn bubble_chart(ui: &mut egui::Ui, spec: &ChartSpec, theme: &Theme) {
    let log_x = spec.layout.x_axis.scale == AxisScale::Log10;
    let to_x = move |x: f64| if log_x { x.log10() } else { x };

    let mut plot = base_plot("bubble_chart", &spec.layout).show_axes([true, true]);
    if log_x {
        plot = plot.x_axis_formatter(|mark, _range| format_power_of_ten(mark.value));
    }
    if let Some([lo, hi]) = spec.layout.y_axis.range {
        plot = plot.include_y(lo).include_y(hi);
    }

    plot.show(ui, |plot_ui| {
        for trace in &spec.traces {
            match trace {
                Trace::Bubble {
                    group,
                    color,
                    points,
                } => {
                    for point in points {
                        let radius = MAX_BUBBLE_RADIUS * (point.size.max(0.0).sqrt() as f32);
                        plot_ui.points(
                            Points::new(PlotPoints::from(vec![[to_x(point.x), point.y]]))
                                .color(color.color32_alpha(0.85))
                                .radius(radius.max(2.0))
                                .filled(true)
                                .name(group),
                        );
                        plot_ui.text(
                            Text::new(
                                PlotPoint::new(to_x(point.x), point.y),
                                RichText::new(point.label.clone())
                                    .size(9.0)
                                    .color(theme.text_secondary.color32()),
                            )
                            .anchor(Align2::CENTER_BOTTOM),
                        );
                    }
                }
                Trace::TrendLine {
                    start,
                    end,
                    color,
                    alpha,
                    ..
                } => {
                    let points = vec![[to_x(start[0]), start[1]], [to_x(end[0]), end[1]]];
                    // No name: stays out of the legend; hover disabled
                    plot_ui.line(
                        Line::new(PlotPoints::from(points))
                            .color(color.color32_alpha(*alpha))
                            .width(1.5)
                            .style(LineStyle::dotted_loose())
                            .allow_hover(false),
                    );
                }
                _ => {}
            }
        }
    });
}

fn day_number(date: chrono::NaiveDate) -> f64 {
    chrono::Datelike::num_days_from_ce(&date) as f64
}

fn format_day_number(value: f64) -> String {
    chrono::NaiveDate::from_num_days_from_ce_opt(value.round() as i32)
        .map(|date| date.format("%b %Y").to_string())
        .unwrap_or_default()
}

fn format_power_of_ten(exponent: f64) -> String {
    let value = 10.0_f64.powf(exponent);
    if value >= 1000.0 {
        format!("${:.0}k", value / 1000.0)
    } else {
        format!("${value:.0}")
    }
}
