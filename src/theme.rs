//! Dark theme shared by the chart builders and the egui shell.
//!
//! The core never touches egui color types: builders embed [`Rgb`] values
//! from a single immutable [`Theme`] so chart specs stay renderer-agnostic.

use serde::{Deserialize, Serialize};

/// sRGB color, the only color representation chart specs carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b)
    }
}

/// Core palette constants, lifted from the page stylesheet.
pub mod palette {
    use super::Rgb;

    // === Backgrounds ===
    pub const BG_PRIMARY: Rgb = Rgb::new(0x0d, 0x0d, 0x0d); // page background
    pub const BG_CARD: Rgb = Rgb::new(0x16, 0x16, 0x16); // chart cards
    pub const BORDER: Rgb = Rgb::new(0x2a, 0x2a, 0x2a);
    pub const GRID: Rgb = Rgb::new(0x25, 0x25, 0x25);

    // === Text ===
    pub const TEXT_PRIMARY: Rgb = Rgb::new(0xf0, 0xf0, 0xf0);
    pub const TEXT_SECONDARY: Rgb = Rgb::new(0xaa, 0xaa, 0xaa);
    pub const TEXT_MUTED: Rgb = Rgb::new(0x88, 0x88, 0x88);

    // === Accents ===
    pub const ACCENT: Rgb = Rgb::new(0x7c, 0x6a, 0xf7); // highlight purple
    pub const ACCENT_DIM: Rgb = Rgb::new(0x3a, 0x3a, 0x5c); // non-highlighted bars
    pub const POSITIVE: Rgb = Rgb::new(0x34, 0xd3, 0x99); // metric deltas
}

/// Immutable display configuration passed into every chart builder call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub bg: Rgb,
    pub card: Rgb,
    pub border: Rgb,
    pub grid: Rgb,
    pub text: Rgb,
    pub text_secondary: Rgb,
    pub text_muted: Rgb,
    pub accent: Rgb,
    pub accent_dim: Rgb,
    pub positive: Rgb,
    /// Line colors for the three time series, in series order.
    pub series: [Rgb; 3],
    /// Alpha applied to the area fill under each series line.
    pub series_fill_alpha: f32,
    /// Low-to-high gradient for the market-cap hierarchy views.
    pub hierarchy_gradient: Vec<Rgb>,
    /// Low-to-high gradient for the choropleth.
    pub map_gradient: Vec<Rgb>,
    /// Categorical palette indexed by `Region as usize`.
    pub region_palette: [Rgb; 6],
    pub trend_line: Rgb,
    pub trend_alpha: f32,
}

impl Theme {
    /// The one shipped theme: dark page, purple accent.
    pub fn dark() -> Self {
        use palette::*;
        Self {
            bg: BG_PRIMARY,
            card: BG_CARD,
            border: BORDER,
            grid: GRID,
            text: TEXT_PRIMARY,
            text_secondary: TEXT_SECONDARY,
            text_muted: TEXT_MUTED,
            accent: ACCENT,
            accent_dim: ACCENT_DIM,
            positive: POSITIVE,
            series: [
                Rgb::new(0x7c, 0x6a, 0xf7),
                Rgb::new(0x38, 0xbd, 0xf8),
                Rgb::new(0xf4, 0x72, 0xb6),
            ],
            series_fill_alpha: 0.08,
            hierarchy_gradient: vec![
                Rgb::new(0x1a, 0x1a, 0x2e),
                Rgb::new(0x7c, 0x6a, 0xf7),
                Rgb::new(0xc4, 0xb5, 0xfd),
            ],
            map_gradient: vec![
                Rgb::new(0x1a, 0x1a, 0x2e),
                Rgb::new(0x31, 0x2e, 0x81),
                Rgb::new(0x7c, 0x6a, 0xf7),
                Rgb::new(0xc4, 0xb5, 0xfd),
                Rgb::new(0xed, 0xe9, 0xfe),
            ],
            region_palette: [
                Rgb::new(0xf4, 0x72, 0xb6), // Americas
                Rgb::new(0x7c, 0x6a, 0xf7), // Europe
                Rgb::new(0x38, 0xbd, 0xf8), // Asia
                Rgb::new(0xfb, 0x92, 0x3c), // Africa
                Rgb::new(0x34, 0xd3, 0x99), // Oceania
                Rgb::new(0xfa, 0xcc, 0x15), // Middle East
            ],
            trend_line: Rgb::new(0xff, 0xff, 0xff),
            trend_alpha: 0.19,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(feature = "gui")]
mod gui {
    use super::{palette, Rgb, Theme};
    use egui::Color32;

    impl Rgb {
        pub fn color32(self) -> Color32 {
            Color32::from_rgb(self.0, self.1, self.2)
        }

        /// Color with alpha in [0, 1], for fills and overlays.
        pub fn color32_alpha(self, alpha: f32) -> Color32 {
            let a = (alpha.clamp(0.0, 1.0) * 255.0) as u8;
            Color32::from_rgba_unmultiplied(self.0, self.1, self.2, a)
        }
    }

    /// Create the dark egui Visuals matching the theme.
    pub fn dark_visuals(theme: &Theme) -> egui::Visuals {
        let mut visuals = egui::Visuals::dark();

        visuals.panel_fill = theme.bg.color32();
        visuals.window_fill = theme.bg.color32();
        visuals.extreme_bg_color = theme.bg.color32();
        visuals.faint_bg_color = theme.card.color32();

        visuals.override_text_color = Some(theme.text.color32());

        visuals.widgets.noninteractive.bg_fill = theme.bg.color32();
        visuals.widgets.noninteractive.fg_stroke =
            egui::Stroke::new(1.0, theme.text_muted.color32());
        visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, theme.border.color32());

        visuals.widgets.inactive.bg_fill = theme.card.color32();
        visuals.widgets.inactive.fg_stroke =
            egui::Stroke::new(1.0, theme.text_secondary.color32());
        visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, theme.border.color32());
        visuals.widgets.inactive.weak_bg_fill = theme.card.color32();

        visuals.widgets.hovered.bg_fill = theme.border.color32();
        visuals.widgets.hovered.fg_stroke = egui::Stroke::new(1.0, theme.text.color32());
        visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, theme.text_muted.color32());
        visuals.widgets.hovered.weak_bg_fill = theme.border.color32();

        visuals.widgets.active.bg_fill = theme.accent_dim.color32();
        visuals.widgets.active.fg_stroke = egui::Stroke::new(1.0, theme.text.color32());
        visuals.widgets.active.bg_stroke = egui::Stroke::new(1.0, theme.accent.color32());
        visuals.widgets.active.weak_bg_fill = theme.accent_dim.color32();

        visuals.selection.bg_fill = theme.accent_dim.color32();
        visuals.selection.stroke = egui::Stroke::new(1.0, theme.accent.color32());

        visuals.hyperlink_color = theme.accent.color32();

        // Flat design, no shadows
        visuals.window_shadow = egui::Shadow::NONE;
        visuals.popup_shadow = egui::Shadow::NONE;

        visuals
    }

    /// Accent used for selector headings, mirrors `palette::ACCENT`.
    pub fn accent32() -> Color32 {
        palette::ACCENT.color32()
    }
}

#[cfg(feature = "gui")]
pub use gui::{accent32, dark_visuals};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradients_run_low_to_high() {
        let theme = Theme::dark();
        assert_eq!(theme.hierarchy_gradient.len(), 3);
        assert_eq!(theme.map_gradient.len(), 5);
        // Darkest stop first on both scales
        assert_eq!(theme.hierarchy_gradient[0], theme.map_gradient[0]);
    }

    #[test]
    fn test_theme_serializes() {
        let theme = Theme::dark();
        let json = serde_json::to_string(&theme).expect("serialize");
        let back: Theme = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.accent, theme.accent);
        assert_eq!(back.region_palette, theme.region_palette);
    }
}
