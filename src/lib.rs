//! DataViz Explorer: a single-page dashboard of five chart purposes.
//!
//! A sidebar selector switches between five canned visualizations (horizontal
//! bar, treemap + sunburst, time-series area, choropleth, bubble scatter),
//! each bound to a hardcoded or seeded-synthetic dataset with a row of
//! summary metric tiles. The `core` module is renderer-agnostic and compiles
//! without any GUI dependency; the egui shell binds it to egui_plot.

pub mod core;
pub mod render;
pub mod theme;

#[cfg(feature = "gui")]
pub mod app;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
mod web {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    use crate::app::ExplorerApp;

    #[wasm_bindgen(start)]
    pub fn main() {
        console_error_panic_hook::set_once();

        // Route tracing to the browser console
        tracing_wasm::set_as_global_default();

        let web_options = eframe::WebOptions::default();

        wasm_bindgen_futures::spawn_local(async {
            let canvas = web_sys::window()
                .expect("no window")
                .document()
                .expect("no document")
                .get_element_by_id("canvas")
                .expect("no canvas element")
                .dyn_into::<web_sys::HtmlCanvasElement>()
                .expect("not a canvas element");

            eframe::WebRunner::new()
                .start(
                    canvas,
                    web_options,
                    Box::new(|cc| Ok(Box::new(ExplorerApp::new(cc)))),
                )
                .await
                .expect("Failed to start eframe");
        });
    }
}
