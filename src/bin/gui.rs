//! Native desktop launcher for the dashboard.
//!
//! Run with: cargo run --features gui --bin explorer-gui

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use dataviz_explorer::app::ExplorerApp;

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_title("DataViz Explorer"),
        ..Default::default()
    };

    eframe::run_native(
        "DataViz Explorer",
        options,
        Box::new(|cc| Ok(Box::new(ExplorerApp::new(cc)))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {}
