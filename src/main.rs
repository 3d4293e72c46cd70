//! Headless CLI for checking the dashboard data pipeline.
//!
//! Composes every purpose (dataset -> chart spec -> metrics) without a GUI
//! and logs the results; `--json` also dumps the serialized views.
//!
//! Run with: cargo run --features cli --bin explorer-cli

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use dataviz_explorer::core::{Purpose, ViewModel, ViewOptions};
    use dataviz_explorer::theme::Theme;
    use tracing::info;
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,dataviz_explorer=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    let dump_json = std::env::args().any(|arg| arg == "--json");

    let theme = Theme::dark();
    let options = ViewOptions::default();

    for purpose in Purpose::ALL {
        let view = ViewModel::compose(purpose, &options, &theme)?;

        let traces: usize = view.figures.iter().map(|f| f.spec.traces.len()).sum();
        info!(
            purpose = ?purpose,
            figures = view.figures.len(),
            traces,
            "view composed"
        );
        for tile in &view.tiles {
            info!(
                label = %tile.label,
                value = %tile.value,
                delta = tile.delta.as_deref().unwrap_or("-"),
                "metric"
            );
        }

        if dump_json {
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
    }

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
