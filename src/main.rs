//! Hyperloop Route Plotter.
//!
//! Rendert die Bézier-Kurve einer Hyperloop-Routen-Lösung als annotiertes
//! Plot-Bild (`plot.png`) und gibt die abgetasteten Kurvenpunkte auf
//! stdout aus.

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!(
        "Hyperloop Route Plotter v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    hyperloop_route_plotter::run()
}
