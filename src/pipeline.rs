//! Plot-Pipeline: Kurve aufbauen, vermessen, rendern, speichern, ausgeben.

use anyhow::{Context, Result};
use hyperloop_route_engine::RouteCurve;
use hyperloop_route_plot::{PlotOptions, render_route_plot};

use crate::report::{self, RouteReport};
use crate::route_data;

/// Führt die komplette Plot-Pipeline einmal aus.
///
/// Ein linearer Durchlauf ohne Zustand zwischen zwei Aufrufen; einzige
/// Hinterlassenschaft ist die Plot-Datei, die jedes Mal überschrieben wird.
pub fn run() -> Result<()> {
    // 1. Kurve aus der eingebetteten Lösung
    let curve = RouteCurve::new(route_data::SOLUTION_POINTS.to_vec())?;
    log::info!(
        "Kurve vom Grad {} aus {} Kontrollpunkten aufgebaut",
        curve.degree(),
        curve.control_points().len()
    );

    // 2. Kennzahlen
    let route_report = RouteReport::for_distance(curve.arc_length());
    log::info!("{}", route_report.distance_line());
    log::info!("{}", route_report.time_line());

    // 3. Plot rendern
    let options = PlotOptions::default();
    let annotation_lines = [route_report.time_line(), route_report.distance_line()];
    let image = render_route_plot(
        |t| curve.evaluate(t),
        curve.control_points(),
        route_data::ROUTE_NAME,
        &annotation_lines,
        &options,
    )?;

    // 4. Speichern: vorhandene Datei wird ersetzt, letzter Schreiber gewinnt
    image.save(route_data::PLOT_FILE).with_context(|| {
        format!(
            "Plot konnte nicht gespeichert werden: {}",
            route_data::PLOT_FILE
        )
    })?;
    log::info!("Plot gespeichert: {}", route_data::PLOT_FILE);

    // 5. Kurvenpunkte auf stdout
    let samples = curve.sample(route_data::SAMPLE_DUMP_COUNT);
    let stdout = std::io::stdout();
    report::write_sample_dump(&mut stdout.lock(), &samples)
        .context("Kurvenpunkte konnten nicht ausgegeben werden")?;

    Ok(())
}
