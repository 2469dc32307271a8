//! Eingebettete Routen-Lösung.
//!
//! Die Kontrollpunkte stammen aus dem Strecken-Optimierer und sind hier
//! als Konstante hinterlegt; es gibt bewusst keine Konfigurationsdatei
//! und keine CLI-Parameter.

use glam::Vec2;

/// Name der Route für die Titel-Bar.
pub const ROUTE_NAME: &str = "Hyperloop-Route";

/// Ausgabedatei für das gerenderte Plot. Wird bei jedem Lauf überschrieben.
pub const PLOT_FILE: &str = "plot.png";

/// Anzahl der Kurvenpunkte für den stdout-Dump.
pub const SAMPLE_DUMP_COUNT: usize = 100;

/// Lösungs-Kontrollpunkte der Route, Koordinaten in Metern.
///
/// Acht Punkte → Bézier-Kurve vom Grad 7.
pub const SOLUTION_POINTS: [Vec2; 8] = [
    Vec2::new(-119.002, 35.0017),
    Vec2::new(-118.08, 34.1428),
    Vec2::new(-118.89, 34.8503),
    Vec2::new(-118.864, 34.8639),
    Vec2::new(-118.769, 34.8672),
    Vec2::new(-118.902, 34.9447),
    Vec2::new(-118.941, 34.8525),
    Vec2::new(-118.373, 34.2831),
];
