//! `hyperloop_route_engine`: Kurven-Mathematik für Hyperloop-Routen.
//!
//! Bézier-Auswertung in Bernstein-Form, Bogenlänge und Reisezeit-Abschätzung.
//! Reine Berechnung ohne I/O; das Rendern übernimmt `hyperloop_route_plot`.

pub mod bezier;
pub mod curve;
pub mod travel;

pub use curve::RouteCurve;
pub use travel::{LINE_SPEED_FACTOR, MACH1, travel_time_minutes};
