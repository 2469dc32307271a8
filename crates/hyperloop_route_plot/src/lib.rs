//! `hyperloop_route_plot`: Raster-Plots für Hyperloop-Routen.
//!
//! Rendert eine abgetastete Routen-Kurve als annotiertes RGB-Bild:
//! - Viewport-Anpassung mit Rand und Y-Spiegelung
//! - Gitter, Kurvenzug und Kontrollpolygon
//! - Kontrollpunkt-Marker mit Index-Labels
//! - Annotations-Box (Reisezeit, Streckenlänge) und Titel-Bar
//!
//! # Beispiel
//! ```no_run
//! use glam::Vec2;
//! use hyperloop_route_plot::{PlotOptions, render_route_plot};
//!
//! let image = render_route_plot(
//!     |t| Vec2::new(t, t * (1.0 - t)),
//!     &[Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)],
//!     "Route",
//!     &["Strecke: 1.2 Meter".to_string()],
//!     &PlotOptions::default(),
//! )?;
//! image.save("plot.png")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod plot;
pub mod text;
pub mod theme;

pub use plot::{PlotOptions, Viewport, render_route_plot};
