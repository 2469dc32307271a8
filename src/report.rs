//! Kennzahlen einer Route und deren Text-Darstellung.

use std::io::Write;

use glam::Vec2;
use hyperloop_route_engine::travel;

/// Abgeleitete Kennzahlen einer Route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteReport {
    /// Streckenlänge in Metern
    pub distance: f32,
    /// Reisezeit in Minuten bei 95% Mach 1
    pub travel_minutes: f32,
}

impl RouteReport {
    /// Berechnet den Bericht für eine Streckenlänge.
    pub fn for_distance(distance: f32) -> Self {
        Self {
            distance,
            travel_minutes: travel::travel_time_minutes(distance),
        }
    }

    /// Textzeile für die Reisezeit.
    pub fn time_line(&self) -> String {
        format!("Reisezeit bei Mach 1: {:.3} Minuten", self.travel_minutes)
    }

    /// Textzeile für die Streckenlänge.
    pub fn distance_line(&self) -> String {
        format!("Strecke: {:.1} Meter", self.distance)
    }
}

/// Schreibt abgetastete Kurvenpunkte als `[x, y],`-Zeilen.
///
/// Eine Zeile pro Punkt, direkt kopierbar in ein Array-Literal.
/// Bewusst kein JSON/CSV.
pub fn write_sample_dump(out: &mut impl Write, points: &[Vec2]) -> std::io::Result<()> {
    for p in points {
        writeln!(out, "[{}, {}],", p.x, p.y)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_report_formula() {
        let report = RouteReport::for_distance(32585.0);
        // 32585 / (0.95 · 343) = 100 s
        assert_relative_eq!(report.travel_minutes, 100.0 / 60.0, epsilon = 1e-5);
    }

    #[test]
    fn test_lines_contain_values() {
        let report = RouteReport::for_distance(1000.0);
        assert!(report.distance_line().contains("1000.0"));
        assert!(report.time_line().contains("Minuten"));
    }

    #[test]
    fn test_sample_dump_format() {
        let points = vec![Vec2::new(1.5, -2.0), Vec2::new(0.0, 3.25)];
        let mut buffer = Vec::new();
        write_sample_dump(&mut buffer, &points).unwrap();

        let dump = String::from_utf8(buffer).unwrap();
        assert_eq!(dump, "[1.5, -2],\n[0, 3.25],\n");
    }
}
