//! Routen-Kurve: Kontrollpunkte, Auswertung, Bogenlänge.

use anyhow::{Result, ensure};
use glam::Vec2;

use crate::bezier;

/// Anzahl Polylinien-Segmente für die Bogenlängen-Approximation.
const ARC_LENGTH_SEGMENTS: usize = 1024;

/// Bézier-Kurve durch die Lösungs-Kontrollpunkte einer Route.
///
/// Der Grad ist Anzahl Kontrollpunkte − 1. Die Koeffizientenzeile und die
/// Bogenlänge ändern sich nach der Konstruktion nicht mehr und werden
/// deshalb einmalig berechnet und im Struct gehalten.
#[derive(Debug, Clone)]
pub struct RouteCurve {
    /// Kontrollpunkte in Reihenfolge
    controls: Vec<Vec2>,
    /// Binomialkoeffizienten für den Kurvengrad
    binoms: Vec<u64>,
    /// Bogenlänge (Polylinien-Approximation, einmalig berechnet)
    arc_length: f32,
}

impl RouteCurve {
    /// Erstellt eine Kurve aus mindestens zwei endlichen Kontrollpunkten.
    pub fn new(controls: Vec<Vec2>) -> Result<Self> {
        ensure!(
            controls.len() >= 2,
            "Kurve braucht mindestens 2 Kontrollpunkte, hat {}",
            controls.len()
        );
        ensure!(
            controls.iter().all(|p| p.is_finite()),
            "Kontrollpunkte müssen endliche Koordinaten haben"
        );

        let binoms = bezier::binomial_row(controls.len() - 1);
        let sampled = bezier::sample_entire_curve(&controls, &binoms, ARC_LENGTH_SEGMENTS + 1);
        let arc_length = bezier::polyline_length(&sampled);

        log::debug!(
            "Kurve vom Grad {} aufgebaut, Bogenlänge {:.3}",
            controls.len() - 1,
            arc_length
        );

        Ok(Self {
            controls,
            binoms,
            arc_length,
        })
    }

    /// Grad der Kurve (Anzahl Kontrollpunkte − 1).
    pub fn degree(&self) -> usize {
        self.controls.len() - 1
    }

    /// Kontrollpunkte in Reihenfolge.
    pub fn control_points(&self) -> &[Vec2] {
        &self.controls
    }

    /// Wertet die Kurve an der Stelle `t` ∈ [0, 1] aus.
    pub fn evaluate(&self, t: f32) -> Vec2 {
        bezier::bezier_point(&self.controls, &self.binoms, t)
    }

    /// Bogenlänge in der Einheit der Kontrollpunkte.
    pub fn arc_length(&self) -> f32 {
        self.arc_length
    }

    /// `count` gleichmäßig verteilte Kurvenpunkte (t = i / (count − 1)).
    pub fn sample(&self, count: usize) -> Vec<Vec2> {
        bezier::sample_entire_curve(&self.controls, &self.binoms, count)
    }
}
