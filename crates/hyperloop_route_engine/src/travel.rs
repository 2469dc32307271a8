//! Reisezeit-Abschätzung für eine Strecke bei anteiliger Schallgeschwindigkeit.

/// Schallgeschwindigkeit (Mach 1) in Einheiten pro Sekunde.
pub const MACH1: f32 = 343.0;

/// Anteil von Mach 1, mit dem die Strecke tatsächlich befahren wird.
pub const LINE_SPEED_FACTOR: f32 = 0.95;

/// Reisezeit in Minuten für eine Streckenlänge bei 95% Mach 1.
///
/// t = (Strecke / (0.95 · 343)) / 60
///
/// Keine Bereichsprüfung: negative Längen liefern negative Zeiten.
pub fn travel_time_minutes(distance: f32) -> f32 {
    (distance / (LINE_SPEED_FACTOR * MACH1)) / 60.0
}
