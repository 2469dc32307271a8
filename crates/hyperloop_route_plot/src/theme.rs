//! Farbschema für Routen-Plots.
//!
//! Ordnet den Plot-Elementen feste RGB-Farben zu, damit alle
//! Zeichenroutinen dieselbe Optik verwenden.

use image::Rgb;

/// Plot-Hintergrund (helles Papiergrau).
pub const BACKGROUND: Rgb<u8> = Rgb([245, 245, 242]);

/// Gitterlinien.
pub const GRID: Rgb<u8> = Rgb([222, 222, 218]);

/// Kurvenzug der Route.
pub const CURVE: Rgb<u8> = Rgb([40, 90, 200]);

/// Kontrollpunkt-Marker.
pub const CONTROL_POINT: Rgb<u8> = Rgb([220, 50, 50]);

/// Outline um Kontrollpunkt-Marker.
pub const CONTROL_POINT_OUTLINE: Rgb<u8> = Rgb([255, 255, 255]);

/// Kontrollpolygon (Verbindungslinien der Kontrollpunkte).
pub const CONTROL_POLYGON: Rgb<u8> = Rgb([182, 182, 176]);

/// Hintergrund für Titel-Bar und Annotations-Box.
pub const PANEL: Rgb<u8> = Rgb([30, 30, 30]);

/// Text auf dunklem Panel-Hintergrund.
pub const TEXT_LIGHT: Rgb<u8> = Rgb([255, 255, 255]);

/// Beschriftung direkt auf der Zeichenfläche.
pub const TEXT_DARK: Rgb<u8> = Rgb([45, 45, 45]);
