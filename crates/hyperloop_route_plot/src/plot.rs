//! Plot-Montage: Viewport, Kurvenzug, Marker, Annotation und Titel.
//!
//! Kombiniert die abgetastete Routen-Kurve mit optionalen Overlays
//! zu einem fertigen Plot-Bild.

use anyhow::{Result, ensure};
use glam::Vec2;
use image::{Rgb, RgbImage};

use crate::text;
use crate::theme;

/// Anzahl Gitterzellen je Achse.
const GRID_DIVISIONS: u32 = 10;

/// Optionen für die Plot-Generierung.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotOptions {
    /// Bildbreite in Pixeln
    pub width: u32,
    /// Bildhöhe in Pixeln
    pub height: u32,
    /// Rand zwischen Zeichenfläche und Bildkante in Pixeln
    pub margin: u32,
    /// Anzahl Kurven-Samples für den Linienzug
    pub curve_samples: usize,
    /// Gitter einzeichnen
    pub grid: bool,
    /// Kontrollpunkt-Marker mit Index-Labels einzeichnen
    pub control_markers: bool,
    /// Kontrollpolygon einzeichnen
    pub control_polygon: bool,
    /// Annotations-Box (Reisezeit, Strecke) einzeichnen
    pub annotations: bool,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 900,
            margin: 60,
            curve_samples: 3700,
            grid: true,
            control_markers: true,
            control_polygon: true,
            annotations: true,
        }
    }
}

/// Abbildung von Welt-Koordinaten auf Pixel-Koordinaten.
///
/// Gleiche Skalierung auf beiden Achsen (keine Verzerrung), Zeichenfläche
/// wird im Rand-Bereich zentriert. Die Welt-Y-Achse zeigt nach oben, die
/// Bild-Y-Achse nach unten; `to_pixel` spiegelt deshalb Y.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    /// Linke untere Welt-Ecke
    min: Vec2,
    /// Pixel pro Welt-Einheit
    scale: f32,
    /// Pixel-Position der linken oberen Ecke des genutzten Bereichs
    offset: Vec2,
    /// Genutzter Zeichenbereich in Pixeln
    span_px: Vec2,
}

impl Viewport {
    /// Berechnet den Viewport für eine Punktmenge.
    pub fn fit(points: &[Vec2], width: u32, height: u32, margin: u32) -> Result<Self> {
        ensure!(!points.is_empty(), "Viewport braucht mindestens einen Punkt");
        ensure!(
            2 * margin < width && 2 * margin < height,
            "Rand {}px passt nicht in {}x{}px",
            margin,
            width,
            height
        );

        let mut min = points[0];
        let mut max = points[0];
        for p in points {
            min = min.min(*p);
            max = max.max(*p);
        }
        // Entartete Ausdehnung abfangen (einzelner Punkt, exakt achsenparallele Route)
        let span = (max - min).max(Vec2::splat(1e-6));

        let avail = Vec2::new((width - 2 * margin) as f32, (height - 2 * margin) as f32);
        let scale = (avail.x / span.x).min(avail.y / span.y);
        let span_px = span * scale;
        let offset = Vec2::splat(margin as f32) + (avail - span_px) * 0.5;

        Ok(Self {
            min,
            scale,
            offset,
            span_px,
        })
    }

    /// Rechnet einen Weltpunkt in (Sub-)Pixel-Koordinaten um.
    pub fn to_pixel(&self, p: Vec2) -> Vec2 {
        let rel = (p - self.min) * self.scale;
        Vec2::new(self.offset.x + rel.x, self.offset.y + self.span_px.y - rel.y)
    }
}

/// Rendert das Routen-Plot als RGB-Bild.
///
/// `eval` wertet die Kurve bei t ∈ [0, 1] aus; abgetastet wird mit
/// `options.curve_samples` gleichmäßig verteilten Parametern. Die
/// Kontrollpunkte gehen in Marker, Kontrollpolygon und Viewport ein.
pub fn render_route_plot(
    eval: impl Fn(f32) -> Vec2,
    control_points: &[Vec2],
    title: &str,
    annotation_lines: &[String],
    options: &PlotOptions,
) -> Result<RgbImage> {
    ensure!(
        options.curve_samples >= 2,
        "Plot braucht mindestens 2 Kurven-Samples"
    );

    let divisor = (options.curve_samples - 1) as f32;
    let curve_points: Vec<Vec2> = (0..options.curve_samples)
        .map(|i| eval(i as f32 / divisor))
        .collect();

    // Kontrollpolygon kann über die Kurve hinausragen → beides einpassen
    let mut extent = curve_points.clone();
    extent.extend_from_slice(control_points);
    let viewport = Viewport::fit(&extent, options.width, options.height, options.margin)?;

    let mut image = RgbImage::from_pixel(options.width, options.height, theme::BACKGROUND);

    if options.grid {
        draw_grid(&mut image, options.margin);
    }

    if options.control_polygon && control_points.len() >= 2 {
        let polygon_px: Vec<Vec2> = control_points.iter().map(|p| viewport.to_pixel(*p)).collect();
        draw_polyline(&mut image, &polygon_px, 0, theme::CONTROL_POLYGON);
    }

    let curve_px: Vec<Vec2> = curve_points.iter().map(|p| viewport.to_pixel(*p)).collect();
    draw_polyline(&mut image, &curve_px, 1, theme::CURVE);
    log::debug!("Kurvenzug mit {} Samples gezeichnet", curve_px.len());

    if options.control_markers {
        let marker_px: Vec<Vec2> = control_points.iter().map(|p| viewport.to_pixel(*p)).collect();
        draw_control_markers(&mut image, &marker_px);
    }

    if options.annotations {
        draw_annotation_block(&mut image, annotation_lines);
    }

    draw_title_bar(&mut image, title);

    Ok(image)
}

// ── Zeichenroutinen ─────────────────────────────────────────────────

/// Zeichnet ein gleichmäßiges Gitter über die Zeichenfläche.
fn draw_grid(image: &mut RgbImage, margin: u32) {
    let inner_w = image.width() - 2 * margin;
    let inner_h = image.height() - 2 * margin;

    for i in 0..=GRID_DIVISIONS {
        let x = margin + i * inner_w / GRID_DIVISIONS;
        draw_rect_filled(image, x as i32, margin as i32, 1, inner_h, theme::GRID);

        let y = margin + i * inner_h / GRID_DIVISIONS;
        draw_rect_filled(image, margin as i32, y as i32, inner_w, 1, theme::GRID);
    }
}

/// Zeichnet Kontrollpunkt-Marker mit Index-Labels (P0, P1, ...).
fn draw_control_markers(image: &mut RgbImage, points_px: &[Vec2]) {
    let radius = (image.width() / 300).max(3) as i32;
    let scale = (image.width() / 1200).clamp(1, 2);

    for (i, p) in points_px.iter().enumerate() {
        let cx = p.x.round() as i32;
        let cy = p.y.round() as i32;

        // Marker mit hellem Ring, damit er auf dem Kurvenzug lesbar bleibt
        draw_filled_circle(image, cx, cy, radius + 1, theme::CONTROL_POINT_OUTLINE);
        draw_filled_circle(image, cx, cy, radius, theme::CONTROL_POINT);

        let label = format!("P{i}");
        text::draw_text_outlined(
            image,
            cx + radius + 3,
            cy - radius,
            &label,
            theme::TEXT_DARK,
            theme::CONTROL_POINT_OUTLINE,
            scale,
        );
    }
}

/// Zeichnet die Annotations-Box unten links, eine Textzeile pro Eintrag.
fn draw_annotation_block(image: &mut RgbImage, lines: &[String]) {
    if lines.is_empty() {
        return;
    }

    let scale = (image.width() / 1200).clamp(1, 3);
    let padding = (6 * scale) as i32;
    let row_h = (text::text_height(scale) + 4 * scale) as i32;

    let text_w = lines
        .iter()
        .map(|l| text::text_width(l, scale))
        .max()
        .unwrap_or(0);
    let box_w = text_w + 2 * padding as u32;
    let box_h = lines.len() as i32 * row_h + 2 * padding;

    let bx = 20;
    let by = image.height() as i32 - box_h - 20;

    draw_rect_blended(image, bx, by, box_w, box_h as u32, theme::PANEL, 0.78);

    let mut ty = by + padding;
    for line in lines {
        text::draw_text(image, bx + padding, ty, line, theme::TEXT_LIGHT, scale);
        ty += row_h;
    }
}

/// Zeichnet die Titel-Bar am oberen Bildrand.
fn draw_title_bar(image: &mut RgbImage, title: &str) {
    let scale = (image.width() / 800).clamp(1, 4);
    let bar_h = text::text_height(scale) + scale * 6;

    draw_rect_blended(image, 0, 0, image.width(), bar_h, theme::PANEL, 0.85);

    let ty = (scale * 3) as i32;
    text::draw_text_centered(
        image,
        image.width() as i32 / 2,
        ty,
        title,
        theme::TEXT_LIGHT,
        scale,
    );
}

/// Zeichnet eine Polyline in Pixel-Koordinaten.
///
/// `radius` 0 ergibt eine 1px-Linie, größere Werte stempeln Scheibchen.
fn draw_polyline(image: &mut RgbImage, points: &[Vec2], radius: i32, color: Rgb<u8>) {
    for pair in points.windows(2) {
        draw_segment(image, pair[0], pair[1], radius, color);
    }
}

/// Zeichnet ein Liniensegment durch dichtes Abtasten (halbe Pixel-Schritte).
fn draw_segment(image: &mut RgbImage, from: Vec2, to: Vec2, radius: i32, color: Rgb<u8>) {
    let steps = (from.distance(to) * 2.0).ceil().max(1.0) as usize;

    for i in 0..=steps {
        let p = from.lerp(to, i as f32 / steps as f32);
        let x = p.x.round() as i32;
        let y = p.y.round() as i32;

        if radius <= 0 {
            put_pixel_checked(image, x, y, color);
        } else {
            draw_filled_circle(image, x, y, radius, color);
        }
    }
}

/// Zeichnet einen gefüllten Kreis, an den Bildrändern geclippt.
fn draw_filled_circle(image: &mut RgbImage, cx: i32, cy: i32, radius: i32, color: Rgb<u8>) {
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= radius * radius {
                put_pixel_checked(image, cx + dx, cy + dy, color);
            }
        }
    }
}

/// Zeichnet ein gefülltes Rechteck, an den Bildrändern geclippt.
pub fn draw_rect_filled(image: &mut RgbImage, x: i32, y: i32, w: u32, h: u32, color: Rgb<u8>) {
    for dy in 0..h as i32 {
        for dx in 0..w as i32 {
            put_pixel_checked(image, x + dx, y + dy, color);
        }
    }
}

/// Zeichnet ein gefülltes Rechteck mit Alpha-Blending über dem Hintergrund.
pub fn draw_rect_blended(
    image: &mut RgbImage,
    x: i32,
    y: i32,
    w: u32,
    h: u32,
    color: Rgb<u8>,
    alpha: f32,
) {
    let img_w = image.width() as i32;
    let img_h = image.height() as i32;

    for dy in 0..h as i32 {
        for dx in 0..w as i32 {
            let px = x + dx;
            let py = y + dy;
            if px >= 0 && px < img_w && py >= 0 && py < img_h {
                let base = *image.get_pixel(px as u32, py as u32);
                let blended = Rgb([
                    blend_channel(base[0], color[0], alpha),
                    blend_channel(base[1], color[1], alpha),
                    blend_channel(base[2], color[2], alpha),
                ]);
                image.put_pixel(px as u32, py as u32, blended);
            }
        }
    }
}

/// Blendet zwei Farbkanäle zusammen.
fn blend_channel(base: u8, overlay: u8, alpha: f32) -> u8 {
    (base as f32 * (1.0 - alpha) + overlay as f32 * alpha).clamp(0.0, 255.0) as u8
}

/// Setzt ein Pixel mit Bounds-Check.
fn put_pixel_checked(image: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>) {
    if x >= 0 && (x as u32) < image.width() && y >= 0 && (y as u32) < image.height() {
        image.put_pixel(x as u32, y as u32, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn test_options() -> PlotOptions {
        PlotOptions {
            width: 320,
            height: 240,
            margin: 20,
            curve_samples: 200,
            ..PlotOptions::default()
        }
    }

    /// Einfache Parabel als Testkurve.
    fn parabola(t: f32) -> Vec2 {
        Vec2::new(t, t * (1.0 - t))
    }

    #[test]
    fn test_viewport_corners() {
        let points = [Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0)];
        let viewport = Viewport::fit(&points, 200, 200, 20).unwrap();

        // Quadratische Daten in quadratischer Fläche: Ecken landen auf dem Rand
        let bottom_left = viewport.to_pixel(points[0]);
        assert_relative_eq!(bottom_left.x, 20.0, epsilon = 1e-3);
        assert_relative_eq!(bottom_left.y, 180.0, epsilon = 1e-3);

        let top_right = viewport.to_pixel(points[1]);
        assert_relative_eq!(top_right.x, 180.0, epsilon = 1e-3);
        assert_relative_eq!(top_right.y, 20.0, epsilon = 1e-3);
    }

    #[test]
    fn test_viewport_flips_y() {
        let points = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0)];
        let viewport = Viewport::fit(&points, 100, 100, 10).unwrap();

        // Größeres Welt-Y → kleineres Bild-Y
        assert!(viewport.to_pixel(points[1]).y < viewport.to_pixel(points[0]).y);
    }

    #[test]
    fn test_viewport_rejects_bad_input() {
        assert!(Viewport::fit(&[], 100, 100, 10).is_err());
        assert!(Viewport::fit(&[Vec2::ZERO], 100, 100, 60).is_err());
    }

    #[test]
    fn test_viewport_degenerate_extent() {
        // Ein einzelner Punkt darf nicht durch Null teilen
        let viewport = Viewport::fit(&[Vec2::new(5.0, 5.0)], 100, 100, 10).unwrap();
        let px = viewport.to_pixel(Vec2::new(5.0, 5.0));
        assert!(px.x.is_finite() && px.y.is_finite());
    }

    #[test]
    fn test_render_dimensions_and_background() {
        let controls = [Vec2::new(0.0, 0.0), Vec2::new(0.5, 0.25), Vec2::new(1.0, 0.0)];
        let image = render_route_plot(
            parabola,
            &controls,
            "Test-Route",
            &["Zeile 1".to_string()],
            &test_options(),
        )
        .unwrap();

        assert_eq!(image.width(), 320);
        assert_eq!(image.height(), 240);
        // Ecke unten rechts bleibt Hintergrund
        assert_eq!(*image.get_pixel(319, 239), theme::BACKGROUND);
    }

    #[test]
    fn test_render_draws_curve_pixels() {
        let options = PlotOptions {
            grid: false,
            control_markers: false,
            control_polygon: false,
            annotations: false,
            ..test_options()
        };
        let image = render_route_plot(parabola, &[], "T", &[], &options).unwrap();

        let curve_pixels = image.pixels().filter(|&&p| p == theme::CURVE).count();
        assert!(curve_pixels > 100, "nur {curve_pixels} Kurven-Pixel");
    }

    #[test]
    fn test_render_deterministic() {
        let controls = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)];
        let lines = vec!["Strecke: 1.0 Meter".to_string()];

        let a = render_route_plot(parabola, &controls, "R", &lines, &test_options()).unwrap();
        let b = render_route_plot(parabola, &controls, "R", &lines, &test_options()).unwrap();
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn test_render_rejects_too_few_samples() {
        let options = PlotOptions {
            curve_samples: 1,
            ..test_options()
        };
        assert!(render_route_plot(parabola, &[], "T", &[], &options).is_err());
    }
}
