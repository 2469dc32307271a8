//! Bézier-Auswertung in Bernstein-Form für beliebige Grade.
//!
//! Layer-neutral: kann von `curve`, Benchmarks und Tests importiert werden
//! ohne Zirkel-Abhängigkeiten zu erzeugen.

use glam::Vec2;

/// Berechnet den Binomialkoeffizienten C(n, k).
///
/// Multiplikative Form über das kleinere k, damit die Zwischenwerte
/// klein bleiben (Overflow-Problem der naiven Fakultäten-Variante).
/// Voraussetzung: k ≤ n.
pub fn binomial_coefficient(n: usize, k: usize) -> u64 {
    let k = k.min(n - k);
    let mut result = 1u64;
    for i in 1..=k {
        // Exakt, weil das Produkt von i aufeinanderfolgenden Zahlen durch i! teilbar ist
        result = result * (n - k + i) as u64 / i as u64;
    }
    result
}

/// Liefert die komplette Koeffizientenzeile für eine Kurve vom Grad `degree`.
///
/// Eine Bézier-Kurve vom Grad n hat n + 1 Terme.
pub fn binomial_row(degree: usize) -> Vec<u64> {
    (0..=degree)
        .map(|i| binomial_coefficient(degree, i))
        .collect()
}

/// Wertet die Kurve an der Stelle `t` ∈ [0, 1] aus (explizite Bernstein-Form).
///
/// B(t) = Σ C(n,i) · (1-t)^(n-i) · t^i · P_i
///
/// `binoms` muss die Koeffizientenzeile für Grad `controls.len() - 1` sein.
/// Bei t=0 und t=1 kommen exakt der erste bzw. letzte Kontrollpunkt heraus.
pub fn bezier_point(controls: &[Vec2], binoms: &[u64], t: f32) -> Vec2 {
    let degree = controls.len() - 1;
    let inv = 1.0 - t;

    let mut point = Vec2::ZERO;
    for (i, control) in controls.iter().enumerate() {
        let basis = binoms[i] as f32 * inv.powi((degree - i) as i32) * t.powi(i as i32);
        point += *control * basis;
    }
    point
}

/// Tastet die gesamte Kurve an `count` gleichmäßig verteilten Parametern ab.
///
/// Divisor ist `count - 1`, damit der erste Punkt exakt bei t=0 und der
/// letzte exakt bei t=1 liegt.
pub fn sample_entire_curve(controls: &[Vec2], binoms: &[u64], count: usize) -> Vec<Vec2> {
    if count < 2 {
        return vec![bezier_point(controls, binoms, 0.0)];
    }

    let divisor = (count - 1) as f32;
    (0..count)
        .map(|i| bezier_point(controls, binoms, i as f32 / divisor))
        .collect()
}

/// Approximierte Länge einer Polyline.
pub fn polyline_length(points: &[Vec2]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_binomial_coefficients() {
        // Regressionswerte aus Overflow-Problemen der naiven Variante
        assert_eq!(binomial_coefficient(20, 1), 20);
        assert_eq!(binomial_coefficient(20, 10), 184756);
        assert_eq!(binomial_coefficient(20, 19), 20);
        assert_eq!(binomial_coefficient(20, 20), 1);
        assert_eq!(binomial_coefficient(30, 15), 155117520);
        assert_eq!(binomial_coefficient(40, 40), 1);
        assert_eq!(binomial_coefficient(0, 0), 1);
    }

    #[test]
    fn test_binomial_row_length() {
        // Grad n → n + 1 Koeffizienten
        assert_eq!(binomial_row(7).len(), 8);
        assert_eq!(binomial_row(1), vec![1, 1]);
        assert_eq!(binomial_row(3), vec![1, 3, 3, 1]);
    }

    #[test]
    fn test_linear_curve_is_lerp() {
        let start = Vec2::new(0.0, 0.0);
        let end = Vec2::new(1.0, 1.0);
        let controls = [start, end];
        let binoms = binomial_row(1);

        for t in [0.2, 0.5, 0.7] {
            let p = bezier_point(&controls, &binoms, t);
            let expected = start.lerp(end, t);
            assert_relative_eq!(p.x, expected.x, epsilon = 1e-6);
            assert_relative_eq!(p.y, expected.y, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_quadratic_midpoint() {
        // B(0.5) = 0.25·P0 + 0.5·P1 + 0.25·P2
        let controls = [
            Vec2::new(0.0, 0.0),
            Vec2::new(0.4, 2.1),
            Vec2::new(1.0, 1.0),
        ];
        let binoms = binomial_row(2);

        let mid = bezier_point(&controls, &binoms, 0.5);
        assert_relative_eq!(mid.x, 0.45, epsilon = 1e-6);
        assert_relative_eq!(mid.y, 1.3, epsilon = 1e-6);
    }

    #[test]
    fn test_sample_endpoints_exact() {
        let controls = [
            Vec2::new(-3.0, 2.0),
            Vec2::new(5.0, 9.0),
            Vec2::new(1.5, -4.0),
            Vec2::new(8.0, 0.5),
        ];
        let binoms = binomial_row(3);

        let samples = sample_entire_curve(&controls, &binoms, 100);
        assert_eq!(samples.len(), 100);
        // Endpunkt-Interpolation muss exakt sein, nicht nur approximativ
        assert_eq!(samples[0], controls[0]);
        assert_eq!(*samples.last().unwrap(), *controls.last().unwrap());
    }

    #[test]
    fn test_sample_tiny_count() {
        let controls = [Vec2::ZERO, Vec2::ONE];
        let binoms = binomial_row(1);

        let one = sample_entire_curve(&controls, &binoms, 1);
        assert_eq!(one, vec![Vec2::ZERO]);

        let three = sample_entire_curve(&controls, &binoms, 3);
        assert_eq!(three.len(), 3);
        assert_relative_eq!(three[1].x, 0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_polyline_length() {
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(3.0, 4.0),
            Vec2::new(3.0, 10.0),
        ];
        assert_relative_eq!(polyline_length(&points), 11.0, epsilon = 1e-5);
        assert_eq!(polyline_length(&points[..1]), 0.0);
    }
}
