use puzzle_mc_shared::rng::RandomSource;

use crate::accumulator::RatioAccumulator;
use crate::trial::TrialGenerator;

/// Break a unit stick at two uniform points; the outcome is whether the
/// three pieces form a triangle.
#[derive(Debug, Clone, Copy, Default)]
pub struct StickTriangle;

impl StickTriangle {
    pub fn new() -> Self {
        Self
    }
}

pub fn segments(u1: f64, u2: f64) -> (f64, f64, f64) {
    let a = u1.min(u2);
    let b = (u1 - u2).abs();
    (a, b, 1.0 - a - b)
}

pub fn forms_triangle(a: f64, b: f64) -> bool {
    a < 0.5 && b < 0.5 && a + b > 0.5
}

pub fn sample_space() -> [(f64, f64); 3] {
    [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]
}

pub fn triangle_region() -> [(f64, f64); 3] {
    [(0.5, 0.0), (0.5, 0.5), (0.0, 0.5)]
}

pub fn polygon_area(vertices: &[(f64, f64)]) -> f64 {
    let n = vertices.len();
    let twice: f64 = (0..n)
        .map(|i| {
            let (x0, y0) = vertices[i];
            let (x1, y1) = vertices[(i + 1) % n];
            x0 * y1 - x1 * y0
        })
        .sum();
    twice.abs() / 2.0
}

impl TrialGenerator for StickTriangle {
    type Outcome = bool;
    type Accumulator = RatioAccumulator;

    fn name(&self) -> &'static str {
        "stick-triangle"
    }

    fn accumulator(&self) -> RatioAccumulator {
        RatioAccumulator::new()
    }

    fn generate(&self, rng: &mut RandomSource) -> bool {
        let u1 = rng.next_uniform();
        let u2 = rng.next_uniform();
        let (a, b, _) = segments(u1, u2);
        forms_triangle(a, b)
    }

    fn closed_form(&self) -> f64 {
        polygon_area(&triangle_region()) / polygon_area(&sample_space())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_sum_to_one() {
        let (a, b, c) = segments(0.7, 0.2);
        assert!((a - 0.2).abs() < 1e-12);
        assert!((b - 0.5).abs() < 1e-12);
        assert!((a + b + c - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_matches_triangle_inequality() {
        let steps = 97;
        for i in 0..steps {
            for j in 0..steps {
                let u1 = (i as f64 + 0.31) / steps as f64;
                let u2 = (j as f64 + 0.73) / steps as f64;
                let (a, b, c) = segments(u1, u2);
                let general = a < b + c && b < a + c && c < a + b;
                assert_eq!(forms_triangle(a, b), general, "u1={} u2={}", u1, u2);
            }
        }
    }

    #[test]
    fn test_known_cases() {
        // thirds
        assert!(forms_triangle(1.0 / 3.0, 1.0 / 3.0));
        // one piece longer than half
        assert!(!forms_triangle(0.1, 0.2));
        assert!(!forms_triangle(0.6, 0.1));
    }

    #[test]
    fn test_region_area_ratio() {
        assert!((polygon_area(&sample_space()) - 0.5).abs() < 1e-12);
        assert!((polygon_area(&triangle_region()) - 0.125).abs() < 1e-12);
        assert!((StickTriangle.closed_form() - 0.25).abs() < 1e-12);
    }
}
