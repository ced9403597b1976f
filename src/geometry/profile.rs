// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Trackriser Contributors

//! 2D cross-section utilities - circle sampling and convex hull

use nalgebra::Point2;
use std::f64::consts::PI;

/// Sample a circle of the given radius as a counter-clockwise point ring
pub fn sample_circle(radius: f64, segments: u32) -> Vec<Point2<f64>> {
    let segments = if segments > 2 { segments } else { 32 };
    (0..segments)
        .map(|i| {
            let angle = 2.0 * PI * i as f64 / segments as f64;
            Point2::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

/// Convex hull of a 2D point set (Andrew monotone chain), returned
/// counter-clockwise without the closing point
pub fn convex_hull_2d(points: &[Point2<f64>]) -> Vec<Point2<f64>> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut sorted: Vec<Point2<f64>> = points.to_vec();
    sorted.sort_by(|a, b| {
        a.x.partial_cmp(&b.x)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal))
    });
    sorted.dedup_by(|a, b| (a.x - b.x).abs() < 1e-12 && (a.y - b.y).abs() < 1e-12);

    if sorted.len() < 3 {
        return sorted;
    }

    let cross = |o: &Point2<f64>, a: &Point2<f64>, b: &Point2<f64>| {
        (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
    };

    let mut lower: Vec<Point2<f64>> = Vec::new();
    for p in &sorted {
        while lower.len() >= 2 && cross(&lower[lower.len() - 2], &lower[lower.len() - 1], p) <= 0.0
        {
            lower.pop();
        }
        lower.push(*p);
    }

    let mut upper: Vec<Point2<f64>> = Vec::new();
    for p in sorted.iter().rev() {
        while upper.len() >= 2 && cross(&upper[upper.len() - 2], &upper[upper.len() - 1], p) <= 0.0
        {
            upper.pop();
        }
        upper.push(*p);
    }

    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_ring_is_on_radius() {
        let ring = sample_circle(5.0, 16);
        assert_eq!(ring.len(), 16);
        assert!(ring.iter().all(|p| (p.coords.norm() - 5.0).abs() < 1e-9));
    }

    #[test]
    fn test_hull_of_square_with_interior_point() {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 4.0),
            Point2::new(0.0, 4.0),
            Point2::new(2.0, 2.0),
        ];
        let hull = convex_hull_2d(&points);
        assert_eq!(hull.len(), 4);
        assert!(!hull.iter().any(|p| p.x == 2.0 && p.y == 2.0));
    }

    #[test]
    fn test_hull_is_counter_clockwise() {
        let hull = convex_hull_2d(&sample_circle(3.0, 24));
        let mut area = 0.0;
        for i in 0..hull.len() {
            let j = (i + 1) % hull.len();
            area += hull[i].x * hull[j].y - hull[j].x * hull[i].y;
        }
        assert!(area > 0.0);
    }

    #[test]
    fn test_hull_of_two_offset_circles_spans_both() {
        let mut points = sample_circle(2.0, 32);
        points.extend(
            sample_circle(2.0, 32)
                .into_iter()
                .map(|p| Point2::new(p.x, p.y + 10.0)),
        );
        let hull = convex_hull_2d(&points);
        let min_y = hull.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        let max_y = hull.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
        assert!((min_y + 2.0).abs() < 1e-9);
        assert!((max_y - 12.0).abs() < 1e-9);
    }
}
