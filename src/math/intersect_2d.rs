use super::{Point2, Vector2, TOLERANCE};

/// Linear interpolation: `origin + dir * t`.
#[must_use]
pub fn point_at(origin: &Point2, dir: &Vector2, t: f64) -> Point2 {
    Point2::new(origin.x + dir.x * t, origin.y + dir.y * t)
}

/// Analytic intersection of the infinite line `origin + t * dir` with a circle.
///
/// Returns `(point, t)` pairs sorted by ascending `t`: none when the line misses,
/// one when it is tangent (within [`TOLERANCE`]), two otherwise. A zero-length
/// direction or a non-positive radius yields no intersections.
#[must_use]
pub fn circle_line_intersect_2d(
    center: &Point2,
    radius: f64,
    origin: &Point2,
    dir: &Vector2,
) -> Vec<(Point2, f64)> {
    let mut results = Vec::new();
    let a = dir.norm_squared();
    if radius < TOLERANCE || a < TOLERANCE * TOLERANCE {
        return results;
    }

    // |origin + t*dir - center|² = r²
    let f = origin - center;
    let b = 2.0 * f.dot(dir);
    let c = f.norm_squared() - radius * radius;
    let discriminant = b * b - 4.0 * a * c;

    // Scale-aware tangency band on the discriminant.
    let band = TOLERANCE * 4.0 * a * radius;
    if discriminant < -band {
        return results;
    }
    if discriminant <= band {
        let t = -b / (2.0 * a);
        results.push((point_at(origin, dir, t), t));
        return results;
    }

    let disc_sqrt = discriminant.sqrt();
    // Numerically stable root pair.
    let q = -0.5 * (b + b.signum() * disc_sqrt);
    let (mut t0, mut t1) = if q == 0.0 {
        let t = disc_sqrt / (2.0 * a);
        (-t, t)
    } else {
        (q / a, c / q)
    };
    if t0 > t1 {
        std::mem::swap(&mut t0, &mut t1);
    }
    results.push((point_at(origin, dir, t0), t0));
    results.push((point_at(origin, dir, t1), t1));
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_at_interpolation() {
        let origin = Point2::new(1.0, 2.0);
        let dir = Vector2::new(4.0, 6.0);
        let pt = point_at(&origin, &dir, 0.5);
        assert!((pt.x - 3.0).abs() < TOLERANCE);
        assert!((pt.y - 5.0).abs() < TOLERANCE);
    }

    #[test]
    fn line_through_center_two_hits() {
        let hits = circle_line_intersect_2d(
            &Point2::origin(),
            1.0,
            &Point2::new(-2.0, 0.0),
            &Vector2::new(1.0, 0.0),
        );
        assert_eq!(hits.len(), 2, "hits={hits:?}");
        assert!((hits[0].0.x + 1.0).abs() < 1e-9);
        assert!((hits[1].0.x - 1.0).abs() < 1e-9);
        assert!((hits[0].1 - 1.0).abs() < 1e-9);
        assert!((hits[1].1 - 3.0).abs() < 1e-9);
    }

    #[test]
    fn tangent_line_single_hit() {
        let hits = circle_line_intersect_2d(
            &Point2::origin(),
            1.0,
            &Point2::new(-1.0, 1.0),
            &Vector2::new(2.0, 0.0),
        );
        assert_eq!(hits.len(), 1, "hits={hits:?}");
        assert!(hits[0].0.x.abs() < 1e-6);
        assert!((hits[0].0.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn missing_line() {
        let hits = circle_line_intersect_2d(
            &Point2::new(5.0, 5.0),
            1.0,
            &Point2::origin(),
            &Vector2::new(1.0, 0.0),
        );
        assert!(hits.is_empty());
    }

    #[test]
    fn diagonal_offset_circle() {
        let center = Point2::new(2.0, 3.0);
        let hits = circle_line_intersect_2d(
            &center,
            2.0,
            &Point2::new(0.0, 1.0),
            &Vector2::new(1.0, 1.0),
        );
        assert_eq!(hits.len(), 2);
        for (p, _) in &hits {
            assert!(((p - center).norm() - 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn zero_direction_yields_nothing() {
        let hits = circle_line_intersect_2d(
            &Point2::origin(),
            1.0,
            &Point2::origin(),
            &Vector2::zeros(),
        );
        assert!(hits.is_empty());
    }
}
