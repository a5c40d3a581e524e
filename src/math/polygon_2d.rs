use super::Point2;

/// Computes the signed area of a planar polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Computes the vertex average of a point set.
#[must_use]
pub fn vertex_centroid_2d(points: &[Point2]) -> Point2 {
    let n = points.len();
    if n == 0 {
        return Point2::origin();
    }
    #[allow(clippy::cast_precision_loss)]
    let inv_n = 1.0 / n as f64;
    Point2::new(
        points.iter().map(|p| p.x).sum::<f64>() * inv_n,
        points.iter().map(|p| p.y).sum::<f64>() * inv_n,
    )
}

/// Removes exact duplicates while keeping the first occurrence order.
#[must_use]
pub fn dedup_exact(points: &[Point2]) -> Vec<Point2> {
    let mut out: Vec<Point2> = Vec::with_capacity(points.len());
    for p in points {
        if !out.contains(p) {
            out.push(*p);
        }
    }
    out
}

/// Orders the vertices of a convex point set counter-clockwise around their centroid.
///
/// Exact duplicates are dropped. Only meaningful for points in convex position.
#[must_use]
pub fn order_convex_ccw(points: &[Point2]) -> Vec<Point2> {
    let mut pts = dedup_exact(points);
    let c = vertex_centroid_2d(&pts);
    pts.sort_by(|a, b| {
        let ta = (a.y - c.y).atan2(a.x - c.x);
        let tb = (b.y - c.y).atan2(b.x - c.x);
        ta.total_cmp(&tb)
    });
    pts
}
