use crate::math::{lex_cmp, Point2, Vector2};

/// A directed segment that doubles as an oriented half-plane.
///
/// The line through `a` and `b` splits the plane; [`Edge::relative_distance`]
/// is positive on the left of `a -> b` (or on the right when the edge is
/// reversed). The distance is scaled by the segment length and is exactly
/// zero at both endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    a: Point2,
    b: Point2,
    normal: Vector2,
    reversed: bool,
}

impl Edge {
    /// Creates a directed edge whose positive side is the left of `a -> b`.
    #[must_use]
    pub fn new(a: Point2, b: Point2) -> Self {
        let d = b - a;
        Self {
            a,
            b,
            normal: Vector2::new(-d.y, d.x),
            reversed: false,
        }
    }

    /// Creates an edge with its endpoints in lexicographic order.
    ///
    /// Two calls with the same endpoints in either order produce the same edge.
    #[must_use]
    pub fn canonical(a: Point2, b: Point2) -> Self {
        if lex_cmp(&a, &b).is_gt() {
            Self::new(b, a)
        } else {
            Self::new(a, b)
        }
    }

    /// Creates an edge oriented so that `inside` has a strictly positive distance.
    ///
    /// Returns `None` when `inside` lies on the line through `a` and `b`.
    #[must_use]
    pub fn facing(a: Point2, b: Point2, inside: &Point2) -> Option<Self> {
        let edge = Self::new(a, b);
        let d = edge.relative_distance(inside);
        if d > 0.0 {
            Some(edge)
        } else if d < 0.0 {
            Some(edge.reversed())
        } else {
            None
        }
    }

    /// Returns the same segment with the opposite positive side.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            reversed: !self.reversed,
            ..*self
        }
    }

    /// Returns the start point.
    #[must_use]
    pub fn a(&self) -> Point2 {
        self.a
    }

    /// Returns the end point.
    #[must_use]
    pub fn b(&self) -> Point2 {
        self.b
    }

    /// Returns whether the positive side is the right of `a -> b`.
    #[must_use]
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Returns the segment length.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.b - self.a).norm()
    }

    /// Signed, length-scaled distance of `p` from the edge's line.
    #[must_use]
    pub fn relative_distance(&self, p: &Point2) -> f64 {
        let v = p - self.a;
        let d = self.normal.x * v.x + self.normal.y * v.y;
        if self.reversed {
            -d
        } else {
            d
        }
    }

    /// Returns whether `p` is one of the two endpoints.
    #[must_use]
    pub fn has_endpoint(&self, p: &Point2) -> bool {
        self.a == *p || self.b == *p
    }

    /// Returns whether both edges join the same two points, in any order.
    #[must_use]
    pub fn same_segment(&self, other: &Edge) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }

    /// Intersection of this segment with another segment.
    ///
    /// `None` when the endpoints of either segment do not straddle the other's
    /// line, or when the segments are collinear. An endpoint lying exactly on
    /// the other line is returned as is; otherwise the point is interpolated
    /// along this segment.
    #[must_use]
    pub fn intersect_segment(&self, other: &Edge) -> Option<Point2> {
        let d_self_a = other.relative_distance(&self.a);
        let d_self_b = other.relative_distance(&self.b);
        let d_other_a = self.relative_distance(&other.a);
        let d_other_b = self.relative_distance(&other.b);

        if same_strict_sign(d_self_a, d_self_b) || same_strict_sign(d_other_a, d_other_b) {
            return None;
        }
        if d_self_a == 0.0 && d_self_b == 0.0 && d_other_a == 0.0 && d_other_b == 0.0 {
            return None;
        }

        if d_self_a == 0.0 {
            return Some(self.a);
        }
        if d_self_b == 0.0 {
            return Some(self.b);
        }
        if d_other_a == 0.0 {
            return Some(other.a);
        }
        if d_other_b == 0.0 {
            return Some(other.b);
        }
        Some(interpolate(self.a, self.b, d_self_a, d_self_b))
    }

    /// Intersection of the segment `p -> q` with this edge's infinite line.
    ///
    /// Same straddle and snapping rules as [`Edge::intersect_segment`], using
    /// only the segment's distances to the line.
    #[must_use]
    pub fn line_crossing(&self, p: &Point2, q: &Point2) -> Option<Point2> {
        let dp = self.relative_distance(p);
        let dq = self.relative_distance(q);
        if same_strict_sign(dp, dq) || (dp == 0.0 && dq == 0.0) {
            return None;
        }
        if dp == 0.0 {
            return Some(*p);
        }
        if dq == 0.0 {
            return Some(*q);
        }
        Some(interpolate(*p, *q, dp, dq))
    }

    /// Intersection of this segment with the infinite line carried by `line`.
    #[must_use]
    pub fn intersect_line(&self, line: &Edge) -> Option<Point2> {
        line.line_crossing(&self.a, &self.b)
    }
}

fn same_strict_sign(x: f64, y: f64) -> bool {
    (x > 0.0 && y > 0.0) || (x < 0.0 && y < 0.0)
}

/// Point where the distance changes sign between `p` (distance `dp`) and `q` (`dq`).
///
/// Interpolates from the lexicographically smaller endpoint so that a shared
/// segment yields the same bits from either side.
fn interpolate(p: Point2, q: Point2, dp: f64, dq: f64) -> Point2 {
    let (from, to, d_from, d_to) = if lex_cmp(&p, &q).is_gt() {
        (q, p, dq, dp)
    } else {
        (p, q, dp, dq)
    };
    let t = d_from / (d_from - d_to);
    from + (to - from) * t
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn distance_is_zero_at_endpoints() {
        let e = Edge::new(p(0.1, 0.7), p(3.3, -2.9));
        assert_eq!(e.relative_distance(&p(0.1, 0.7)), 0.0);
        assert_eq!(e.relative_distance(&p(3.3, -2.9)), 0.0);
    }

    #[test]
    fn left_side_is_positive() {
        let e = Edge::new(p(0.0, 0.0), p(1.0, 0.0));
        assert!(e.relative_distance(&p(0.5, 1.0)) > 0.0);
        assert!(e.relative_distance(&p(0.5, -1.0)) < 0.0);
        assert!(e.reversed().relative_distance(&p(0.5, 1.0)) < 0.0);
    }

    #[test]
    fn facing_flips_to_put_point_inside() {
        let inside = p(0.5, -2.0);
        let e = Edge::facing(p(0.0, 0.0), p(1.0, 0.0), &inside).unwrap();
        assert!(e.is_reversed());
        assert!(e.relative_distance(&inside) > 0.0);
        assert!(Edge::facing(p(0.0, 0.0), p(1.0, 0.0), &p(7.0, 0.0)).is_none());
    }

    #[test]
    fn canonical_ignores_input_order() {
        let a = p(2.0, 1.0);
        let b = p(-1.0, 4.0);
        assert_eq!(Edge::canonical(a, b), Edge::canonical(b, a));
        assert_eq!(Edge::canonical(a, b).a(), b);
    }

    #[test]
    fn segments_cross_in_the_middle() {
        let e = Edge::new(p(0.0, 0.0), p(2.0, 2.0));
        let f = Edge::new(p(0.0, 2.0), p(2.0, 0.0));
        let x = e.intersect_segment(&f).unwrap();
        assert!((x - p(1.0, 1.0)).norm() < TOLERANCE);
    }

    #[test]
    fn crossing_is_independent_of_direction() {
        let e = Edge::new(p(0.1, 0.3), p(2.7, 1.9));
        let f = Edge::new(p(0.4, 2.2), p(1.9, -0.6));
        let x1 = e.intersect_segment(&f).unwrap();
        let x2 = Edge::new(e.b(), e.a()).intersect_segment(&f).unwrap();
        assert_eq!(x1, x2);
    }

    #[test]
    fn non_straddling_segments_miss() {
        let e = Edge::new(p(0.0, 0.0), p(1.0, 0.0));
        let f = Edge::new(p(0.0, 1.0), p(1.0, 1.0));
        assert!(e.intersect_segment(&f).is_none());
        let g = Edge::new(p(2.0, -1.0), p(2.0, 1.0));
        assert!(e.intersect_segment(&g).is_none());
    }

    #[test]
    fn shared_vertex_snaps_exactly() {
        let v = p(0.3, 0.7);
        let e = Edge::new(p(0.0, 0.0), v);
        let f = Edge::new(v, p(1.0, 0.1));
        assert_eq!(e.intersect_segment(&f).unwrap(), v);
    }

    #[test]
    fn endpoint_on_other_segment_snaps() {
        let e = Edge::new(p(0.0, 0.0), p(4.0, 0.0));
        let f = Edge::new(p(1.0, 0.0), p(1.0, 3.0));
        assert_eq!(e.intersect_segment(&f).unwrap(), p(1.0, 0.0));
    }

    #[test]
    fn collinear_segments_do_not_cross() {
        let e = Edge::new(p(0.0, 0.0), p(2.0, 0.0));
        let f = Edge::new(p(1.0, 0.0), p(3.0, 0.0));
        assert!(e.intersect_segment(&f).is_none());
    }

    #[test]
    fn line_crossing_ignores_segment_extent_of_line() {
        let line = Edge::new(p(0.0, 0.0), p(0.1, 0.0));
        let x = line.line_crossing(&p(5.0, -1.0), &p(5.0, 3.0)).unwrap();
        assert!((x - p(5.0, 0.0)).norm() < TOLERANCE);
        assert!(line.line_crossing(&p(5.0, 1.0), &p(6.0, 3.0)).is_none());
        let seg = Edge::new(p(5.0, -1.0), p(5.0, 3.0));
        assert_eq!(seg.intersect_line(&line), Some(x));
    }

    #[test]
    fn same_segment_is_unordered() {
        let e = Edge::new(p(0.0, 0.0), p(1.0, 1.0));
        let f = Edge::new(p(1.0, 1.0), p(0.0, 0.0)).reversed();
        assert!(e.same_segment(&f));
        assert!(e.has_endpoint(&p(1.0, 1.0)));
    }
}
