use crate::math::polygon_2d::signed_area_2d;
use crate::math::{Point2, Rect2};

use super::{Edge, PointId};

/// Names the three sides of a triangle by their endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Ab,
    Ac,
    Bc,
}

impl Side {
    /// All sides, in the order used by [`Triangle::edges`].
    pub const ALL: [Side; 3] = [Side::Ab, Side::Ac, Side::Bc];

    /// Corner shared with another side, `None` for the same side.
    #[must_use]
    pub fn shared_corner(self, other: Side) -> Option<Corner> {
        match (self, other) {
            (Side::Ab, Side::Ac) | (Side::Ac, Side::Ab) => Some(Corner::A),
            (Side::Ab, Side::Bc) | (Side::Bc, Side::Ab) => Some(Corner::B),
            (Side::Ac, Side::Bc) | (Side::Bc, Side::Ac) => Some(Corner::C),
            _ => None,
        }
    }

    /// The side joining two distinct corners.
    #[must_use]
    pub fn joining(a: Corner, b: Corner) -> Option<Side> {
        match (a, b) {
            (Corner::A, Corner::B) | (Corner::B, Corner::A) => Some(Side::Ab),
            (Corner::A, Corner::C) | (Corner::C, Corner::A) => Some(Side::Ac),
            (Corner::B, Corner::C) | (Corner::C, Corner::B) => Some(Side::Bc),
            _ => None,
        }
    }

    /// Position of the side in [`Triangle::edges`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Side::Ab => 0,
            Side::Ac => 1,
            Side::Bc => 2,
        }
    }
}

/// Names a vertex slot of a triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    A,
    B,
    C,
}

impl Corner {
    /// The two other corners, in `A, B, C` order.
    #[must_use]
    pub fn others(self) -> [Corner; 2] {
        match self {
            Corner::A => [Corner::B, Corner::C],
            Corner::B => [Corner::A, Corner::C],
            Corner::C => [Corner::A, Corner::B],
        }
    }

    /// Position of the corner in [`Triangle::points`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Corner::A => 0,
            Corner::B => 1,
            Corner::C => 2,
        }
    }
}

/// A mesh triangle: three point ids into the owning mesh's pool.
///
/// Positions and the three sides are resolved at construction. Each side is
/// oriented so that the opposite vertex lies strictly on its positive side,
/// which makes "inside" mean "positive for all three edges" whatever the
/// winding. Triangles are never edited, only rebuilt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    ids: [PointId; 3],
    points: [Point2; 3],
    edges: [Edge; 3],
}

impl Triangle {
    /// Builds a triangle, or `None` when the three points are collinear.
    pub(crate) fn build(ids: [PointId; 3], points: [Point2; 3]) -> Option<Self> {
        let [a, b, c] = points;
        let ab = Edge::facing(a, b, &c)?;
        let ac = Edge::facing(a, c, &b)?;
        let bc = Edge::facing(b, c, &a)?;
        Some(Self {
            ids,
            points,
            edges: [ab, ac, bc],
        })
    }

    /// Returns the point ids in the owning mesh's pool.
    #[must_use]
    pub fn ids(&self) -> [PointId; 3] {
        self.ids
    }

    /// Returns the vertex positions in insertion order.
    #[must_use]
    pub fn points(&self) -> [Point2; 3] {
        self.points
    }

    /// Returns the position of one corner.
    #[must_use]
    pub fn point(&self, corner: Corner) -> Point2 {
        self.points[corner.index()]
    }

    /// Sides in `[ab, ac, bc]` order, each with the interior on its positive side.
    #[must_use]
    pub fn edges(&self) -> [Edge; 3] {
        self.edges
    }

    /// Returns one side, with the interior on its positive side.
    #[must_use]
    pub fn edge(&self, side: Side) -> Edge {
        self.edges[side.index()]
    }

    /// Shoelace area; positive when the vertices run counter-clockwise.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.points)
    }

    /// Unsigned area.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Vertices in counter-clockwise order.
    #[must_use]
    pub fn ccw_points(&self) -> [Point2; 3] {
        let [a, b, c] = self.points;
        if self.signed_area() < 0.0 {
            [a, c, b]
        } else {
            [a, b, c]
        }
    }

    /// Returns the average of the three vertices.
    #[must_use]
    pub fn centroid(&self) -> Point2 {
        let [a, b, c] = self.points;
        Point2::new((a.x + b.x + c.x) / 3.0, (a.y + b.y + c.y) / 3.0)
    }

    /// Returns the bounding rectangle of the vertices.
    #[must_use]
    pub fn bounds(&self) -> Rect2 {
        let [a, b, c] = self.points;
        Rect2::new(a, b).union(&Rect2::new(c, c))
    }

    /// Returns whether `p` lies strictly inside (positive for all three sides).
    #[must_use]
    pub fn contains_strictly(&self, p: &Point2) -> bool {
        self.edges.iter().all(|e| e.relative_distance(p) > 0.0)
    }

    /// Returns whether `p` lies inside or on the boundary.
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        self.edges.iter().all(|e| e.relative_distance(p) >= 0.0)
    }

    /// Returns whether the triangles share a side, compared by point values.
    #[must_use]
    pub fn is_adjacent(&self, other: &Triangle) -> bool {
        self.edges
            .iter()
            .any(|e| other.edges.iter().any(|f| e.same_segment(f)))
    }

    /// The side shared with another triangle of the same mesh, by point ids.
    ///
    /// Returns the slots `(i, j)` in `self` of the shared endpoints, with
    /// `j == (i + 1) % 3`.
    #[must_use]
    pub fn shared_side(&self, other: &Triangle) -> Option<(usize, usize)> {
        (0..3).find_map(|i| {
            let j = (i + 1) % 3;
            let (p, q) = (self.ids[i], self.ids[j]);
            (other.ids.contains(&p) && other.ids.contains(&q)).then_some((i, j))
        })
    }

    /// Shortest side length.
    #[must_use]
    pub fn min_side_length(&self) -> f64 {
        self.edges
            .iter()
            .map(Edge::length)
            .fold(f64::INFINITY, f64::min)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::mesh::Mesh;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn opposite_vertex_is_positive_for_either_winding() {
        let mut mesh = Mesh::new();
        let ccw = mesh.add_triangle(p(0.0, 0.0), p(2.0, 0.0), p(0.0, 2.0)).unwrap();
        let cw = mesh.add_triangle(p(5.0, 0.0), p(5.0, 2.0), p(7.0, 0.0)).unwrap();
        for t in [ccw, cw] {
            let [a, b, c] = t.points();
            assert!(t.edge(Side::Ab).relative_distance(&c) > 0.0);
            assert!(t.edge(Side::Ac).relative_distance(&b) > 0.0);
            assert!(t.edge(Side::Bc).relative_distance(&a) > 0.0);
        }
        assert_relative_eq!(ccw.signed_area(), 2.0);
        assert_relative_eq!(cw.signed_area(), -2.0);
        assert_relative_eq!(cw.area(), 2.0);
    }

    #[test]
    fn ccw_points_fix_winding() {
        let mut mesh = Mesh::new();
        let cw = mesh.add_triangle(p(0.0, 0.0), p(0.0, 1.0), p(1.0, 0.0)).unwrap();
        let ccw = cw.ccw_points();
        assert!(signed_area_2d(&ccw) > 0.0);
    }

    #[test]
    fn containment() {
        let mut mesh = Mesh::new();
        let t = mesh.add_triangle(p(0.0, 0.0), p(4.0, 0.0), p(0.0, 4.0)).unwrap();
        assert!(t.contains_strictly(&p(1.0, 1.0)));
        assert!(!t.contains_strictly(&p(2.0, 0.0)));
        assert!(t.contains(&p(2.0, 0.0)));
        assert!(t.contains(&p(0.0, 0.0)));
        assert!(!t.contains(&p(3.0, 3.0)));
        assert_eq!(t.centroid(), p(4.0 / 3.0, 4.0 / 3.0));
    }

    #[test]
    fn bounds_cover_vertices() {
        let mut mesh = Mesh::new();
        let t = mesh.add_triangle(p(1.0, -1.0), p(4.0, 2.0), p(-2.0, 3.0)).unwrap();
        let b = t.bounds();
        assert_eq!(b.min(), p(-2.0, -1.0));
        assert_eq!(b.max(), p(4.0, 3.0));
    }

    #[test]
    fn adjacency_by_shared_side() {
        let mut mesh = Mesh::new();
        let t1 = mesh.add_triangle(p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)).unwrap();
        let t2 = mesh.add_triangle(p(0.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)).unwrap();
        let t3 = mesh.add_triangle(p(1.0, 0.0), p(2.0, 0.0), p(2.0, 2.0)).unwrap();
        assert!(t1.is_adjacent(&t2));
        assert!(!t2.is_adjacent(&t3));
        assert_eq!(t1.shared_side(&t2), Some((2, 0)));
        assert!(t1.shared_side(&t3).is_none());
    }

    #[test]
    fn side_corner_relations() {
        assert_eq!(Side::Ab.shared_corner(Side::Bc), Some(Corner::B));
        assert_eq!(Side::Ac.shared_corner(Side::Bc), Some(Corner::C));
        assert_eq!(Side::Ab.shared_corner(Side::Ab), None);
        assert_eq!(Side::joining(Corner::C, Corner::B), Some(Side::Bc));
        assert_eq!(Side::joining(Corner::A, Corner::A), None);
    }
}
