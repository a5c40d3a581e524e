use crate::error::{GeometryError, Result};
use crate::math::polygon_2d::{dedup_exact, order_convex_ccw};
use crate::math::Point2;
use crate::mesh::{Edge, Mesh};

/// Keeps the part of a mesh on the positive side of a line.
///
/// The positive side is the left of the line's direction, or the right when
/// the edge is reversed.
pub struct ClipByLine {
    line: Edge,
}

impl ClipByLine {
    /// Creates a new `ClipByLine` operation.
    #[must_use]
    pub fn new(line: Edge) -> Self {
        Self { line }
    }

    /// Clips to the left of the directed line through `a` and `b`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if `a == b`.
    pub fn through(a: Point2, b: Point2) -> Result<Self> {
        if a == b {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self::new(Edge::new(a, b)))
    }

    /// Executes the clip, returning a new mesh with the same parameters.
    ///
    /// A triangle the line does not cut is kept or dropped whole. A cut
    /// triangle is replaced by a fan over its kept convex piece.
    #[must_use]
    pub fn execute(&self, mesh: &Mesh) -> Mesh {
        let mut out = Mesh::with_params(*mesh.params());
        for tri in mesh.triangles() {
            let crossings: Vec<Point2> = tri
                .edges()
                .iter()
                .filter_map(|e| e.intersect_line(&self.line))
                .collect();
            let crossings = dedup_exact(&crossings);

            if crossings.len() < 2 {
                if self.line.relative_distance(&tri.centroid()) > 0.0 {
                    let [a, b, c] = tri.points();
                    out.add_triangle(a, b, c);
                }
                continue;
            }

            let mut piece: Vec<Point2> = tri
                .points()
                .into_iter()
                .filter(|p| self.line.relative_distance(p) > 0.0)
                .collect();
            piece.extend(crossings);
            let piece = order_convex_ccw(&piece);
            if piece.len() >= 3 {
                out.add_fan(&piece);
            }
        }
        tracing::debug!(before = mesh.len(), after = out.len(), "clipped mesh by line");
        out
    }
}
