mod border;
mod consolidate;
mod crossing;
mod edge;
mod triangle;
mod triangulate;

pub use crossing::Crossing;
pub use edge::Edge;
pub use triangle::{Corner, Side, Triangle};

use slotmap::{new_key_type, SlotMap};

use crate::error::Result;
use crate::math::{Matrix3, Point2, Rect2, TOLERANCE};

new_key_type! {
    /// Identifies a point in a mesh's point pool.
    pub struct PointId;
}

/// Parameters controlling point and triangle insertion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshParams {
    /// Triangles with a side shorter than this are rejected.
    pub min_side_length: f64,
    /// When set, inserted coordinates are rounded to this many decimals.
    pub round_digits: Option<i32>,
    /// Largest distance of a vertex from a side for the two to count as collinear
    /// when consolidating.
    pub collinear_tolerance: f64,
}

impl Default for MeshParams {
    fn default() -> Self {
        Self {
            min_side_length: 1e-9,
            round_digits: None,
            collinear_tolerance: TOLERANCE,
        }
    }
}

impl MeshParams {
    /// Sets the shortest side length a triangle may have.
    #[must_use]
    pub fn with_min_side_length(mut self, min_side_length: f64) -> Self {
        self.min_side_length = min_side_length;
        self
    }

    /// Rounds inserted coordinates to `digits` decimals.
    #[must_use]
    pub fn with_round_digits(mut self, digits: i32) -> Self {
        self.round_digits = Some(digits);
        self
    }

    /// Sets the off-line tolerance used by [`Mesh::consolidated`].
    #[must_use]
    pub fn with_collinear_tolerance(mut self, tolerance: f64) -> Self {
        self.collinear_tolerance = tolerance;
        self
    }

    fn round(&self, p: Point2) -> Point2 {
        match self.round_digits {
            Some(digits) => {
                let scale = 10f64.powi(digits);
                Point2::new((p.x * scale).round() / scale, (p.y * scale).round() / scale)
            }
            None => p,
        }
    }
}

/// A planar region stored as non-overlapping triangles over a shared point pool.
///
/// The pool deduplicates by value with a linear scan, which keeps insertion
/// O(n); meshes are expected to stay small (a plate with a handful of holes).
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    params: MeshParams,
    points: SlotMap<PointId, Point2>,
    triangles: Vec<Triangle>,
}

impl Mesh {
    /// Creates an empty mesh with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty mesh with custom parameters.
    #[must_use]
    pub fn with_params(params: MeshParams) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    /// Returns the parameters this mesh was created with.
    #[must_use]
    pub fn params(&self) -> &MeshParams {
        &self.params
    }

    /// Inserts a point, reusing an existing equal point.
    pub fn add_point(&mut self, p: Point2) -> PointId {
        let p = self.params.round(p);
        if let Some((id, _)) = self.points.iter().find(|(_, q)| **q == p) {
            return id;
        }
        self.points.insert(p)
    }

    /// Returns the position of a pooled point, `None` for a foreign id.
    #[must_use]
    pub fn point(&self, id: PointId) -> Option<Point2> {
        self.points.get(id).copied()
    }

    /// Iterates over the point pool.
    pub fn points(&self) -> impl Iterator<Item = (PointId, Point2)> + '_ {
        self.points.iter().map(|(id, p)| (id, *p))
    }

    /// Inserts a triangle and returns it.
    ///
    /// Returns `None`, leaving the mesh untouched, when the triangle is
    /// degenerate: two equal points, a side shorter than
    /// [`MeshParams::min_side_length`], or collinear vertices.
    pub fn add_triangle(&mut self, a: Point2, b: Point2, c: Point2) -> Option<Triangle> {
        let pts = [self.params.round(a), self.params.round(b), self.params.round(c)];
        if pts[0] == pts[1] || pts[1] == pts[2] || pts[0] == pts[2] {
            return None;
        }
        // Checked before any point enters the pool.
        let candidate = Triangle::build([PointId::default(); 3], pts)?;
        if candidate.min_side_length() < self.params.min_side_length {
            return None;
        }
        let ids = [
            self.add_point(pts[0]),
            self.add_point(pts[1]),
            self.add_point(pts[2]),
        ];
        let tri = Triangle::build(ids, candidate.points())?;
        self.triangles.push(tri);
        Some(tri)
    }

    /// Inserts an axis-aligned rectangle as two counter-clockwise triangles.
    ///
    /// Returns how many triangles were inserted (0 for a degenerate rectangle).
    pub fn add_rectangle(&mut self, min: Point2, max: Point2) -> usize {
        let rect = Rect2::new(min, max);
        let (lo, hi) = (rect.min(), rect.max());
        let lr = Point2::new(hi.x, lo.y);
        let ul = Point2::new(lo.x, hi.y);
        usize::from(self.add_triangle(lo, lr, hi).is_some())
            + usize::from(self.add_triangle(lo, hi, ul).is_some())
    }

    /// Fan-triangulates a convex polygon from its first vertex.
    ///
    /// Degenerate fan triangles are dropped by [`Mesh::add_triangle`].
    pub(crate) fn add_fan(&mut self, convex: &[Point2]) {
        if let Some((&apex, rest)) = convex.split_first() {
            for pair in rest.windows(2) {
                self.add_triangle(apex, pair[0], pair[1]);
            }
        }
    }

    /// Returns the triangles in insertion order.
    #[must_use]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Returns the number of triangles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// Returns whether the mesh holds no triangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Total area of the region.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.triangles.iter().map(Triangle::area).sum()
    }

    /// Bounding rectangle of all triangles, `None` for an empty mesh.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect2> {
        self.triangles
            .iter()
            .map(Triangle::bounds)
            .reduce(|acc, r| acc.union(&r))
    }

    /// Returns whether `p` lies inside or on one of the triangles.
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        self.triangles.iter().any(|t| t.contains(p))
    }

    /// Computes `self - other` as a new mesh.
    ///
    /// # Errors
    ///
    /// Returns an error if a triangle pair falls into an unclassifiable
    /// configuration; no partial result is produced.
    pub fn subtract(&self, other: &Mesh) -> Result<Mesh> {
        crate::operations::Subtract::new(self, other).execute()
    }

    /// Applies a homogeneous 2D transform to every triangle.
    #[must_use]
    pub fn transformed(&self, matrix: &Matrix3) -> Mesh {
        crate::operations::GeneralTransform::new(*matrix).execute(self)
    }
}
