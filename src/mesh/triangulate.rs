use spade::{ConstrainedDelaunayTriangulation, Point2 as SpadePoint2, Triangulation};

use crate::error::{MeshError, Result};
use crate::math::Point2;

use super::{Mesh, MeshParams};

type Cdt = ConstrainedDelaunayTriangulation<SpadePoint2<f64>>;

impl Mesh {
    /// Triangulates a polygon with holes into a new mesh.
    ///
    /// `outer` and each hole are closed loops (the last point joins the first)
    /// in either winding. A face of the constrained Delaunay triangulation is
    /// kept when its centroid lies inside an odd number of loops.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::Triangulation`] if a loop has fewer than three
    /// points or a point cannot be inserted (non-finite coordinates).
    pub fn from_polygon(outer: &[Point2], holes: &[Vec<Point2>], params: MeshParams) -> Result<Mesh> {
        let loops: Vec<&[Point2]> = std::iter::once(outer)
            .chain(holes.iter().map(Vec::as_slice))
            .collect();

        let mut cdt = Cdt::new();
        for ring in &loops {
            constrain_loop(&mut cdt, ring)?;
        }

        let mut mesh = Mesh::with_params(params);
        let mut skipped = 0usize;
        for face in cdt.inner_faces() {
            let [a, b, c] = face.vertices().map(|v| {
                let pos = v.position();
                Point2::new(pos.x, pos.y)
            });
            let centroid = Point2::new((a.x + b.x + c.x) / 3.0, (a.y + b.y + c.y) / 3.0);
            if loops.iter().filter(|ring| encloses(ring, &centroid)).count() % 2 == 1 {
                mesh.add_triangle(a, b, c);
            } else {
                skipped += 1;
            }
        }
        tracing::debug!(
            holes = holes.len(),
            triangles = mesh.len(),
            skipped,
            "triangulated polygon"
        );
        Ok(mesh)
    }
}

/// Inserts the loop's points and pins each closing side as a constraint.
fn constrain_loop(cdt: &mut Cdt, ring: &[Point2]) -> Result<()> {
    if ring.len() < 3 {
        return Err(MeshError::Triangulation(format!(
            "loop of {} points cannot bound a region",
            ring.len()
        ))
        .into());
    }
    let handles = ring
        .iter()
        .map(|p| {
            cdt.insert(SpadePoint2::new(p.x, p.y)).map_err(|e| {
                MeshError::Triangulation(format!("cannot insert ({}, {}): {e}", p.x, p.y))
            })
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let closing = handles.iter().zip(handles.iter().cycle().skip(1));
    for (&from, &to) in closing {
        if from != to {
            cdt.add_constraint(from, to);
        }
    }
    Ok(())
}

/// Even-odd test of `p` against a closed loop (horizontal ray towards +x).
fn encloses(ring: &[Point2], p: &Point2) -> bool {
    let Some(&last) = ring.last() else {
        return false;
    };
    let mut inside = false;
    let mut prev = last;
    for &cur in ring {
        if (cur.y > p.y) != (prev.y > p.y) {
            let x = cur.x + (p.y - cur.y) * (prev.x - cur.x) / (prev.y - cur.y);
            if p.x < x {
                inside = !inside;
            }
        }
        prev = cur;
    }
    inside
}
