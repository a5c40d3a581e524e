use crate::math::Point2;

use super::{Edge, Mesh, PointId, Triangle};

impl Mesh {
    /// Returns a copy with edge-adjacent triangle pairs merged where their
    /// union is itself a triangle.
    ///
    /// Triangles `(p, q, r)` and `(p, q, s)` merge into `(r, s, q)` when `p`
    /// lies on the segment `r-s` (within [`MeshParams::collinear_tolerance`]),
    /// and symmetrically for `q`. Merging restarts until no pair qualifies.
    ///
    /// [`MeshParams::collinear_tolerance`]: super::MeshParams::collinear_tolerance
    #[must_use]
    pub fn consolidated(&self) -> Mesh {
        let tol = self.params.collinear_tolerance;
        let mut tris = self.triangles.clone();
        let mut merges = 0usize;
        'restart: loop {
            for a in 0..tris.len() {
                for b in (a + 1)..tris.len() {
                    if let Some(merged) = merge_pair(&tris[a], &tris[b], tol) {
                        tris[a] = merged;
                        tris.swap_remove(b);
                        merges += 1;
                        continue 'restart;
                    }
                }
            }
            break;
        }
        tracing::debug!(merges, triangles = tris.len(), "consolidated mesh");

        let mut out = Mesh::with_params(self.params);
        for t in &tris {
            let [a, b, c] = t.points();
            out.add_triangle(a, b, c);
        }
        out
    }
}

fn merge_pair(t: &Triangle, u: &Triangle, tol: f64) -> Option<Triangle> {
    let (i, j) = t.shared_side(u)?;
    let k = 3 - i - j;
    let ids = t.ids();
    let pts = t.points();
    let s = (0..3).find(|&m| !ids.contains(&u.ids()[m]))?;
    let (s_id, s_pt) = (u.ids()[s], u.points()[s]);
    let (r_pt, r_id) = (pts[k], ids[k]);

    for (on, keep) in [(i, j), (j, i)] {
        if lies_between(&pts[on], &r_pt, &s_pt, tol) {
            let merged_ids: [PointId; 3] = [r_id, s_id, ids[keep]];
            return Triangle::build(merged_ids, [r_pt, s_pt, pts[keep]]);
        }
    }
    None
}

/// Whether `p` lies on the open segment `r-s`, up to `tol` off the line.
fn lies_between(p: &Point2, r: &Point2, s: &Point2, tol: f64) -> bool {
    let off_line = Edge::new(*r, *s).relative_distance(p).abs();
    off_line <= tol * (s - r).norm() && (r - p).dot(&(s - p)) < 0.0
}
