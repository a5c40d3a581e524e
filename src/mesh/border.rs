use std::collections::HashMap;

use crate::error::{MeshError, Result};
use crate::math::Point2;

use super::{Mesh, PointId};

impl Mesh {
    /// Extracts the boundary of the region as closed loops.
    ///
    /// A side belongs to the boundary when exactly one triangle uses it. Sides
    /// are oriented with their triangle on the left, so outer loops run
    /// counter-clockwise and hole loops clockwise. Loops do not repeat their
    /// first point.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::OpenBoundary`] if the boundary sides cannot be
    /// chained into closed loops (overlapping triangles).
    pub fn border(&self) -> Result<Vec<Vec<Point2>>> {
        let sides = self.border_sides();
        let mut outgoing: HashMap<PointId, Vec<usize>> = HashMap::new();
        for (i, &(from, _)) in sides.iter().enumerate() {
            outgoing.entry(from).or_default().push(i);
        }

        let mut used = vec![false; sides.len()];
        let mut loops = Vec::new();
        for first in 0..sides.len() {
            if used[first] {
                continue;
            }
            used[first] = true;
            let (start, mut current) = sides[first];
            let mut ids = vec![start];
            while current != start {
                ids.push(current);
                let next = outgoing
                    .get(&current)
                    .and_then(|out| out.iter().copied().find(|&i| !used[i]));
                let Some(next) = next else {
                    let start = self.point(start).unwrap_or_else(Point2::origin);
                    tracing::warn!(?start, "boundary chain does not close");
                    return Err(MeshError::OpenBoundary { start }.into());
                };
                used[next] = true;
                current = sides[next].1;
            }
            loops.push(ids.into_iter().filter_map(|id| self.point(id)).collect());
        }
        Ok(loops)
    }

    /// Number of triangle sides used by exactly one triangle.
    #[must_use]
    pub fn border_side_count(&self) -> usize {
        self.border_sides().len()
    }

    /// Singly-used sides, directed with their triangle on the left, in
    /// first-seen order.
    fn border_sides(&self) -> Vec<(PointId, PointId)> {
        let mut order: Vec<(PointId, PointId)> = Vec::new();
        let mut counts: HashMap<(PointId, PointId), usize> = HashMap::new();
        for tri in &self.triangles {
            let ids = tri.ids();
            let ccw = tri.signed_area() > 0.0;
            for i in 0..3 {
                let (p, q) = (ids[i], ids[(i + 1) % 3]);
                let directed = if ccw { (p, q) } else { (q, p) };
                let count = counts.entry((p.min(q), p.max(q))).or_insert(0);
                if *count == 0 {
                    order.push(directed);
                }
                *count += 1;
            }
        }
        order
            .into_iter()
            .filter(|&(p, q)| counts.get(&(p.min(q), p.max(q))) == Some(&1))
            .collect()
    }
}
