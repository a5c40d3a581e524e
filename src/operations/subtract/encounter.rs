use crate::math::Point2;
use crate::mesh::{Crossing, Edge, Side, Triangle};

use super::situation::EdgeCounts;

/// Returns whether the cutter cannot overlap the subject.
///
/// True for disjoint bounding rectangles, or when one triangle lies wholly on
/// the outer side (distance `<= 0`) of an edge of the other.
pub(crate) fn is_apart(subject: &Triangle, cutter: &Triangle) -> bool {
    if subject.bounds().is_disjoint(&cutter.bounds()) {
        return true;
    }
    let outside = |edges: [Edge; 3], pts: [Point2; 3]| {
        edges
            .iter()
            .any(|e| pts.iter().all(|p| e.relative_distance(p) <= 0.0))
    };
    outside(subject.edges(), cutter.points()) || outside(cutter.edges(), subject.points())
}

/// Returns whether every subject vertex lies inside or on the cutter.
pub(crate) fn is_covered(subject: &Triangle, cutter: &Triangle) -> bool {
    subject.points().iter().all(|p| cutter.contains(p))
}

/// Crossings and contained vertices of one subject/cutter pair.
#[derive(Debug, Clone)]
pub struct Encounter<'a> {
    subject: &'a Triangle,
    cutter: &'a Triangle,
    crossings: [Vec<Crossing>; 3],
    interior: Vec<Point2>,
}

impl<'a> Encounter<'a> {
    /// Intersects every subject side with every cutter side.
    ///
    /// Crossings are grouped by subject side and deduplicated by point, so a
    /// cutter vertex lying on a side counts once.
    #[must_use]
    pub fn evaluate(subject: &'a Triangle, cutter: &'a Triangle) -> Self {
        let crossings = Side::ALL.map(|side| {
            let edge = subject.edge(side);
            let mut found: Vec<Crossing> = Vec::with_capacity(3);
            for cut in cutter.edges() {
                if let Some(x) = Crossing::between(&edge, &cut) {
                    if !found.iter().any(|f| f.point == x.point) {
                        found.push(x);
                    }
                }
            }
            found
        });
        let interior = cutter
            .points()
            .into_iter()
            .filter(|p| subject.contains_strictly(p))
            .collect();
        Self {
            subject,
            cutter,
            crossings,
            interior,
        }
    }

    /// Assembles an encounter from precomputed parts.
    #[cfg(test)]
    pub(super) fn from_parts(
        subject: &'a Triangle,
        cutter: &'a Triangle,
        crossings: [Vec<Crossing>; 3],
        interior: Vec<Point2>,
    ) -> Self {
        Self {
            subject,
            cutter,
            crossings,
            interior,
        }
    }

    /// Returns the triangle being cut.
    #[must_use]
    pub fn subject(&self) -> &Triangle {
        self.subject
    }

    /// Returns the cutting triangle.
    #[must_use]
    pub fn cutter(&self) -> &Triangle {
        self.cutter
    }

    /// Crossings found on one subject side.
    #[must_use]
    pub fn crossings(&self, side: Side) -> &[Crossing] {
        &self.crossings[side.index()]
    }

    /// Cutter vertices strictly inside the subject.
    #[must_use]
    pub fn interior(&self) -> &[Point2] {
        &self.interior
    }

    /// Crossing counts per subject side.
    #[must_use]
    pub fn counts(&self) -> EdgeCounts {
        let count = |side: Side| u8::try_from(self.crossings(side).len()).unwrap_or(u8::MAX);
        EdgeCounts {
            ab: count(Side::Ab),
            ac: count(Side::Ac),
            bc: count(Side::Bc),
        }
    }

    /// All crossing points, in side order.
    #[must_use]
    pub fn crossing_points(&self) -> Vec<Point2> {
        self.crossings
            .iter()
            .flat_map(|xs| xs.iter().map(|x| x.point))
            .collect()
    }

    /// Whether the subject's centroid lies strictly inside the cutter.
    #[must_use]
    pub fn cutter_holds_centroid(&self) -> bool {
        self.cutter.contains_strictly(&self.subject.centroid())
    }

    /// Whether all crossings are transversal and made by one cutter edge.
    #[must_use]
    pub fn single_cutter_edge(&self) -> bool {
        let mut all = self.crossings.iter().flatten();
        let Some(first) = all.next() else {
            return false;
        };
        first.is_transversal()
            && all.all(|x| x.is_transversal() && x.cutter.same_segment(&first.cutter))
    }
}
