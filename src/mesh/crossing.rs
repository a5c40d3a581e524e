use crate::math::Point2;

use super::Edge;

/// The point where a subject edge meets a cutter edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crossing {
    /// Intersection point.
    pub point: Point2,
    /// Edge of the triangle being cut.
    pub subject: Edge,
    /// Edge of the cutting triangle.
    pub cutter: Edge,
}

impl Crossing {
    /// Computes the crossing of two edges, if their segments meet.
    #[must_use]
    pub fn between(subject: &Edge, cutter: &Edge) -> Option<Self> {
        subject.intersect_segment(cutter).map(|point| Self {
            point,
            subject: *subject,
            cutter: *cutter,
        })
    }

    /// Returns whether the point coincides with an endpoint of the subject edge.
    #[must_use]
    pub fn on_subject_endpoint(&self) -> bool {
        self.subject.has_endpoint(&self.point)
    }

    /// Returns whether the point coincides with an endpoint of the cutter edge.
    #[must_use]
    pub fn on_cutter_endpoint(&self) -> bool {
        self.cutter.has_endpoint(&self.point)
    }

    /// Returns whether the edges cross strictly inside both segments.
    #[must_use]
    pub fn is_transversal(&self) -> bool {
        !self.on_subject_endpoint() && !self.on_cutter_endpoint()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn transversal_crossing() {
        let s = Edge::new(Point2::new(0.0, 0.0), Point2::new(4.0, 0.0));
        let c = Edge::new(Point2::new(1.0, -1.0), Point2::new(1.0, 1.0));
        let x = Crossing::between(&s, &c).unwrap();
        assert_eq!(x.point, Point2::new(1.0, 0.0));
        assert!(x.is_transversal());
    }

    #[test]
    fn crossing_at_cutter_vertex() {
        let s = Edge::new(Point2::new(0.0, 0.0), Point2::new(4.0, 0.0));
        let c = Edge::new(Point2::new(2.0, 0.0), Point2::new(2.0, 3.0));
        let x = Crossing::between(&s, &c).unwrap();
        assert!(x.on_cutter_endpoint());
        assert!(!x.on_subject_endpoint());
        assert!(!x.is_transversal());
    }

    #[test]
    fn no_crossing() {
        let s = Edge::new(Point2::new(0.0, 0.0), Point2::new(4.0, 0.0));
        let c = Edge::new(Point2::new(5.0, -1.0), Point2::new(5.0, 1.0));
        assert!(Crossing::between(&s, &c).is_none());
    }
}
