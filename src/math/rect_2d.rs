use super::{Interval, Point2};

/// An axis-aligned bounding rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect2 {
    /// Extent along x.
    pub x: Interval,
    /// Extent along y.
    pub y: Interval,
}

impl Rect2 {
    /// Creates the rectangle spanned by two opposite corners.
    #[must_use]
    pub fn new(a: Point2, b: Point2) -> Self {
        Self {
            x: Interval::new(a.x, b.x),
            y: Interval::new(a.y, b.y),
        }
    }

    /// Bounding rectangle of a point set, or `None` when the set is empty.
    #[must_use]
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point2>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut rect = Self {
            x: Interval::point(first.x),
            y: Interval::point(first.y),
        };
        for p in iter {
            rect.x = rect.x.including(p.x);
            rect.y = rect.y.including(p.y);
        }
        Some(rect)
    }

    #[must_use]
    pub fn min(&self) -> Point2 {
        Point2::new(self.x.min, self.y.min)
    }

    #[must_use]
    pub fn max(&self) -> Point2 {
        Point2::new(self.x.max, self.y.max)
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.x.length()
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.y.length()
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Returns whether the closed rectangles share at least one point.
    #[must_use]
    pub fn overlaps(&self, other: &Rect2) -> bool {
        self.x.overlaps(&other.x) && self.y.overlaps(&other.y)
    }

    /// Returns whether the rectangles have no point in common.
    #[must_use]
    pub fn is_disjoint(&self, other: &Rect2) -> bool {
        !self.overlaps(other)
    }

    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        self.x.contains(p.x) && self.y.contains(p.y)
    }

    #[must_use]
    pub fn union(&self, other: &Rect2) -> Rect2 {
        Rect2 {
            x: self.x.hull(&other.x),
            y: self.y.hull(&other.y),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn from_points_spans_all() {
        let pts = [
            Point2::new(1.0, 2.0),
            Point2::new(-1.0, 0.5),
            Point2::new(0.0, 3.0),
        ];
        let r = Rect2::from_points(&pts).unwrap();
        assert_eq!(r.min(), Point2::new(-1.0, 0.5));
        assert_eq!(r.max(), Point2::new(1.0, 3.0));
        assert!((r.area() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn from_no_points() {
        assert!(Rect2::from_points(&[] as &[Point2]).is_none());
    }

    #[test]
    fn overlap_and_disjoint() {
        let a = Rect2::new(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0));
        let b = Rect2::new(Point2::new(0.5, 0.5), Point2::new(2.0, 2.0));
        let c = Rect2::new(Point2::new(1.5, -1.0), Point2::new(2.0, 0.4));
        assert!(a.overlaps(&b));
        assert!(a.is_disjoint(&c));
        assert!(b.is_disjoint(&c));
        assert!(a.union(&c).contains(&Point2::new(1.2, 0.0)));
    }
}
