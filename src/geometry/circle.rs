use crate::error::{GeometryError, Result};
use crate::math::intersect_2d::circle_line_intersect_2d;
use crate::math::{Point2, Rect2, Vector2, TOLERANCE};

/// A full circle in the plane.
///
/// `P(t) = center + radius * (cos t, sin t)` for `t` in `[0, 2*pi)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle2 {
    center: Point2,
    radius: f64,
}

impl Circle2 {
    /// Creates a new circle.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not positive.
    pub fn new(center: Point2, radius: f64) -> Result<Self> {
        if radius < TOLERANCE {
            return Err(
                GeometryError::Degenerate("circle radius must be positive".into()).into(),
            );
        }
        Ok(Self { center, radius })
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the point at angle `t` (radians).
    #[must_use]
    pub fn evaluate(&self, t: f64) -> Point2 {
        self.center + Vector2::new(t.cos(), t.sin()) * self.radius
    }

    /// Returns the enclosed area.
    #[must_use]
    pub fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }

    /// Returns the axis-aligned bounding rectangle.
    #[must_use]
    pub fn bounds(&self) -> Rect2 {
        let r = Vector2::new(self.radius, self.radius);
        Rect2::new(self.center - r, self.center + r)
    }

    /// Returns whether `p` lies inside or on the circle.
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        (p - self.center).norm() <= self.radius + TOLERANCE
    }

    /// Intersections with the infinite line through `a` and `b`, ordered along `a -> b`.
    #[must_use]
    pub fn intersect_line(&self, a: &Point2, b: &Point2) -> Vec<Point2> {
        circle_line_intersect_2d(&self.center, self.radius, a, &(b - a))
            .into_iter()
            .map(|(p, _)| p)
            .collect()
    }

    /// Intersections with the segment `a -> b`, ordered along the segment.
    #[must_use]
    pub fn intersect_segment(&self, a: &Point2, b: &Point2) -> Vec<Point2> {
        circle_line_intersect_2d(&self.center, self.radius, a, &(b - a))
            .into_iter()
            .filter(|(_, t)| *t >= -TOLERANCE && *t <= 1.0 + TOLERANCE)
            .map(|(p, _)| p)
            .collect()
    }
}
