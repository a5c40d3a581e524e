use super::{Matrix3, Point2, Vector2};

/// A planar coordinate frame: an origin and a rotation of its x-axis.
///
/// Frames compose like rigid transforms: a child frame expressed in its parent,
/// composed with the parent's frame in the world, gives the child in the world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame2 {
    /// Frame origin in parent coordinates.
    pub origin: Point2,
    /// Counter-clockwise rotation of the frame's x-axis, in radians.
    pub angle: f64,
}

impl Default for Frame2 {
    fn default() -> Self {
        Self {
            origin: Point2::origin(),
            angle: 0.0,
        }
    }
}

impl Frame2 {
    #[must_use]
    pub fn new(origin: Point2, angle: f64) -> Self {
        Self { origin, angle }
    }

    /// Pure translation.
    #[must_use]
    pub fn translation(dx: f64, dy: f64) -> Self {
        Self::new(Point2::new(dx, dy), 0.0)
    }

    /// Unit x-axis of the frame in parent coordinates.
    #[must_use]
    pub fn x_axis(&self) -> Vector2 {
        Vector2::new(self.angle.cos(), self.angle.sin())
    }

    /// Unit y-axis of the frame in parent coordinates.
    #[must_use]
    pub fn y_axis(&self) -> Vector2 {
        Vector2::new(-self.angle.sin(), self.angle.cos())
    }

    /// Homogeneous local-to-parent matrix.
    #[must_use]
    pub fn to_matrix(&self) -> Matrix3 {
        let (s, c) = self.angle.sin_cos();
        Matrix3::new(
            c, -s, self.origin.x, //
            s, c, self.origin.y, //
            0.0, 0.0, 1.0,
        )
    }

    /// Maps a local point into parent coordinates.
    #[must_use]
    pub fn to_world(&self, p: &Point2) -> Point2 {
        self.origin + self.x_axis() * p.x + self.y_axis() * p.y
    }

    /// Maps a parent point into local coordinates.
    #[must_use]
    pub fn to_local(&self, p: &Point2) -> Point2 {
        let d = p - self.origin;
        Point2::new(d.dot(&self.x_axis()), d.dot(&self.y_axis()))
    }

    /// Expresses `child` (given in this frame) in this frame's parent.
    #[must_use]
    pub fn compose(&self, child: &Frame2) -> Frame2 {
        Frame2 {
            origin: self.to_world(&child.origin),
            angle: self.angle + child.angle,
        }
    }
}

/// Applies a homogeneous 2D transform to a point.
#[must_use]
pub fn transform_point(m: &Matrix3, p: &Point2) -> Point2 {
    let x = m[(0, 0)] * p.x + m[(0, 1)] * p.y + m[(0, 2)];
    let y = m[(1, 0)] * p.x + m[(1, 1)] * p.y + m[(1, 2)];
    let w = m[(2, 0)] * p.x + m[(2, 1)] * p.y + m[(2, 2)];
    if w.abs() > f64::EPSILON && (w - 1.0).abs() > f64::EPSILON {
        Point2::new(x / w, y / w)
    } else {
        Point2::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn round_trip_local_world() {
        let f = Frame2::new(Point2::new(1.0, 2.0), 0.3);
        let p = Point2::new(-0.7, 4.2);
        let back = f.to_local(&f.to_world(&p));
        assert!((back - p).norm() < 1e-12);
    }

    #[test]
    fn quarter_turn() {
        let f = Frame2::new(Point2::new(1.0, 0.0), FRAC_PI_2);
        let w = f.to_world(&Point2::new(1.0, 0.0));
        assert!((w - Point2::new(1.0, 1.0)).norm() < 1e-12);
    }

    #[test]
    fn matrix_matches_to_world() {
        let f = Frame2::new(Point2::new(-3.0, 0.5), 1.1);
        let p = Point2::new(2.0, -1.0);
        let a = transform_point(&f.to_matrix(), &p);
        let b = f.to_world(&p);
        assert!((a - b).norm() < 1e-12);
    }

    #[test]
    fn compose_equals_matrix_product() {
        let parent = Frame2::new(Point2::new(1.0, 1.0), 0.4);
        let child = Frame2::new(Point2::new(2.0, -1.0), -1.3);
        let composed = parent.compose(&child);
        let m = parent.to_matrix() * child.to_matrix();
        let p = Point2::new(0.25, 3.0);
        let a = composed.to_world(&p);
        let b = transform_point(&m, &p);
        assert!((a - b).norm() < 1e-12);
    }

    #[test]
    fn translation_frame() {
        let f = Frame2::translation(2.0, 3.0);
        assert_eq!(f.to_world(&Point2::origin()), Point2::new(2.0, 3.0));
        assert_eq!(Frame2::default().angle, 0.0);
    }
}
