use crate::error::{GeometryError, Result};
use crate::math::{Matrix3, Point2, Vector2, TOLERANCE};
use crate::mesh::Mesh;

use super::GeneralTransform;

/// Mirrors a mesh across a line given by a point and a direction.
pub struct Mirror {
    line_origin: Point2,
    line_direction: Vector2,
}

impl Mirror {
    /// Creates a new `Mirror` operation.
    #[must_use]
    pub fn new(line_origin: Point2, line_direction: Vector2) -> Self {
        Self {
            line_origin,
            line_direction,
        }
    }

    /// Executes the mirror, returning a new mesh.
    ///
    /// Mirrored triangles have the opposite winding; the region is the same.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if the line direction is zero-length.
    pub fn execute(&self, mesh: &Mesh) -> Result<Mesh> {
        let len = self.line_direction.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let d = self.line_direction / len;
        // 2 d d^T - I
        let reflect = Matrix3::new(
            2.0 * d.x * d.x - 1.0, 2.0 * d.x * d.y, 0.0, //
            2.0 * d.x * d.y, 2.0 * d.y * d.y - 1.0, 0.0, //
            0.0, 0.0, 1.0,
        );
        let t_neg = Matrix3::new_translation(&(-self.line_origin.coords));
        let t_pos = Matrix3::new_translation(&self.line_origin.coords);
        Ok(GeneralTransform::new(t_pos * reflect * t_neg).execute(mesh))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn mirror_across_vertical_line() {
        let mut mesh = Mesh::new();
        mesh.add_rectangle(Point2::new(1.0, 0.0), Point2::new(2.0, 1.0));
        let out = Mirror::new(Point2::origin(), Vector2::new(0.0, 1.0))
            .execute(&mesh)
            .unwrap();
        let b = out.bounds().unwrap();
        assert_relative_eq!(b.min().x, -2.0, epsilon = 1e-12);
        assert_relative_eq!(b.max().x, -1.0, epsilon = 1e-12);
        assert!(out.triangles().iter().all(|t| t.signed_area() < 0.0));
        assert_eq!(out.border().unwrap().len(), 1);
    }

    #[test]
    fn zero_direction_is_rejected() {
        let mirror = Mirror::new(Point2::origin(), Vector2::zeros());
        assert!(mirror.execute(&Mesh::new()).is_err());
    }
}
