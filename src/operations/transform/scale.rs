use crate::error::{GeometryError, Result};
use crate::math::{Matrix3, Point2, TOLERANCE};
use crate::mesh::Mesh;

use super::GeneralTransform;

/// Scales a mesh uniformly about a centre point.
pub struct Scale {
    center: Point2,
    factor: f64,
}

impl Scale {
    /// Creates a new `Scale` operation.
    #[must_use]
    pub fn new(center: Point2, factor: f64) -> Self {
        Self { center, factor }
    }

    /// Executes the scaling, returning a new mesh.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the factor is (nearly) zero.
    pub fn execute(&self, mesh: &Mesh) -> Result<Mesh> {
        if self.factor.abs() < TOLERANCE {
            return Err(GeometryError::Degenerate("scale factor must be non-zero".into()).into());
        }
        let t_neg = Matrix3::new_translation(&(-self.center.coords));
        let s = Matrix3::new_scaling(self.factor);
        let t_pos = Matrix3::new_translation(&self.center.coords);
        Ok(GeneralTransform::new(t_pos * s * t_neg).execute(mesh))
    }
}
