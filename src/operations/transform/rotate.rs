use crate::math::{Matrix3, Point2};
use crate::mesh::Mesh;

use super::GeneralTransform;

/// Rotates a mesh about a centre point.
pub struct Rotate {
    center: Point2,
    angle: f64,
}

impl Rotate {
    /// Creates a new `Rotate` operation.
    ///
    /// * `angle` - Counter-clockwise rotation angle in radians.
    #[must_use]
    pub fn new(center: Point2, angle: f64) -> Self {
        Self { center, angle }
    }

    /// Executes the rotation, returning a new mesh.
    #[must_use]
    pub fn execute(&self, mesh: &Mesh) -> Mesh {
        // Translate to origin, rotate, translate back
        let t_neg = Matrix3::new_translation(&(-self.center.coords));
        let rot = Matrix3::new_rotation(self.angle);
        let t_pos = Matrix3::new_translation(&self.center.coords);
        GeneralTransform::new(t_pos * rot * t_neg).execute(mesh)
    }
}
