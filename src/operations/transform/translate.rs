use crate::math::{Matrix3, Vector2};
use crate::mesh::Mesh;

use super::GeneralTransform;

/// Translates a mesh by a displacement vector.
pub struct Translate {
    displacement: Vector2,
}

impl Translate {
    /// Creates a new `Translate` operation.
    #[must_use]
    pub fn new(displacement: Vector2) -> Self {
        Self { displacement }
    }

    /// Executes the translation, returning a new mesh.
    #[must_use]
    pub fn execute(&self, mesh: &Mesh) -> Mesh {
        GeneralTransform::new(Matrix3::new_translation(&self.displacement)).execute(mesh)
    }
}
