use crate::math::frame_2d::transform_point;
use crate::math::{Frame2, Matrix3};
use crate::mesh::Mesh;

/// Applies an arbitrary homogeneous 3x3 matrix to a mesh.
pub struct GeneralTransform {
    matrix: Matrix3,
}

impl GeneralTransform {
    /// Creates a new `GeneralTransform` operation.
    #[must_use]
    pub fn new(matrix: Matrix3) -> Self {
        Self { matrix }
    }

    /// Maps a mesh given in `frame`'s local coordinates into its parent.
    #[must_use]
    pub fn from_frame(frame: &Frame2) -> Self {
        Self::new(frame.to_matrix())
    }

    #[must_use]
    pub fn matrix(&self) -> &Matrix3 {
        &self.matrix
    }

    /// Executes the transformation, returning a new mesh with the same
    /// parameters.
    ///
    /// Triangles that collapse under a singular matrix are dropped.
    #[must_use]
    pub fn execute(&self, mesh: &Mesh) -> Mesh {
        let mut out = Mesh::with_params(*mesh.params());
        for tri in mesh.triangles() {
            let [a, b, c] = tri.points().map(|p| transform_point(&self.matrix, &p));
            out.add_triangle(a, b, c);
        }
        out
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    fn unit_square() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_rectangle(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0));
        mesh
    }

    #[test]
    fn identity_keeps_triangles() {
        let mesh = unit_square();
        let out = GeneralTransform::new(Matrix3::identity()).execute(&mesh);
        assert_eq!(out.len(), 2);
        assert_eq!(out.triangles()[0].points(), mesh.triangles()[0].points());
    }

    #[test]
    fn frame_places_local_geometry() {
        let frame = Frame2::new(Point2::new(5.0, 1.0), FRAC_PI_2);
        let out = GeneralTransform::from_frame(&frame).execute(&unit_square());
        assert_relative_eq!(out.area(), 1.0, epsilon = 1e-12);
        let b = out.bounds().unwrap();
        assert_relative_eq!(b.min().x, 4.0, epsilon = 1e-12);
        assert_relative_eq!(b.max().y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn mesh_transformed_matches_execute() {
        let m = Matrix3::new_translation(&crate::math::Vector2::new(1.0, 2.0));
        let mesh = unit_square();
        let a = mesh.transformed(&m);
        let b = GeneralTransform::new(m).execute(&mesh);
        assert_eq!(a.triangles(), b.triangles());
    }

    #[test]
    fn singular_matrix_collapses_everything() {
        let flatten = Matrix3::new(1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0);
        assert!(GeneralTransform::new(flatten).execute(&unit_square()).is_empty());
    }
}
