use cgmath::{Deg, Matrix, Matrix4, Vector3 as Vec3};

/// Bakes a position and an Euler rotation into a single matrix.
///
/// The translation is applied last, after rotating around Y, then X, then Z (YXZ order).
/// Rotation angles are expressed in degrees, as stored by the host knobs.
pub fn from_position_rotation(position: Vec3<f32>, rotation: Vec3<f32>) -> Matrix4<f32> {
    let rot = Matrix4::from_angle_y(Deg(rotation.y))
        * Matrix4::from_angle_x(Deg(rotation.x))
        * Matrix4::from_angle_z(Deg(rotation.z));
    Matrix4::from_translation(position) * rot
}

/// Converts a host object-to-world matrix into the renderer convention.
///
/// The host stores matrices row-major (`matrix[row][column]`) while the renderer indexes
/// columns first, so the conversion is a transpose.
pub fn from_host_matrix(matrix: [[f32; 4]; 4]) -> Matrix4<f32> {
    Matrix4::from(matrix).transpose()
}
