pub mod bbox_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 4x4 transformation matrix.
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Bit-level tolerance for coincident coordinates in bounding-box scans.
pub const BBOX_TOLERANCE: f64 = 1e-6;

/// Spatial tolerance for classifying vertices against a fold plane.
///
/// Two orders of magnitude coarser than [`BBOX_TOLERANCE`]: it measures
/// distance across a model-scale mesh, not coordinate coincidence.
pub const PARTITION_TOLERANCE: f64 = 1e-4;

/// Transforms a point by a 4x4 affine matrix (w = 1).
#[must_use]
pub fn transform_point(matrix: &Matrix4, point: &Point3) -> Point3 {
    let v = matrix * nalgebra::Vector4::new(point.x, point.y, point.z, 1.0);
    Point3::new(v.x, v.y, v.z)
}

/// Transforms a direction vector by a 4x4 matrix (w = 0, ignoring translation).
#[must_use]
pub fn transform_direction(matrix: &Matrix4, dir: &Vector3) -> Vector3 {
    let v = matrix * nalgebra::Vector4::new(dir.x, dir.y, dir.z, 0.0);
    Vector3::new(v.x, v.y, v.z)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn transform_point_applies_translation() {
        let m = Matrix4::new_translation(&Vector3::new(1.0, 2.0, 3.0));
        let p = transform_point(&m, &Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(p.x, 2.0);
        assert_relative_eq!(p.y, 2.0);
        assert_relative_eq!(p.z, 3.0);
    }

    #[test]
    fn transform_direction_ignores_translation() {
        let m = Matrix4::new_translation(&Vector3::new(5.0, 5.0, 5.0));
        let d = transform_direction(&m, &Vector3::new(0.0, 1.0, 0.0));
        assert_relative_eq!(d.x, 0.0);
        assert_relative_eq!(d.y, 1.0);
        assert_relative_eq!(d.z, 0.0);
    }
}
