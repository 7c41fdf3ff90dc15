use crate::error::GeometryError;
use crate::math::{transform_direction, transform_point, Matrix4, Point3, Vector3, TOLERANCE};

/// Tolerance below which the plane normal counts as perpendicular to the
/// preferred -X axis, triggering the +Y fallback.
const FACING_TOLERANCE: f64 = 1e-2;

/// A world-space fold plane: a point on the fold line and a unit normal.
///
/// The normal's sign follows a fixed convention (prefer -X-facing, falling
/// back to +Y-facing when the fold is nearly aligned with X), so repeated
/// folds on similarly oriented edges keep consistent left/right semantics
/// regardless of vertex winding order.
#[derive(Debug, Clone, Copy)]
pub struct FoldPlane {
    /// World-space midpoint of the fold edge.
    pub origin: Point3,
    /// Unit-length world-space plane normal.
    pub normal: Vector3,
}

impl FoldPlane {
    /// Builds the fold plane from two local-space edge endpoints and a
    /// local-space reference normal.
    ///
    /// The plane normal is the cross product of the world-space fold
    /// direction and the transformed reference normal, sign-disambiguated
    /// by the -X/+Y convention.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError`] for a zero-length fold edge, a zero
    /// reference normal, or a fold direction parallel to the reference
    /// normal (undefined cross product).
    pub fn from_edge(
        v0: &Point3,
        v1: &Point3,
        ref_normal: &Vector3,
        world: &Matrix4,
    ) -> Result<Self, GeometryError> {
        let midpoint = nalgebra::center(v0, v1);
        let origin = transform_point(world, &midpoint);

        let world_v0 = transform_point(world, v0);
        let world_v1 = transform_point(world, v1);
        let fold_vec = world_v1 - world_v0;
        let fold_len = fold_vec.norm();
        if fold_len < TOLERANCE {
            return Err(GeometryError::ZeroLengthFoldEdge);
        }
        let fold_dir = fold_vec / fold_len;

        let vert_normal = transform_direction(world, ref_normal);
        let vert_len = vert_normal.norm();
        if vert_len < TOLERANCE {
            return Err(GeometryError::ZeroVector);
        }
        let vert_normal = vert_normal / vert_len;

        let normal = fold_dir.cross(&vert_normal);
        let normal_len = normal.norm();
        if normal_len < TOLERANCE {
            return Err(GeometryError::Degenerate(
                "fold direction is parallel to the reference normal".into(),
            ));
        }
        let mut normal = normal / normal_len;

        // Keep the normal roughly aligned with -X, or +Y when the fold
        // runs nearly parallel to the X axis.
        let mut facing = normal.dot(&Vector3::new(-1.0, 0.0, 0.0));
        if facing.abs() < FACING_TOLERANCE {
            log::debug!("fold plane nearly perpendicular to X, using +Y to orient");
            facing = normal.dot(&Vector3::new(0.0, 1.0, 0.0));
        }
        if facing < 0.0 {
            normal = -normal;
        }

        Ok(Self { origin, normal })
    }

    /// Signed distance from a world-space point to the plane. Positive on
    /// the side the normal points into.
    #[must_use]
    pub fn signed_distance(&self, point: &Point3) -> f64 {
        self.normal.dot(&(point - self.origin))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn unit_square_left_edge() {
        let plane = FoldPlane::from_edge(
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(0.0, 1.0, 0.0),
            &Vector3::z(),
            &Matrix4::identity(),
        )
        .unwrap();
        assert_relative_eq!(plane.origin.x, 0.0);
        assert_relative_eq!(plane.origin.y, 0.5);
        assert_relative_eq!(plane.origin.z, 0.0);
        assert_relative_eq!(plane.normal.x, -1.0, epsilon = 1e-12);
        assert_relative_eq!(plane.normal.y, 0.0);
        assert_relative_eq!(plane.normal.z, 0.0);
    }

    #[test]
    fn normal_is_unit_length() {
        let plane = FoldPlane::from_edge(
            &Point3::new(0.2, -0.7, 0.1),
            &Point3::new(1.3, 2.0, 0.4),
            &Vector3::new(0.1, 0.2, 1.0),
            &Matrix4::identity(),
        )
        .unwrap();
        assert_relative_eq!(plane.normal.norm(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn orientation_consistent_under_reflection() {
        // The same edge reflected across the X axis must not flip the
        // plane normal.
        let a = FoldPlane::from_edge(
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(0.0, 1.0, 0.0),
            &Vector3::z(),
            &Matrix4::identity(),
        )
        .unwrap();
        let b = FoldPlane::from_edge(
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(0.0, -1.0, 0.0),
            &Vector3::z(),
            &Matrix4::identity(),
        )
        .unwrap();
        assert_relative_eq!(a.normal.x, b.normal.x, epsilon = 1e-12);
        assert_relative_eq!(a.normal.y, b.normal.y, epsilon = 1e-12);
        assert_relative_eq!(a.normal.z, b.normal.z, epsilon = 1e-12);
    }

    #[test]
    fn x_aligned_fold_uses_y_fallback() {
        let plane = FoldPlane::from_edge(
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(1.0, 0.0, 0.0),
            &Vector3::z(),
            &Matrix4::identity(),
        )
        .unwrap();
        // Raw cross product points toward -Y; the fallback flips it.
        assert_relative_eq!(plane.normal.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn world_transform_moves_origin() {
        let world = Matrix4::new_translation(&Vector3::new(2.0, 0.0, 0.0));
        let plane = FoldPlane::from_edge(
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(0.0, 1.0, 0.0),
            &Vector3::z(),
            &world,
        )
        .unwrap();
        assert_relative_eq!(plane.origin.x, 2.0);
        assert_relative_eq!(plane.origin.y, 0.5);
    }

    #[test]
    fn zero_length_edge_is_rejected() {
        let result = FoldPlane::from_edge(
            &Point3::new(0.5, 0.5, 0.0),
            &Point3::new(0.5, 0.5, 0.0),
            &Vector3::z(),
            &Matrix4::identity(),
        );
        assert!(matches!(result, Err(GeometryError::ZeroLengthFoldEdge)));
    }

    #[test]
    fn parallel_reference_normal_is_rejected() {
        let result = FoldPlane::from_edge(
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(0.0, 1.0, 0.0),
            &Vector3::y(),
            &Matrix4::identity(),
        );
        assert!(matches!(result, Err(GeometryError::Degenerate(_))));
    }

    #[test]
    fn signed_distance_sides() {
        let plane = FoldPlane::from_edge(
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(0.0, 1.0, 0.0),
            &Vector3::z(),
            &Matrix4::identity(),
        )
        .unwrap();
        // Normal faces -X, so points with positive x sit on the negative side.
        assert!(plane.signed_distance(&Point3::new(1.0, 0.5, 0.0)) < 0.0);
        assert!(plane.signed_distance(&Point3::new(-1.0, 0.5, 0.0)) > 0.0);
        assert_relative_eq!(plane.signed_distance(&Point3::new(0.0, 7.0, 0.0)), 0.0);
    }
}
