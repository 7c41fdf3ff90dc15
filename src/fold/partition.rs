use crate::math::PARTITION_TOLERANCE;
use crate::mesh::MeshSnapshot;

use super::plane::FoldPlane;

/// Disjoint partition of a mesh's vertex indices against a fold plane.
///
/// Every mesh vertex lands in exactly one of the three sets.
#[derive(Debug, Clone, Default)]
pub struct VertexGroups {
    /// Vertices within tolerance of the plane (the fold line itself).
    pub planar: Vec<usize>,
    /// Vertices on the side the plane normal points into.
    pub left: Vec<usize>,
    /// Vertices on the opposite side.
    pub right: Vec<usize>,
}

impl VertexGroups {
    /// Returns the side's vertex set.
    #[must_use]
    pub fn side(&self, side: crate::rig::Side) -> &[usize] {
        match side {
            crate::rig::Side::Left => &self.left,
            crate::rig::Side::Right => &self.right,
        }
    }
}

/// Classifies every mesh vertex against the fold plane by signed distance.
///
/// `eps` is a spatial tolerance across the model, not a bit-level one;
/// [`PARTITION_TOLERANCE`] is the intended default.
#[must_use]
pub fn partition_vertices(mesh: &MeshSnapshot, plane: &FoldPlane, eps: f64) -> VertexGroups {
    let mut groups = VertexGroups::default();
    for vertex in &mesh.vertices {
        let world = mesh.world_position(vertex);
        let dist = plane.signed_distance(&world);
        if dist > eps {
            groups.left.push(vertex.index);
        } else if dist < -eps {
            groups.right.push(vertex.index);
        } else {
            groups.planar.push(vertex.index);
        }
    }
    groups
}

/// [`partition_vertices`] with the default tolerance.
#[must_use]
pub fn partition_vertices_default(mesh: &MeshSnapshot, plane: &FoldPlane) -> VertexGroups {
    partition_vertices(mesh, plane, PARTITION_TOLERANCE)
}
