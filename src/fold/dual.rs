use crate::error::{Result, SelectionError};
use crate::mesh::{resolve_fold_edge, MeshSnapshot};
use crate::rig::{armature_name, bone_name, RigHost, Side};

use super::chain::FoldChainState;
use super::partition::partition_vertices_default;
use super::plane::FoldPlane;

/// Creates LEFT and RIGHT fold bones from one fold-plane computation,
/// with the RIGHT bone copying the LEFT bone's fold-axis rotation.
///
/// With `as_parent`, every pending bone is collapsed under the new bone
/// matching its side tag (or the opposite side when `inverse`).
pub struct DualFold {
    as_parent: bool,
    inverse: bool,
}

impl DualFold {
    /// Creates a new `DualFold` operation.
    #[must_use]
    pub fn new(as_parent: bool, inverse: bool) -> Self {
        Self { as_parent, inverse }
    }

    /// Executes the operation and returns the (LEFT, RIGHT) bone names.
    ///
    /// A dual fold always starts a new numbered fold group. As with
    /// [`super::SingleFold`], all geometry is computed before the first
    /// mutation.
    ///
    /// # Errors
    ///
    /// Returns an error if the selection does not resolve to a fold edge,
    /// the edge is degenerate, or a host rig operation fails.
    pub fn execute(
        &self,
        mesh: &MeshSnapshot,
        state: &mut FoldChainState,
        rig: &mut dyn RigHost,
    ) -> Result<(String, String)> {
        let (i0, i1) = resolve_fold_edge(mesh)?;
        let v0 = mesh
            .vertex(i0)
            .ok_or(SelectionError::UnknownVertex(i0))?;
        let v1 = mesh
            .vertex(i1)
            .ok_or(SelectionError::UnknownVertex(i1))?;
        let plane = FoldPlane::from_edge(&v0.position, &v1.position, &v0.normal, &mesh.world)?;
        let groups = partition_vertices_default(mesh, &plane);

        let index = state.advance();
        let left_name = bone_name(index, Side::Left);
        let right_name = bone_name(index, Side::Right);

        rig.ensure_armature(&armature_name(index))?;
        for (name, side) in [(&left_name, Side::Left), (&right_name, Side::Right)] {
            rig.add_bone(name, plane.origin, plane.normal * side.tail_sign())?;
            rig.assign_vertex_group(name, groups.side(side), true)?;
            rig.limit_rotation_to_fold_axis(name)?;
        }
        rig.copy_rotation_fold_axis(&left_name, &right_name)?;

        if self.as_parent {
            for child in state.take_pending() {
                let parent_side = if self.inverse {
                    child.side.opposite()
                } else {
                    child.side
                };
                let parent = match parent_side {
                    Side::Left => &left_name,
                    Side::Right => &right_name,
                };
                rig.set_parent(&child.name, parent)?;
            }
        }
        state.push(left_name.clone(), Side::Left);
        state.push(right_name.clone(), Side::Right);

        Ok((left_name, right_name))
    }
}
