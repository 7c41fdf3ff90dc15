use crate::error::{Result, SelectionError};
use crate::mesh::{resolve_fold_edge, MeshSnapshot};
use crate::rig::{armature_name, bone_name, RigHost, Side};

use super::chain::FoldChainState;
use super::partition::partition_vertices_default;
use super::plane::FoldPlane;

/// Creates one fold bone driving a single side of the fold plane.
///
/// A linked fold stays in the current numbered fold group and copies the
/// previous bone's fold-axis rotation; a parent fold instead collapses
/// every pending bone under the new one.
pub struct SingleFold {
    side: Side,
    linked: bool,
    as_parent: bool,
}

impl SingleFold {
    /// Creates a new `SingleFold` operation. `as_parent` overrides the
    /// copy-rotation link implied by `linked`.
    #[must_use]
    pub fn new(side: Side, linked: bool, as_parent: bool) -> Self {
        Self {
            side,
            linked,
            as_parent,
        }
    }

    /// Executes the operation and returns the new bone's name.
    ///
    /// Selection resolution, plane construction, and partitioning all run
    /// before the first state or host mutation, so a failed resolution
    /// leaves `state` and `rig` untouched.
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
    ) -> Result<String> {
        let (i0, i1) = resolve_fold_edge(mesh)?;
        let v0 = mesh
            .vertex(i0)
            .ok_or(SelectionError::UnknownVertex(i0))?;
        let v1 = mesh
            .vertex(i1)
            .ok_or(SelectionError::UnknownVertex(i1))?;
        let plane = FoldPlane::from_edge(&v0.position, &v1.position, &v0.normal, &mesh.world)?;
        let groups = partition_vertices_default(mesh, &plane);

        // Linking continues the current numbered fold group instead of
        // starting a new one.
        if !self.linked {
            state.advance();
        }
        let name = bone_name(state.fold_count(), self.side);

        let link_source = if self.linked && !self.as_parent {
            state.last_pending().map(|bone| bone.name.clone())
        } else {
            None
        };

        rig.ensure_armature(&armature_name(state.fold_count()))?;
        rig.add_bone(&name, plane.origin, plane.normal * self.side.tail_sign())?;
        rig.assign_vertex_group(&name, groups.side(self.side), true)?;
        rig.limit_rotation_to_fold_axis(&name)?;

        if let Some(source) = link_source {
            rig.copy_rotation_fold_axis(&source, &name)?;
        } else if self.linked && !self.as_parent {
            log::debug!("linked fold requested with no pending bone to link to");
        }

        if self.as_parent {
            for child in state.take_pending() {
                rig.set_parent(&child.name, &name)?;
            }
        }
        state.push(name.clone(), self.side);

        Ok(name)
    }
}
