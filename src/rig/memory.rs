use std::collections::{HashMap, HashSet};

use slotmap::SlotMap;

use crate::error::RigError;
use crate::math::{Point3, Vector3};

use super::RigHost;

slotmap::new_key_type! {
    /// Unique identifier for a bone in the in-memory rig.
    pub struct BoneId;
}

/// Everything the in-memory rig records about one bone.
#[derive(Debug, Clone)]
pub struct BoneRecord {
    /// The bone's generated name.
    pub name: String,
    /// World-space head position.
    pub head: Point3,
    /// Tail direction relative to the head.
    pub tail_dir: Vector3,
    /// Whether rotation is limited to the fold axis.
    pub fold_axis_only: bool,
    /// Bone this one copies fold-axis rotation from, if any.
    pub copy_rotation_from: Option<BoneId>,
    /// Skeletal parent, if any.
    pub parent: Option<BoneId>,
    /// Vertex indices weighted to this bone.
    pub vertex_group: Vec<usize>,
}

/// Reference [`RigHost`] backed by a slotmap bone arena.
///
/// Records bones, constraints, parent links, and vertex groups without a
/// live host environment; used by the test suite and by adapters that
/// stage a rig before committing it to a host.
#[derive(Debug, Default)]
pub struct MemoryRig {
    armature: Option<String>,
    bones: SlotMap<BoneId, BoneRecord>,
    by_name: HashMap<String, BoneId>,
    grouped: HashSet<usize>,
}

impl MemoryRig {
    /// Creates a new, empty rig.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of bones in the rig.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bones.len()
    }

    /// Whether the rig has no bones.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bones.is_empty()
    }

    /// Looks up a bone by name.
    #[must_use]
    pub fn bone(&self, name: &str) -> Option<&BoneRecord> {
        self.by_name.get(name).map(|&id| &self.bones[id])
    }

    /// Looks up a bone's arena key by name.
    #[must_use]
    pub fn id(&self, name: &str) -> Option<BoneId> {
        self.by_name.get(name).copied()
    }

    /// Name of the armature, once the first fold has created it.
    #[must_use]
    pub fn armature(&self) -> Option<&str> {
        self.armature.as_deref()
    }

    fn bone_id(&self, name: &str) -> Result<BoneId, RigError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| RigError::BoneNotFound(name.to_owned()))
    }
}

impl RigHost for MemoryRig {
    fn ensure_armature(&mut self, name: &str) -> Result<(), RigError> {
        if self.armature.is_none() {
            self.armature = Some(name.to_owned());
        }
        Ok(())
    }

    fn add_bone(&mut self, name: &str, head: Point3, tail_dir: Vector3) -> Result<(), RigError> {
        if self.by_name.contains_key(name) {
            return Err(RigError::DuplicateBone(name.to_owned()));
        }
        let id = self.bones.insert(BoneRecord {
            name: name.to_owned(),
            head,
            tail_dir,
            fold_axis_only: false,
            copy_rotation_from: None,
            parent: None,
            vertex_group: Vec::new(),
        });
        self.by_name.insert(name.to_owned(), id);
        Ok(())
    }

    fn limit_rotation_to_fold_axis(&mut self, bone: &str) -> Result<(), RigError> {
        let id = self.bone_id(bone)?;
        self.bones[id].fold_axis_only = true;
        Ok(())
    }

    fn copy_rotation_fold_axis(&mut self, source: &str, target: &str) -> Result<(), RigError> {
        let source_id = self.bone_id(source)?;
        let target_id = self.bone_id(target)?;
        self.bones[target_id].copy_rotation_from = Some(source_id);
        Ok(())
    }

    fn set_parent(&mut self, child: &str, parent: &str) -> Result<(), RigError> {
        let parent_id = self.bone_id(parent)?;
        let child_id = self.bone_id(child)?;
        self.bones[child_id].parent = Some(parent_id);
        Ok(())
    }

    fn assign_vertex_group(
        &mut self,
        bone: &str,
        indices: &[usize],
        exclude_grouped: bool,
    ) -> Result<(), RigError> {
        let id = self.bone_id(bone)?;
        let kept: Vec<usize> = indices
            .iter()
            .copied()
            .filter(|index| !exclude_grouped || !self.grouped.contains(index))
            .collect();
        self.grouped.extend(kept.iter().copied());
        self.bones[id].vertex_group = kept;
        Ok(())
    }
}
