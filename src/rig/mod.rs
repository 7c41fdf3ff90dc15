pub mod memory;

pub use memory::{BoneId, BoneRecord, MemoryRig};

use std::fmt;

use crate::error::RigError;
use crate::math::{Point3, Vector3};

/// Which side of the fold plane a bone drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The side the plane normal points into.
    Left,
    /// The opposite side.
    Right,
}

impl Side {
    /// Tag used in generated bone names.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
        }
    }

    /// The other side.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Sign applied to the plane normal to get the bone's tail direction.
    /// Right-side bones point away from the plane normal.
    #[must_use]
    pub fn tail_sign(self) -> f64 {
        match self {
            Self::Left => 1.0,
            Self::Right => -1.0,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Generated name of the armature for a numbered fold group.
#[must_use]
pub fn armature_name(fold_index: u32) -> String {
    format!("Fold {fold_index:03}")
}

/// Generated name of a fold bone, e.g. `"Fold 001 LEFT Bone"`.
#[must_use]
pub fn bone_name(fold_index: u32, side: Side) -> String {
    format!("Fold {fold_index:03} {side} Bone")
}

/// Narrow interface onto the host's skeletal-rig primitives.
///
/// The fold operations compute all geometry before calling any of these,
/// so a failing host call can only lose the bone being created, never
/// corrupt the classification. Constraint semantics follow the hinge
/// model: rotation is limited to the fold axis (local X), copy-rotation
/// propagates only that axis, and parent links inherit rotation and full
/// scale.
pub trait RigHost {
    /// Ensures the enclosing armature exists, creating it under the given
    /// name on first use. Later calls are no-ops; the armature keeps the
    /// name of the fold that created it.
    ///
    /// # Errors
    ///
    /// Returns an error if the armature cannot be created.
    fn ensure_armature(&mut self, name: &str) -> Result<(), RigError>;

    /// Adds a bone with the given world-space head and tail direction.
    ///
    /// # Errors
    ///
    /// Returns an error if the bone cannot be created (e.g. name clash).
    fn add_bone(&mut self, name: &str, head: Point3, tail_dir: Vector3) -> Result<(), RigError>;

    /// Constrains a bone so only its fold-axis rotation is free.
    ///
    /// # Errors
    ///
    /// Returns an error if the bone is unknown.
    fn limit_rotation_to_fold_axis(&mut self, bone: &str) -> Result<(), RigError>;

    /// Makes `target` copy `source`'s rotation on the fold axis only.
    ///
    /// # Errors
    ///
    /// Returns an error if either bone is unknown.
    fn copy_rotation_fold_axis(&mut self, source: &str, target: &str) -> Result<(), RigError>;

    /// Sets a skeletal parent relationship with rotation and scale
    /// inheritance.
    ///
    /// # Errors
    ///
    /// Returns an error if either bone is unknown.
    fn set_parent(&mut self, child: &str, parent: &str) -> Result<(), RigError>;

    /// Assigns a full-weight vertex group named after the bone. When
    /// `exclude_grouped` is set, vertices already weighted to an earlier
    /// group are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the bone is unknown.
    fn assign_vertex_group(
        &mut self,
        bone: &str,
        indices: &[usize],
        exclude_grouped: bool,
    ) -> Result<(), RigError>;
}
