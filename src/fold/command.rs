use crate::error::Result;
use crate::mesh::MeshSnapshot;
use crate::rig::{RigHost, Side};

use super::chain::FoldChainState;
use super::dual::DualFold;
use super::single::SingleFold;

/// The nine fold commands exposed to the host, each a fixed parameter
/// tuple over [`SingleFold`] and [`DualFold`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoldCommand {
    /// One LEFT bone, new fold group.
    LeftFold,
    /// One LEFT bone linked to the previous bone, same fold group.
    LinkedLeftFold,
    /// One LEFT bone collapsing all pending bones under it.
    ParentLeftFold,
    /// One RIGHT bone, new fold group.
    RightFold,
    /// One RIGHT bone linked to the previous bone, same fold group.
    LinkedRightFold,
    /// One RIGHT bone collapsing all pending bones under it.
    ParentRightFold,
    /// LEFT and RIGHT bones from one plane, RIGHT linked to LEFT.
    DualFold,
    /// Dual fold collapsing pending bones under the same-side new bone.
    ParentDualFold,
    /// Dual fold collapsing pending bones under the opposite-side new bone.
    InverseParentDualFold,
}

/// Bones created by a successfully executed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FoldOutcome {
    /// A single bone was created.
    Single(String),
    /// A LEFT/RIGHT pair was created.
    Dual {
        /// The LEFT bone's name.
        left: String,
        /// The RIGHT bone's name.
        right: String,
    },
}

impl FoldCommand {
    /// Every command, in menu order.
    pub const ALL: [Self; 9] = [
        Self::LeftFold,
        Self::LinkedLeftFold,
        Self::ParentLeftFold,
        Self::RightFold,
        Self::LinkedRightFold,
        Self::ParentRightFold,
        Self::DualFold,
        Self::ParentDualFold,
        Self::InverseParentDualFold,
    ];

    /// Human-readable label for host menus.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::LeftFold => "Create Left Fold",
            Self::LinkedLeftFold => "Create Linked Left Fold",
            Self::ParentLeftFold => "Create Parent Left Fold",
            Self::RightFold => "Create Right Fold",
            Self::LinkedRightFold => "Create Linked Right Fold",
            Self::ParentRightFold => "Create Parent Right Fold",
            Self::DualFold => "Create Dual Fold",
            Self::ParentDualFold => "Create Parent Dual Fold",
            Self::InverseParentDualFold => "Create Inverse Parent Dual Fold",
        }
    }

    /// Executes the command against the current selection, chain state,
    /// and host rig.
    ///
    /// # Errors
    ///
    /// Returns an error if the selection does not resolve to a fold edge,
    /// the edge is degenerate, or a host rig operation fails. Selection
    /// and geometry failures leave `state` and `rig` untouched.
    pub fn execute(
        self,
        mesh: &MeshSnapshot,
        state: &mut FoldChainState,
        rig: &mut dyn RigHost,
    ) -> Result<FoldOutcome> {
        let single = SingleFold::new;
        match self {
            Self::LeftFold => single(Side::Left, false, false)
                .execute(mesh, state, rig)
                .map(FoldOutcome::Single),
            Self::LinkedLeftFold => single(Side::Left, true, false)
                .execute(mesh, state, rig)
                .map(FoldOutcome::Single),
            Self::ParentLeftFold => single(Side::Left, true, true)
                .execute(mesh, state, rig)
                .map(FoldOutcome::Single),
            Self::RightFold => single(Side::Right, false, false)
                .execute(mesh, state, rig)
                .map(FoldOutcome::Single),
            Self::LinkedRightFold => single(Side::Right, true, false)
                .execute(mesh, state, rig)
                .map(FoldOutcome::Single),
            Self::ParentRightFold => single(Side::Right, true, true)
                .execute(mesh, state, rig)
                .map(FoldOutcome::Single),
            Self::DualFold => DualFold::new(false, false)
                .execute(mesh, state, rig)
                .map(|(left, right)| FoldOutcome::Dual { left, right }),
            Self::ParentDualFold => DualFold::new(true, false)
                .execute(mesh, state, rig)
                .map(|(left, right)| FoldOutcome::Dual { left, right }),
            Self::InverseParentDualFold => DualFold::new(true, true)
                .execute(mesh, state, rig)
                .map(|(left, right)| FoldOutcome::Dual { left, right }),
        }
    }
}
