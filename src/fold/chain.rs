use crate::rig::Side;

/// A fold bone created earlier in the session and not yet collapsed under
/// a parent.
#[derive(Debug, Clone)]
pub struct PendingBone {
    /// The bone's generated name in the host rig.
    pub name: String,
    /// Which side of its fold plane the bone drives.
    pub side: Side,
}

/// Session-scoped fold-chain state.
///
/// Owned by the orchestration layer and passed `&mut` into each fold
/// operation; never stored globally. `pending` only accumulates until a
/// parent operation collapses it back to empty, and `fold_count` only
/// grows.
#[derive(Debug, Clone, Default)]
pub struct FoldChainState {
    pending: Vec<PendingBone>,
    fold_count: u32,
}

impl FoldChainState {
    /// Creates the empty state for a fresh editing session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current fold index (number of numbered fold groups so far).
    #[must_use]
    pub fn fold_count(&self) -> u32 {
        self.fold_count
    }

    /// Bones awaiting a parent, oldest first.
    #[must_use]
    pub fn pending(&self) -> &[PendingBone] {
        &self.pending
    }

    /// Starts the next numbered fold group and returns its index.
    pub(crate) fn advance(&mut self) -> u32 {
        self.fold_count += 1;
        self.fold_count
    }

    /// The most recently created pending bone.
    pub(crate) fn last_pending(&self) -> Option<&PendingBone> {
        self.pending.last()
    }

    /// Records a newly created bone.
    pub(crate) fn push(&mut self, name: String, side: Side) {
        self.pending.push(PendingBone { name, side });
    }

    /// Removes and returns every pending bone (the parent collapse).
    pub(crate) fn take_pending(&mut self) -> Vec<PendingBone> {
        std::mem::take(&mut self.pending)
    }
}
